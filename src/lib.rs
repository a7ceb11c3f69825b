//! AAC Board Library
//!
//! This library provides the navigation engine behind a two-level
//! augmentative-and-alternative-communication board: categories of symbols,
//! the items inside them, and the line-oriented file format that stores them.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod parser;
pub mod services;
