//! # domashka-core
//!
//! Core types, traits, configuration, and error handling for the domashka bot.

pub mod config;
pub mod error;
pub mod traits;
pub mod verdict;
