//! # domashka-api
//!
//! Client for the Practicum homework-status endpoint plus the shape checks
//! and status interpretation applied to its responses.

mod client;
pub mod response;

#[cfg(test)]
mod tests;

pub use client::PracticumClient;
