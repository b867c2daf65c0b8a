// Puzzle site API module.
// Provides the authenticated client and endpoint helpers.

pub mod client;
pub mod endpoints;

pub use client::{AOC_BASE_URL, AocClient, DEFAULT_TIMEOUT};
pub use endpoints::input_endpoint;
