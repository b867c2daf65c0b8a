// aocfetch: fetch and cache daily puzzle inputs, and solve small linear systems exactly.

pub mod aoc;
pub mod cache;
pub mod cli;
pub mod config;
pub mod credential;
pub mod driver;
pub mod error;
pub mod linalg;
pub mod logger;
pub mod puzzle;
