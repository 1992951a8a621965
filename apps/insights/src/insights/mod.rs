// Job Insights: fetch remote listings, keep software roles, score them against
// the caller's priorities, rank, and summarise.
// The feed is the only I/O; everything after the fetch is pure.

pub mod filter;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod ranking;
pub mod scoring;
pub mod source;
