//! HTTP client layer — `HeketiHttp` with accepted-operation resolution.

pub mod client;
pub mod poll;
pub mod response;

pub use client::{HeketiHttp, X_PENDING};
pub use poll::PollConfig;
pub use response::FinalResponse;
