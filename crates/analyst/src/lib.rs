pub mod client;
mod wire;

pub use client::{LogAnalyst, EMPTY_RESPONSE_MESSAGE, FAILURE_MESSAGE, MISSING_KEY_MESSAGE};
