mod client;
mod platform;
mod retry;
mod types;

pub use client::{Client, Credentials};
pub use platform::Platform;
pub use retry::RetryPolicy;
pub use types::{JobResult, DEFAULT_DATA_INDEX, DEFAULT_EVENT_HOST};
