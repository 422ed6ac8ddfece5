pub mod client;
pub mod orchestrator;
pub mod protocol;

pub use client::{GenerationClient, SubmitTransport};
pub use orchestrator::submit_form;
