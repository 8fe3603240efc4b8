//! Command-line interface: argument parsing and interactive prompts.

pub mod args;
pub mod prompt;

pub use args::Args;
pub use prompt::{prompt_credentials, Credentials, DEFAULT_PASSWORD};
