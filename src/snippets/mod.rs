//! Pre-formatted message templates.
//!
//! [`output`] builds the lifecycle lines ("initializing", "registering",
//! "generating") and emits them through the shared logger; [`exception`]
//! builds standardized error messages.

pub mod exception;
pub mod output;

pub use output::{
    generating_message, generating_snippet, generating_snippet_in, initializing_message,
    initializing_snippet, initializing_snippet_in, registering_message, registering_snippet,
    registering_snippet_in,
};
