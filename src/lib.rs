// src/lib.rs
pub mod colors;
pub mod config;
pub mod error;
pub mod logger;
pub mod registry;
pub mod sink;
pub mod snippets;

pub use error::*;

pub use colors::{palette, reset_code, Background, Foreground, RESET};
pub use config::LoggerConfig;
pub use logger::ColorfulLogger;
pub use registry::LoggerRegistry;
pub use sink::{BufferSink, LogSink, Sink};
