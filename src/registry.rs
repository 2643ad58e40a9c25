// src/registry.rs
//! Lifecycle of the shared logger.
//!
//! A [`LoggerRegistry`] holds at most one [`ColorfulLogger`]. The first
//! successful `initialize*` call builds it; later calls return that same
//! instance and their arguments are discarded. A failed first call leaves
//! the registry empty so a later valid call can still succeed.
//!
//! Hosts can own a registry and pass it around, or use the process-wide
//! one through the free functions in this module.

use crate::config::LoggerConfig;
use crate::error::LoggerError;
use crate::logger::ColorfulLogger;
use crate::sink::Sink;
use once_cell::sync::OnceCell;

#[derive(Debug, Default)]
pub struct LoggerRegistry {
    slot: OnceCell<ColorfulLogger>,
}

impl LoggerRegistry {
    pub const fn new() -> Self {
        LoggerRegistry {
            slot: OnceCell::new(),
        }
    }

    /// Initialize with the logger enabled
    pub fn initialize(&self, name: &str) -> Result<&ColorfulLogger, LoggerError> {
        self.initialize_with(name, true)
    }

    pub fn initialize_with(&self, name: &str, enabled: bool) -> Result<&ColorfulLogger, LoggerError> {
        // OnceCell runs at most one initializer at a time and keeps the
        // slot empty when it fails.
        self.slot.get_or_try_init(|| {
            let logger = ColorfulLogger::new(name, enabled)?;
            log::debug!("created logger '{}' (enabled: {})", logger.name(), enabled);
            Ok(logger)
        })
    }

    /// Initialize with an explicit sink. The sink is dropped unused when the
    /// registry already holds a logger.
    pub fn initialize_with_sink(
        &self,
        name: &str,
        enabled: bool,
        sink: Box<dyn Sink>,
    ) -> Result<&ColorfulLogger, LoggerError> {
        self.slot
            .get_or_try_init(|| ColorfulLogger::with_sink(name, enabled, sink))
    }

    pub fn initialize_from(&self, config: &LoggerConfig) -> Result<&ColorfulLogger, LoggerError> {
        self.initialize_with(&config.name, config.enabled)
    }

    /// The existing logger, or `UninitializedAccess` if none was created yet
    pub fn current(&self) -> Result<&ColorfulLogger, LoggerError> {
        self.slot.get().ok_or(LoggerError::UninitializedAccess)
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }
}

static GLOBAL: LoggerRegistry = LoggerRegistry::new();

/// The process-wide registry
pub fn global() -> &'static LoggerRegistry {
    &GLOBAL
}

pub fn initialize(name: &str) -> Result<&'static ColorfulLogger, LoggerError> {
    global().initialize(name)
}

pub fn initialize_with(name: &str, enabled: bool) -> Result<&'static ColorfulLogger, LoggerError> {
    global().initialize_with(name, enabled)
}

pub fn initialize_with_sink(
    name: &str,
    enabled: bool,
    sink: Box<dyn Sink>,
) -> Result<&'static ColorfulLogger, LoggerError> {
    global().initialize_with_sink(name, enabled, sink)
}

pub fn initialize_from(config: &LoggerConfig) -> Result<&'static ColorfulLogger, LoggerError> {
    global().initialize_from(config)
}

pub fn current() -> Result<&'static ColorfulLogger, LoggerError> {
    global().current()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Foreground;
    use crate::sink::BufferSink;
    use std::sync::{Arc, Barrier};
    use std::thread;

    #[test]
    fn test_current_before_initialize_fails() {
        let registry = LoggerRegistry::new();
        assert!(!registry.is_initialized());
        assert_eq!(registry.current().unwrap_err(), LoggerError::UninitializedAccess);
    }

    #[test]
    fn test_first_writer_wins() {
        let registry = LoggerRegistry::new();
        let first = registry.initialize_with("first", false).unwrap();
        let second = registry.initialize_with("second", true).unwrap();

        assert!(std::ptr::eq(first, second));
        assert_eq!(second.name(), "first");
        assert!(!second.is_enabled());
        assert!(std::ptr::eq(registry.current().unwrap(), first));
    }

    #[test]
    fn test_failed_initialize_leaves_registry_empty() {
        let registry = LoggerRegistry::new();
        let err = registry.initialize("").unwrap_err();
        assert!(matches!(err, LoggerError::PreconditionViolation { param: "name", .. }));
        assert!(!registry.is_initialized());

        let logger = registry.initialize("recovered").unwrap();
        assert_eq!(logger.name(), "recovered");
        assert!(logger.is_enabled());
    }

    #[test]
    fn test_repeated_sink_is_ignored() {
        let registry = LoggerRegistry::new();
        let kept = BufferSink::new();
        let dropped = BufferSink::new();

        registry
            .initialize_with_sink("mymod", true, Box::new(kept.clone()))
            .unwrap();
        let logger = registry
            .initialize_with_sink("other", true, Box::new(dropped.clone()))
            .unwrap();

        logger.emit_colored("hi", Foreground::Green);
        assert_eq!(kept.len(), 1);
        assert!(dropped.is_empty());
    }

    #[test]
    fn test_concurrent_first_calls_build_one_logger() {
        let registry = Arc::new(LoggerRegistry::new());
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    let logger = registry.initialize(&format!("caller-{}", i)).unwrap();
                    logger as *const ColorfulLogger as usize
                })
            })
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let current = registry.current().unwrap() as *const ColorfulLogger as usize;
        assert!(addresses.iter().all(|&addr| addr == current));
    }

    #[test]
    fn test_initialize_from_config() {
        let registry = LoggerRegistry::new();
        let config = LoggerConfig {
            name: "configured".to_string(),
            enabled: false,
        };
        let logger = registry.initialize_from(&config).unwrap();
        assert_eq!(logger.name(), "configured");
        assert!(!logger.is_enabled());
    }
}
