// src/snippets/output.rs
use crate::colors::{Background, Foreground};
use crate::error::LoggerError;
use crate::registry::{self, LoggerRegistry};

const ONLY_ON_DATAGEN: &str = "(Only called on task '[runDatagen]')";
const AS_POOL_CHILD: &str = "(as Pool Child)";

/// Text for the start of an initialization step
pub fn initializing_message(target: &str, only_on_datagen: bool) -> String {
    if only_on_datagen {
        format!(" >> Initializing: {} {} ", target, ONLY_ON_DATAGEN)
    } else {
        format!(" >> Initializing: {} ", target)
    }
}

/// Text for one registered entry. Pool children get a shallower marker and
/// the pool suffix.
pub fn registering_message(target: &str, identifier: &str, as_pool_child: bool) -> String {
    if as_pool_child {
        format!("\t\t> Registering {} {}: {}", target, identifier, AS_POOL_CHILD)
    } else {
        format!("\t\t>> Registering {}: {}", target, identifier)
    }
}

/// Text for a generation step; suffixes go pool first, then datagen
pub fn generating_message(target: &str, as_pool_child: bool, only_on_datagen: bool) -> String {
    match (as_pool_child, only_on_datagen) {
        (true, true) => format!(" >> Generating {} {} {} ", target, AS_POOL_CHILD, ONLY_ON_DATAGEN),
        (false, true) => format!(" >> Generating {} {} ", target, ONLY_ON_DATAGEN),
        (true, false) => format!(" >> Generating {} {} ", target, AS_POOL_CHILD),
        (false, false) => format!(" >> Generating {}", target),
    }
}

pub fn initializing_snippet_in(
    registry: &LoggerRegistry,
    target: &str,
    only_on_datagen: bool,
    foreground: Foreground,
    background: Background,
) -> Result<(), LoggerError> {
    let logger = registry.current()?;
    logger.emit_styled(&initializing_message(target, only_on_datagen), foreground, background);
    Ok(())
}

pub fn registering_snippet_in(
    registry: &LoggerRegistry,
    target: &str,
    identifier: &str,
    as_pool_child: bool,
    foreground: Foreground,
) -> Result<(), LoggerError> {
    let logger = registry.current()?;
    logger.emit_colored(&registering_message(target, identifier, as_pool_child), foreground);
    Ok(())
}

pub fn generating_snippet_in(
    registry: &LoggerRegistry,
    target: &str,
    as_pool_child: bool,
    only_on_datagen: bool,
    foreground: Foreground,
    background: Background,
) -> Result<(), LoggerError> {
    let logger = registry.current()?;
    logger.emit_styled(
        &generating_message(target, as_pool_child, only_on_datagen),
        foreground,
        background,
    );
    Ok(())
}

/// Log an initialization step through the process-wide logger
pub fn initializing_snippet(
    target: &str,
    only_on_datagen: bool,
    foreground: Foreground,
    background: Background,
) -> Result<(), LoggerError> {
    initializing_snippet_in(registry::global(), target, only_on_datagen, foreground, background)
}

/// Log a registration through the process-wide logger
pub fn registering_snippet(
    target: &str,
    identifier: &str,
    as_pool_child: bool,
    foreground: Foreground,
) -> Result<(), LoggerError> {
    registering_snippet_in(registry::global(), target, identifier, as_pool_child, foreground)
}

/// Log a generation step through the process-wide logger
pub fn generating_snippet(
    target: &str,
    as_pool_child: bool,
    only_on_datagen: bool,
    foreground: Foreground,
    background: Background,
) -> Result<(), LoggerError> {
    generating_snippet_in(
        registry::global(),
        target,
        as_pool_child,
        only_on_datagen,
        foreground,
        background,
    )
}
