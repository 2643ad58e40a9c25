use crate::snippets::exception::{non_blank_param_error, non_null_get_error};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoggerError {
    /// A required argument was missing or blank at the call boundary
    #[error("{}", non_blank_param_error(.param, .method))]
    PreconditionViolation {
        param: &'static str,
        method: &'static str,
    },

    /// The logger was used before any successful `initialize` call
    #[error(
        "{} Initialize the registry with '@initialize(name, enabled)' first.",
        non_null_get_error("ColorfulLogger", "current")
    )]
    UninitializedAccess,
}
