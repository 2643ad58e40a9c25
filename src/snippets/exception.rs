// src/snippets/exception.rs
// Standardized error message templates

/// `[<type>]: Parameter '<param>' must not be null when calling '@<method>'.`
pub fn non_null_param(output_type: &str, param: &str, method: &str) -> String {
    format!(
        "[{}]: Parameter '{}' must not be null when calling '@{}'.",
        output_type, param, method
    )
}

pub fn non_null_param_error(param: &str, method: &str) -> String {
    non_null_param("ERROR", param, method)
}

/// Same as [`non_null_param_error`] for arguments that are present but blank
pub fn non_blank_param_error(param: &str, method: &str) -> String {
    format!(
        "[ERROR]: Parameter '{}' must not be blank when calling '@{}'.",
        param, method
    )
}

/// Message for a missing target instance. With `qualified` false the
/// target is written without its `@` prefix.
pub fn non_null_get(output_type: &str, target: &str, method: &str, qualified: bool) -> String {
    let at = if qualified { "@" } else { "" };
    format!(
        "[{}]: Target instance of '{}{}' must not be null when calling '@{}'.",
        output_type, at, target, method
    )
}

pub fn non_null_get_error(target: &str, method: &str) -> String {
    non_null_get("ERROR", target, method, true)
}

pub fn key_already_exists(output_type: &str, argument: &str, instance: &str, target: &str) -> String {
    format!(
        "[{}]: Target instance of '@{}' must not '{}' when adding to '@{}'.",
        output_type, instance, argument, target
    )
}

pub fn key_already_exists_exception(argument: &str, instance: &str, target: &str) -> String {
    key_already_exists("KeyAlreadyExistsException", argument, instance, target)
}

pub fn illegal_argument_exception(argument: &str, instance: &str, method: &str) -> String {
    format!(
        "[IllegalArgumentException]: Target instance of '@{}' must not '{}' when calling '@{}'.",
        instance, argument, method
    )
}

pub fn assertion_error(argument: &str, instance: &str, method: &str) -> String {
    format!(
        "[AssertionError]: Target instance of '@{}' cannot be '{}'. Error caught at '@{}'.",
        instance, argument, method
    )
}
