use std::fmt::Debug;

pub mod env_args;
pub mod web;

pub fn log_error<E: Debug>(error: E) {
    error!("{error:#?}");
}

/// Log the error, then replace it with `value_to_return`.
/// Meant to be used with `map_err`.
pub fn log_error_and_return<E: Debug, T>(value_to_return: T) -> impl FnOnce(E) -> T {
    |error| {
        log_error(error);
        value_to_return
    }
}

pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |error| {
        error!("{message}\n{error:#?}");
        value_to_return
    }
}
