#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;
use std::str::FromStr;

/// Retrieve the value of an arg passed to the app as `--name=value`.
///
/// /!\ As this reads the process args, a function using it is tricky to test.
/// Wrap such a test with `with_env_args(args, fn)`, only available in a test context.
pub fn retrieve_arg_value(arg_name: &str) -> Option<String> {
    let arg_prefix = format!("{arg_name}=");
    get_env_args()
        .into_iter()
        .find_map(|arg| arg.strip_prefix(&arg_prefix).map(str::to_owned))
}

/// Retrieve an arg value and parse it.
/// A missing, empty or unparsable value falls back to `default_value`.
pub fn retrieve_parsed_arg_value<T: FromStr>(arg_name: &str, default_value: T) -> T {
    match retrieve_arg_value(arg_name) {
        Some(value) => value.parse().unwrap_or_else(|_| {
            warn!("Ignoring malformed arg, using default [arg: {arg_name}, value: {value}]");
            default_value
        }),
        None => default_value,
    }
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// Args seen by the app while a test wrapped with `with_env_args` runs.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}

#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|args| args.borrow().clone())
}

/// Run `function` as if the app had been started with `args`.
/// Previous args are restored afterward.
#[cfg(test)]
pub fn with_env_args<F, T>(args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    let old_args = ENV_ARGS.with(|refcell| refcell.replace(args));
    let result = function();
    ENV_ARGS.with(|refcell| refcell.replace(old_args));
    result
}
