//! Greeting fixture exercised by the coverage demo test run.

/// Build the greeting for `name`
#[must_use]
pub fn hello(name: &str) -> String {
    format!("Hello world, it's {name}")
}
