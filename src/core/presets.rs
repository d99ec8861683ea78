//! Built-in example messages.
//!
//! Loaded from `config/example-messages.json` (embedded at compile time, validated by build.rs).

use std::sync::OnceLock;

use serde::Deserialize;

/// An example message that replaces the whole input when loaded.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ExampleMessage {
    pub label: String,
    pub text: String,
}

fn load_examples() -> Vec<ExampleMessage> {
    let json = include_str!("../../config/example-messages.json");
    serde_json::from_str(json).expect("example-messages.json must be valid")
}

static EXAMPLES: OnceLock<Vec<ExampleMessage>> = OnceLock::new();

/// Returns all example messages, loading from config on first access.
pub fn examples() -> &'static [ExampleMessage] {
    EXAMPLES.get_or_init(load_examples)
}

/// Example at a zero-based index.
pub fn example(index: usize) -> Option<&'static ExampleMessage> {
    examples().get(index)
}
