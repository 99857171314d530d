//! Raw body statements.

use serde::{Deserialize, Serialize};

/// A raw statement in a method or constructor body.
///
/// The text is emitted verbatim. A simple statement gets a `;` appended; a
/// block statement carries its own braces and gets nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub text: String,
    pub block: bool,
}

impl Statement {
    /// A simple statement, written without its closing `;`.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            block: false,
        }
    }

    /// A brace-delimited statement such as an `if` or `try` block.
    pub fn block(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            block: true,
        }
    }

    pub fn is_block(&self) -> bool {
        self.block
    }
}
