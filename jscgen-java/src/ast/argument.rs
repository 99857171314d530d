//! Method and constructor parameters.

use serde::{Deserialize, Serialize};

/// A formal parameter of a method or constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub ty: String,
    pub name: String,
}

impl Argument {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }

    pub fn identifier(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
