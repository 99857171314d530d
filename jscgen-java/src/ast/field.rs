//! Java field builder.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::Modifiers;

/// A field declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub annotations: Vec<String>,
    pub modifiers: Modifiers,
    /// Declared type; `None` renders no type token.
    pub ty: Option<String>,
    pub name: String,
    /// Initializer expression placed after ` = `.
    pub initializer: Option<String>,
}

impl Field {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self::untyped(name).ty(ty)
    }

    /// Create a field whose type is filled in later, if at all.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            annotations: Vec::new(),
            modifiers: Modifiers::empty(),
            ty: None,
            name: name.into(),
            initializer: None,
        }
    }

    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn identifier(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add modifiers to the set.
    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }

    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn annotations(
        mut self,
        annotations: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.annotations
            .extend(annotations.into_iter().map(Into::into));
        self
    }

    /// Initialize the field with the string form of `expression`.
    pub fn init_value(mut self, expression: impl Display) -> Self {
        self.initializer = Some(expression.to_string());
        self
    }

    /// Initialize the field with `null`.
    pub fn init_null(self) -> Self {
        self.init_value("null")
    }
}
