//! Java method builder.

use serde::{Deserialize, Serialize};

use super::{Argument, Modifiers, Statement};

/// A method declaration with a statement body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub annotations: Vec<String>,
    pub modifiers: Modifiers,
    /// Return type; `None` renders a constructor-like declaration.
    pub return_type: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    /// Exception types listed after `throws`.
    pub exceptions: Vec<String>,
    pub body: Vec<Statement>,
}

impl Method {
    pub fn new(return_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::untyped(name).returns(return_type)
    }

    /// Create a method without a return type token.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            annotations: Vec::new(),
            modifiers: Modifiers::empty(),
            return_type: None,
            name: name.into(),
            arguments: Vec::new(),
            exceptions: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Set the return type, replacing any earlier one.
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
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

    pub fn argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn arguments(mut self, arguments: impl IntoIterator<Item = Argument>) -> Self {
        self.arguments.extend(arguments);
        self
    }

    /// Append an argument built from its type and name.
    pub fn param(self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.argument(Argument::new(ty, name))
    }

    pub fn exception(mut self, name: impl Into<String>) -> Self {
        self.exceptions.push(name.into());
        self
    }

    pub fn exceptions(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.exceptions.extend(names.into_iter().map(Into::into));
        self
    }

    /// Append a simple statement, written without its closing `;`.
    pub fn command(self, text: impl Into<String>) -> Self {
        self.statement(Statement::raw(text))
    }

    /// Append a statement that supplies its own braces.
    pub fn block_command(self, text: impl Into<String>) -> Self {
        self.statement(Statement::block(text))
    }

    pub fn statement(mut self, statement: Statement) -> Self {
        self.body.push(statement);
        self
    }

    pub fn statements(mut self, statements: impl IntoIterator<Item = Statement>) -> Self {
        self.body.extend(statements);
        self
    }
}
