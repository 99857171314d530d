//! Java constructor builder.

use serde::{Deserialize, Serialize};

use super::{Argument, Class, Modifiers, Statement};

/// A constructor declaration. Shaped like a [`super::Method`] without a
/// return type; the name is the owning class name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constructor {
    pub annotations: Vec<String>,
    pub modifiers: Modifiers,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub exceptions: Vec<String>,
    pub body: Vec<Statement>,
}

impl Constructor {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            annotations: Vec::new(),
            modifiers: Modifiers::empty(),
            name: class_name.into(),
            arguments: Vec::new(),
            exceptions: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Create a constructor for `class`, taking its current name.
    pub fn for_class(class: &Class) -> Self {
        Self::new(class.name.clone())
    }

    /// Add modifiers to the set.
    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }

    pub fn identifier(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
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

    pub fn command(self, text: impl Into<String>) -> Self {
        self.statement(Statement::raw(text))
    }

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
