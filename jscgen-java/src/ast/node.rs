//! The node sum type tying all declaration kinds together.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Argument, Class, Constructor, Field, Method, Statement};
use crate::{Result, renderer};

/// Tag identifying which kind of element a [`Node`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Class,
    Interface,
    Enum,
    Field,
    Method,
    Constructor,
    Argument,
    Statement,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Field => "field",
            Self::Method => "method",
            Self::Constructor => "constructor",
            Self::Argument => "argument",
            Self::Statement => "statement",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of a document tree.
///
/// The variant is fixed when the node is created. Class children are nodes
/// of any kind; the model does not check that a child makes sense where it
/// is attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Class(Class),
    /// Interface declaration. Shares the class shape; has no rendering rule yet.
    Interface(Class),
    /// Enum declaration. Shares the class shape; has no rendering rule yet.
    Enum(Class),
    Field(Field),
    Method(Method),
    Constructor(Constructor),
    Argument(Argument),
    Statement(Statement),
}

impl Node {
    /// Create an interface declaration node.
    pub fn interface(name: impl Into<String>) -> Self {
        Self::Interface(Class::new(name))
    }

    /// Create an enum declaration node.
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::Enum(Class::new(name))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Class(_) => NodeKind::Class,
            Self::Interface(_) => NodeKind::Interface,
            Self::Enum(_) => NodeKind::Enum,
            Self::Field(_) => NodeKind::Field,
            Self::Method(_) => NodeKind::Method,
            Self::Constructor(_) => NodeKind::Constructor,
            Self::Argument(_) => NodeKind::Argument,
            Self::Statement(_) => NodeKind::Statement,
        }
    }

    /// Render this node to Java source with the default indentation.
    pub fn render(&self) -> Result<String> {
        renderer::render(self)
    }
}

impl From<Class> for Node {
    fn from(class: Class) -> Self {
        Self::Class(class)
    }
}

impl From<Field> for Node {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<Method> for Node {
    fn from(method: Method) -> Self {
        Self::Method(method)
    }
}

impl From<Constructor> for Node {
    fn from(ctor: Constructor) -> Self {
        Self::Constructor(ctor)
    }
}

impl From<Argument> for Node {
    fn from(arg: Argument) -> Self {
        Self::Argument(arg)
    }
}

impl From<Statement> for Node {
    fn from(stmt: Statement) -> Self {
        Self::Statement(stmt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_variant() {
        assert_eq!(Node::from(Class::new("A")).kind(), NodeKind::Class);
        assert_eq!(Node::interface("I").kind(), NodeKind::Interface);
        assert_eq!(Node::enumeration("E").kind(), NodeKind::Enum);
        assert_eq!(Node::from(Field::new("int", "x")).kind(), NodeKind::Field);
        assert_eq!(Node::from(Method::new("void", "f")).kind(), NodeKind::Method);
        assert_eq!(
            Node::from(Constructor::new("A")).kind(),
            NodeKind::Constructor
        );
        assert_eq!(
            Node::from(Argument::new("int", "a")).kind(),
            NodeKind::Argument
        );
        assert_eq!(
            Node::from(Statement::raw("x++")).kind(),
            NodeKind::Statement
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NodeKind::Constructor.to_string(), "constructor");
        assert_eq!(NodeKind::Enum.to_string(), "enum");
    }
}
