//! Java class builder.

use serde::{Deserialize, Serialize};

use super::{Constructor, Field, Modifiers, Node};

/// A class declaration together with its compilation-unit header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    /// Package the class is declared in.
    pub package: Option<String>,
    /// Fully qualified names imported before the declaration.
    pub imports: Vec<String>,
    /// Raw annotation text, one per line above the declaration.
    pub annotations: Vec<String>,
    pub modifiers: Modifiers,
    /// Simple class name.
    pub name: String,
    /// Fully qualified name of the class this one extends.
    pub parent: Option<String>,
    /// Implemented interfaces, rendered in this order.
    pub interfaces: Vec<String>,
    /// Members in declaration order.
    pub children: Vec<Node>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            package: None,
            imports: Vec::new(),
            annotations: Vec::new(),
            modifiers: Modifiers::empty(),
            name: name.into(),
            parent: None,
            interfaces: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the package, replacing any earlier one.
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Add modifiers to the set.
    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }

    /// Rename the class.
    pub fn identifier(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the fully qualified parent class, replacing any earlier one.
    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set the parent class from its package and simple name.
    pub fn parent_in(self, package: &str, class: &str) -> Self {
        self.parent(format!("{}.{}", package, class))
    }

    /// Replace the implemented interfaces.
    ///
    /// Unlike the other list setters this does not accumulate: the previous
    /// list is discarded.
    pub fn interfaces(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.interfaces = names.into_iter().map(Into::into).collect();
        self
    }

    /// Append a single implemented interface.
    pub fn interface(mut self, name: impl Into<String>) -> Self {
        self.interfaces.push(name.into());
        self
    }

    /// Append a member of any kind.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append several members.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn import(mut self, name: impl Into<String>) -> Self {
        self.imports.push(name.into());
        self
    }

    pub fn imports(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.imports.extend(names.into_iter().map(Into::into));
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

    /// Append a field member.
    pub fn field(self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.child(Field::new(ty, name))
    }

    /// Append a no-argument constructor named after the class.
    pub fn constructor(self) -> Self {
        let ctor = Constructor::for_class(&self);
        self.child(ctor)
    }

    /// Check if this class has any members.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{NodeKind, Statement};

    #[test]
    fn test_class_builder() {
        let class = Class::new("TestClass")
            .package("com.example")
            .modifiers(Modifiers::PUBLIC)
            .modifiers(Modifiers::FINAL)
            .parent("java.lang.Object");

        assert_eq!(class.name, "TestClass");
        assert_eq!(class.package.as_deref(), Some("com.example"));
        assert_eq!(class.modifiers, Modifiers::PUBLIC | Modifiers::FINAL);
        assert_eq!(class.parent.as_deref(), Some("java.lang.Object"));
        assert!(!class.has_children());
    }

    #[test]
    fn test_parent_is_replaced() {
        let class = Class::new("A").parent("First").parent_in("com.example", "Second");
        assert_eq!(class.parent.as_deref(), Some("com.example.Second"));
    }

    #[test]
    fn test_interfaces_replace() {
        let class = Class::new("A").interfaces(["X", "Y"]).interfaces(["B", "C"]);
        assert_eq!(class.interfaces, vec!["B", "C"]);

        let class = class.interface("D");
        assert_eq!(class.interfaces, vec!["B", "C", "D"]);
    }

    #[test]
    fn test_imports_and_children_accumulate() {
        let class = Class::new("A")
            .imports(["java.util.List"])
            .imports(["java.util.List", "java.util.Map"])
            .field("int", "x")
            .field("int", "x");

        assert_eq!(
            class.imports,
            vec!["java.util.List", "java.util.List", "java.util.Map"]
        );
        assert_eq!(class.children.len(), 2);
    }

    #[test]
    fn test_constructor_takes_class_name() {
        let class = Class::new("Widget").constructor();
        match &class.children[0] {
            Node::Constructor(ctor) => assert_eq!(ctor.name, "Widget"),
            other => panic!("expected constructor, got {}", other.kind()),
        }
    }

    #[test]
    fn test_child_accepts_any_kind() {
        let class = Class::new("A")
            .child(Statement::raw("odd"))
            .child(Node::interface("Inner"));
        let kinds: Vec<_> = class.children.iter().map(Node::kind).collect();
        assert_eq!(kinds, vec![NodeKind::Statement, NodeKind::Interface]);
    }
}
