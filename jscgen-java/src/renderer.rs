//! Java printer: walks a document tree and emits source text.

use std::fmt;

use jscgen_codegen::builder::{Emitter, Indent};

use crate::{
    Error, Result,
    ast::{Argument, Class, Constructor, Field, Method, Modifiers, Node, NodeKind, Statement},
};

/// Renders document trees with a configurable indentation unit.
///
/// Every call to [`Printer::print`] uses a fresh [`Emitter`], so one printer
/// can serve several threads at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Printer {
    indent: Indent,
}

impl Printer {
    pub fn new(indent: Indent) -> Self {
        Self { indent }
    }

    /// Render `node` to Java source.
    ///
    /// Fails with [`Error::UnsupportedKind`] when `node`, or any class member
    /// below it, is a kind without a rendering rule. No partial output is
    /// returned in that case.
    #[tracing::instrument(level = "debug", skip_all, fields(kind = %node.kind()))]
    pub fn print(&self, node: &Node) -> Result<String> {
        let mut e = Emitter::new(self.indent);
        emit_node(&mut e, node)?;
        Ok(e.build())
    }
}

/// Render `node` to Java source with the default 2-space indentation.
pub fn render(node: &Node) -> Result<String> {
    Printer::default().print(node)
}

impl Class {
    /// Render this class to Java source with the default indentation.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(kind = %NodeKind::Class, class = %self.name)
    )]
    pub fn render(&self) -> Result<String> {
        let mut e = Emitter::java();
        emit_class(&mut e, self)?;
        Ok(e.build())
    }
}

fn emit_node(e: &mut Emitter, node: &Node) -> Result<()> {
    match node {
        Node::Class(class) => emit_class(e, class)?,
        Node::Field(field) => emit_field(e, field),
        Node::Method(method) => emit_method(e, method),
        Node::Constructor(ctor) => emit_constructor(e, ctor),
        Node::Argument(arg) => emit_argument(e, arg),
        Node::Interface(_) | Node::Enum(_) | Node::Statement(_) => {
            let kind = node.kind();
            tracing::debug!(%kind, "no rendering rule for node kind");
            return Err(Error::UnsupportedKind { kind });
        }
    }
    Ok(())
}

fn emit_class(e: &mut Emitter, class: &Class) -> Result<()> {
    if let Some(package) = &class.package {
        e.append("package ").append(package).terminate().blank_line();
    }
    for import in &class.imports {
        e.append("import ").append(import).terminate();
    }
    if !class.imports.is_empty() {
        e.blank_line();
    }

    e.append_lines(&class.annotations);
    emit_modifiers(e, class.modifiers);
    e.append("class ")
        .append(&class.name)
        .append_wrapped(" extends ", class.parent.as_deref(), "")
        .append_list_wrapped(" implements ", &class.interfaces, "")
        .space()
        .begin_block();

    for child in &class.children {
        tracing::trace!(class = %class.name, kind = %child.kind(), "emitting member");
        emit_node(e, child)?;
    }

    e.end_block();
    Ok(())
}

fn emit_field(e: &mut Emitter, field: &Field) {
    e.append_lines(&field.annotations);
    emit_modifiers(e, field.modifiers);
    e.append_wrapped("", field.ty.as_deref(), " ")
        .append(&field.name)
        .append_wrapped(" = ", field.initializer.as_deref(), "")
        .terminate();
}

fn emit_method(e: &mut Emitter, method: &Method) {
    emit_signature(
        e,
        &method.annotations,
        method.modifiers,
        method.return_type.as_deref(),
        &method.name,
        &method.arguments,
        &method.exceptions,
    );
    emit_body(e, &method.body);
}

fn emit_constructor(e: &mut Emitter, ctor: &Constructor) {
    emit_signature(
        e,
        &ctor.annotations,
        ctor.modifiers,
        None,
        &ctor.name,
        &ctor.arguments,
        &ctor.exceptions,
    );
    emit_body(e, &ctor.body);
}

fn emit_signature(
    e: &mut Emitter,
    annotations: &[String],
    modifiers: Modifiers,
    return_type: Option<&str>,
    name: &str,
    arguments: &[Argument],
    exceptions: &[String],
) {
    e.append_lines(annotations);
    emit_modifiers(e, modifiers);
    e.append_wrapped("", return_type, " ")
        .append(name)
        .append("(")
        .append_list(arguments)
        .append(")")
        .append_list_wrapped(" throws ", exceptions, "");
}

fn emit_body(e: &mut Emitter, body: &[Statement]) {
    e.space().begin_block();
    for stmt in body {
        e.append(&stmt.text);
        if !stmt.block {
            e.terminate();
        } else if !stmt.text.ends_with('\n') {
            e.newline();
        }
    }
    e.end_block();
}

fn emit_argument(e: &mut Emitter, arg: &Argument) {
    e.append(&arg.ty).space().append(&arg.name);
}

fn emit_modifiers(e: &mut Emitter, modifiers: Modifiers) {
    if !modifiers.is_empty() {
        e.append(&modifiers.to_string()).space();
    }
}

/// Write the output of an infallible emit function into a formatter.
fn display_with(f: &mut fmt::Formatter<'_>, emit: impl FnOnce(&mut Emitter)) -> fmt::Result {
    let mut e = Emitter::java();
    emit(&mut e);
    f.write_str(e.as_str())
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_with(f, |e| emit_field(e, self))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_with(f, |e| emit_method(e, self))
    }
}

impl fmt::Display for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_with(f, |e| emit_constructor(e, self))
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_with(f, |e| emit_argument(e, self))
    }
}

#[cfg(test)]
mod tests {
    use jscgen_codegen::testing::normalize;
    use pretty_assertions::assert_eq;

    use super::*;

    fn rendered(node: impl Into<Node>) -> String {
        render(&node.into()).expect("render failed")
    }

    #[test]
    fn test_empty_class() {
        assert_eq!(rendered(Class::new("TestClass")), "class TestClass {\n}\n");
    }

    #[test]
    fn test_class_header_clauses() {
        let class = Class::new("A")
            .modifiers(Modifiers::PUBLIC | Modifiers::ABSTRACT)
            .parent("Base")
            .interfaces(["X", "Y"]);
        assert_eq!(
            rendered(class),
            "public abstract class A extends Base implements X, Y {\n}\n"
        );
    }

    #[test]
    fn test_package_and_imports() {
        let class = Class::new("A")
            .package("p")
            .imports(["java.util.List", "java.util.Map"]);
        assert_eq!(
            rendered(class),
            "package p;\n\nimport java.util.List;\nimport java.util.Map;\n\nclass A {\n}\n"
        );
    }

    #[test]
    fn test_field() {
        assert_eq!(rendered(Field::new("int", "x")), "int x;\n");
        assert_eq!(
            rendered(
                Field::new("String", "s")
                    .modifiers(Modifiers::PRIVATE | Modifiers::FINAL)
                    .init_value("\"v\"")
            ),
            "private final String s = \"v\";\n"
        );
    }

    #[test]
    fn test_untyped_field_has_no_type_token() {
        assert_eq!(rendered(Field::untyped("x")), "x;\n");
    }

    #[test]
    fn test_field_annotations_own_line() {
        let field = Field::new("int", "x").annotations(["@Inject", "@Named(\"x\")"]);
        assert_eq!(rendered(field), "@Inject\n@Named(\"x\")\nint x;\n");
    }

    #[test]
    fn test_argument() {
        assert_eq!(rendered(Argument::new("Object", "arg")), "Object arg");
        assert_eq!(Argument::new("int", "n").to_string(), "int n");
    }

    #[test]
    fn test_method_body() {
        let method = Method::new("void", "run")
            .param("int", "a")
            .param("int", "b")
            .exceptions(["IOException", "SQLException"])
            .command("a++")
            .block_command("try{}finally{}");
        assert_eq!(
            rendered(method),
            "void run(int a, int b) throws IOException, SQLException {\n  a++;\n  try{}finally{}\n}\n"
        );
    }

    #[test]
    fn test_untyped_method_is_constructor_like() {
        assert_eq!(rendered(Method::untyped("Foo")), "Foo() {\n}\n");
    }

    #[test]
    fn test_constructor() {
        let ctor = Constructor::new("Foo")
            .modifiers(Modifiers::PUBLIC)
            .annotation("@Inject")
            .param("Bar", "bar")
            .command("this.bar = bar");
        assert_eq!(
            rendered(ctor),
            "@Inject\npublic Foo(Bar bar) {\n  this.bar = bar;\n}\n"
        );
    }

    #[test]
    fn test_members_nest_inside_class() {
        let class = Class::new("A")
            .field("int", "x")
            .child(Method::new("int", "get").command("return x"));
        assert_eq!(
            rendered(class),
            "class A {\n  int x;\n  int get() {\n    return x;\n  }\n}\n"
        );
    }

    #[test]
    fn test_custom_indent() {
        let class = Class::new("A").child(Method::new("void", "f").command("g()"));
        let out = Printer::new(Indent::Spaces(4))
            .print(&class.into())
            .expect("render failed");
        assert_eq!(out, "class A {\n    void f() {\n        g();\n    }\n}\n");
    }

    #[test]
    fn test_unsupported_kinds() {
        for node in [
            Node::from(Statement::raw("x++")),
            Node::from(Statement::block("{}")),
            Node::interface("I"),
            Node::enumeration("E"),
        ] {
            let kind = node.kind();
            assert_eq!(render(&node), Err(Error::UnsupportedKind { kind }));
        }
    }

    #[test]
    fn test_unsupported_member_aborts_class() {
        let class = Class::new("A")
            .field("int", "x")
            .child(Statement::raw("stray()"));
        assert_eq!(
            class.render(),
            Err(Error::UnsupportedKind {
                kind: NodeKind::Statement
            })
        );
    }

    #[test]
    fn test_display_matches_render() {
        let method = Method::new("Object", "name")
            .param("Object", "arg")
            .command("doThing()");
        assert_eq!(method.to_string(), rendered(method.clone()));
        assert_eq!(
            normalize(&method.to_string()),
            "Object name(Object arg){doThing();}"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let node = Node::from(
            Class::new("A")
                .package("p")
                .field("int", "x")
                .constructor(),
        );
        assert_eq!(render(&node), render(&node));
    }

    #[test]
    fn test_class_render_matches_printer() {
        let class = Class::new("A")
            .package("p")
            .modifiers(Modifiers::PUBLIC)
            .field("int", "x")
            .constructor();
        let node = Node::from(class.clone());
        assert_eq!(class.render(), Printer::default().print(&node));
        assert_eq!(class.render(), node.render());
    }
}
