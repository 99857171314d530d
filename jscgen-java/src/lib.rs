//! Java source builder.
//!
//! Build a class as a tree of typed nodes with fluent builders, then render
//! it to Java source text.
//!
//! ```
//! use jscgen_java::{Argument, Class, Method, Modifiers};
//!
//! let class = Class::new("Greeter")
//!     .package("com.example")
//!     .modifiers(Modifiers::PUBLIC)
//!     .child(
//!         Method::new("void", "greet")
//!             .modifiers(Modifiers::PUBLIC)
//!             .argument(Argument::new("String", "name"))
//!             .command("System.out.println(\"Hello \" + name)"),
//!     );
//!
//! let source = class.render().unwrap();
//! assert!(source.contains("public class Greeter {"));
//! assert!(source.contains("public void greet(String name) {"));
//! ```

mod error;
mod renderer;

pub mod ast;

pub use ast::{
    Argument, Class, Constructor, Field, Method, Modifiers, Node, NodeKind, Statement,
};
pub use error::{Error, Result};
pub use jscgen_codegen::builder::Indent;
pub use renderer::{Printer, render};
