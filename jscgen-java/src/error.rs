use miette::Diagnostic;
use thiserror::Error;

use crate::ast::NodeKind;

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum Error {
    #[error("a {kind} node can not be rendered on its own")]
    #[diagnostic(
        code(jscgen::unsupported_kind),
        help(
            "only classes, fields, methods, constructors and arguments have a rendering rule; \
             statements belong in a method or constructor body"
        )
    )]
    UnsupportedKind { kind: NodeKind },
}
