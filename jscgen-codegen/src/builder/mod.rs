//! Code generation building blocks.
//!
//! - [`Emitter`] - Stateful text accumulator with indentation and list joining
//! - [`Indent`] - Indentation configuration

mod emitter;
mod indent;

pub use emitter::Emitter;
pub use indent::Indent;
