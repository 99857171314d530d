//! Java document model.
//!
//! Each declaration kind has its own builder type; [`Node`] wraps them so a
//! class can hold members of any kind.

mod argument;
mod class;
mod constructor;
mod field;
mod method;
mod modifiers;
mod node;
mod statement;

pub use argument::Argument;
pub use class::Class;
pub use constructor::Constructor;
pub use field::Field;
pub use method::Method;
pub use modifiers::Modifiers;
pub use node::{Node, NodeKind};
pub use statement::Statement;
