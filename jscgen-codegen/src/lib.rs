//! Shared code generation utilities for the jscgen source builders.
//!
//! This crate knows nothing about any document model. It provides the
//! low-level text accumulator used by language printers.
//!
//! # Module Organization
//!
//! - [`builder`] - Text emission primitives (Emitter, Indent)
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
