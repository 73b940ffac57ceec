//! C# path constant generation for pathconst.
//!
//! Turns a list of file paths into a static class with one string constant
//! per path, and writes it only when the result differs from what is
//! already on disk.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented code building blocks
//! - [`naming`] - C# member naming and string literal escaping
//! - [`emit`] - Rendering of the generated unit
//! - [`generator`] - Validation, deduplication and the write policy

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
pub mod emit;
mod error;
pub mod generator;
pub mod naming;
mod target;

pub use emit::{Member, emit};
pub use error::{Error, ErrorKind, Result};
pub use generator::{CheckStatus, GenerateReport, Generator, GeneratorConfig, Preview};
pub use pathconst_core::{Overwrite, WriteResult};
pub use target::{DEFAULT_NAMESPACE, TargetName};
