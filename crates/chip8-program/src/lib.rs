//! Shared types for CHIP-8 compilation.
//!
//! This crate defines the boundary between a compilation frontend (a
//! lexer/parser/code generator for an Octo-style assembly language) and
//! the session layer that owns its results:
//!
//! - [`CompiledProgram`] — the result handle a backend produces: the ROM
//!   image, dense per-address debug tables (source line, breakpoint
//!   name), and an optional [`CompileError`].
//! - [`Backend`] — the contract a compilation frontend implements.
//! - [`RAM_MAX`] — the size of the target VM's address space.
//!
//! Nothing in this crate parses or generates code; it only carries
//! results across the boundary.

pub mod backend;
pub mod error;
pub mod program;

pub use backend::Backend;
pub use error::CompileError;
pub use program::{CompiledProgram, RAM_MAX};
