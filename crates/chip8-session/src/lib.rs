//! CHIP-8 compilation session: owns compile results, maps source lines
//! to address ranges, and hashes the compiled artifact.
//!
//! ```text
//! source + start address → Backend → CompiledProgram
//!                                        │
//!                         ┌──────────────┼──────────────┐
//!                    error surface   LineCoverage   content hash
//! ```
//!
//! The [`Session`] invokes an external [`chip8_program::Backend`] and
//! owns exactly one [`chip8_program::CompiledProgram`] at a time,
//! replacing it wholesale on each compile. On success it recomputes the
//! artifact's SHA-1 identity; the line coverage map is rebuilt on
//! request via [`Session::update_line_coverage`].
//!
//! Single-threaded by design: nothing here locks, and a `Session` is
//! meant to be driven from one place (an editor or REPL loop) where
//! compile errors are state to inspect, not exceptions to catch.

pub mod coverage;
pub mod hash;
pub mod session;

pub use coverage::{AddressRange, LineCoverage};
pub use session::Session;
