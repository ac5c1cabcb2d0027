//! Content hashing — a stable SHA-1 identity for a compiled artifact.
//!
//! The digest covers the emitted code bytes plus the breakpoint debug
//! metadata, so two artifacts with identical code but different
//! breakpoints hash differently. Accumulation order is normative for
//! interoperability with other tools hashing the same scheme:
//!
//! 1. the code bytes, in one pass;
//! 2. for every address in ascending order that carries a breakpoint,
//!    the token `"<addr>:<name>"` with the address as four lowercase
//!    hex digits.
//!
//! Because breakpoints live in a dense address-indexed table, ascending
//! address order makes the digest independent of registration order.

use chip8_program::CompiledProgram;
use sha1::{Digest, Sha1};

/// Compute the hex identity digest of a compiled program.
pub fn content_hash(program: &CompiledProgram) -> String {
    let mut hasher = Sha1::new();
    hasher.update(program.code());
    for (addr, name) in program.breakpoints() {
        hasher.update(format!("{addr:04x}:{name}").as_bytes());
    }
    format!("{:x}", hasher.finalize())
}
