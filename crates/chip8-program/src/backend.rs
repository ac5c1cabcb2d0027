//! The contract a compilation frontend implements.

use crate::program::CompiledProgram;

/// A compilation frontend: turns source text into a [`CompiledProgram`].
///
/// The session layer hands over `source` by value; the backend consumes
/// it and the caller never touches that copy again. Returning `None`
/// means the backend produced no result at all (an internal failure,
/// distinct from a source error — those come back inside the program
/// with its error field set).
pub trait Backend {
    fn compile(&mut self, source: String, start_address: u16) -> Option<CompiledProgram>;
}

/// Closures work as backends, which keeps test doubles short.
impl<F> Backend for F
where
    F: FnMut(String, u16) -> Option<CompiledProgram>,
{
    fn compile(&mut self, source: String, start_address: u16) -> Option<CompiledProgram> {
        self(source, start_address)
    }
}
