//! The compilation session: one backend, one live result.

use chip8_program::{Backend, CompiledProgram};

use crate::coverage::{AddressRange, LineCoverage};
use crate::hash;

/// A compilation session over an external [`Backend`].
///
/// Owns at most one [`CompiledProgram`] at a time; each call to
/// [`Session::compile`] drops the previous result before acquiring the
/// replacement. Compile failures are recorded as state and inspected
/// through the error accessors — nothing here panics on bad source,
/// since a session is typically recompiled on every editor keystroke.
///
/// Callers are expected to check [`Session::is_error`] before trusting
/// any derived state (code, coverage, hash). The accessors are total
/// regardless: with no valid program they answer with empty slices and
/// `None` rather than stale data.
pub struct Session<B: Backend> {
    backend: B,
    program: Option<CompiledProgram>,
    /// Composed human-readable message; empty before the first compile.
    error_message: String,
    /// Artifact identity; stale after a failed compile.
    sha1_hex: String,
    coverage: LineCoverage,
}

impl<B: Backend> Session<B> {
    /// Create an empty session. No program exists until the first
    /// [`Session::compile`] call.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            program: None,
            error_message: String::new(),
            sha1_hex: String::new(),
            coverage: LineCoverage::default(),
        }
    }

    /// Compile `source` at `start_address`, replacing any previous
    /// result. Returns `true` iff compilation succeeded.
    ///
    /// On success the content hash is recomputed before this returns.
    /// The coverage map is cleared either way; callers wanting line
    /// queries rebuild it with [`Session::update_line_coverage`].
    pub fn compile(&mut self, source: &str, start_address: u16) -> bool {
        // Free the previous result before acquiring a replacement, and
        // drop the coverage map built against it.
        self.program = None;
        self.coverage = LineCoverage::default();

        // The backend consumes its own copy of the source.
        self.program = self.backend.compile(source.to_owned(), start_address);

        match &self.program {
            None => {
                self.error_message = "ERROR: unknown error, no binary generated".to_owned();
                false
            }
            Some(program) => {
                if let Some(error) = program.error() {
                    // Backend positions are 0-based; display 1-based.
                    self.error_message = format!(
                        "ERROR ({}:{}): {}",
                        error.line + 1,
                        error.col + 1,
                        error.text
                    );
                    false
                } else {
                    self.sha1_hex = hash::content_hash(program);
                    self.error_message = "No errors.".to_owned();
                    true
                }
            }
        }
    }

    /// True if no program exists or the current one failed to compile.
    pub fn is_error(&self) -> bool {
        self.program.as_ref().map_or(true, |p| p.is_error())
    }

    /// The composed message: `"ERROR (<line>:<col>): <text>"` on
    /// failure, `"No errors."` on success, empty before any compile.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// The bare backend-reported text, without the position prefix.
    /// Empty on success, `"unknown error"` if no program exists.
    pub fn raw_error_message(&self) -> &str {
        match &self.program {
            None => "unknown error",
            Some(program) => program.error().map_or("", |e| e.text.as_str()),
        }
    }

    /// 1-based line of the first reported error, 0 when there is none.
    pub fn error_line(&self) -> u32 {
        self.current_error().map_or(0, |e| e.line + 1)
    }

    /// 1-based column of the first reported error, 0 when there is none.
    pub fn error_col(&self) -> u32 {
        self.current_error().map_or(0, |e| e.col + 1)
    }

    /// The emitted code bytes. Empty whenever no valid, non-errored
    /// program exists — including before the first compile.
    pub fn code(&self) -> &[u8] {
        match &self.program {
            Some(program) if !program.is_error() => program.code(),
            _ => &[],
        }
    }

    /// Number of emitted code bytes (total length minus start offset),
    /// 0 whenever [`Session::code`] is empty.
    pub fn code_size(&self) -> u16 {
        self.code().len() as u16
    }

    /// Hex identity of the last successfully compiled artifact. Empty
    /// before the first success; not refreshed by a failed compile, so
    /// check [`Session::is_error`] before trusting it.
    pub fn sha1_hex(&self) -> &str {
        &self.sha1_hex
    }

    /// Rebuild the line coverage map from the current program.
    ///
    /// Deliberately a separate step from [`Session::compile`]: most
    /// compiles (syntax checking on keystrokes) never need coverage,
    /// and the rebuild scans the whole address space.
    pub fn update_line_coverage(&mut self) {
        self.coverage = match &self.program {
            Some(program) => LineCoverage::build(program),
            None => LineCoverage::default(),
        };
    }

    /// Address range emitted by a 0-based source line. `None` if the
    /// line is out of range, emitted no code, the session is in an
    /// error state, or the map has not been rebuilt since the last
    /// compile.
    pub fn addr_for_line(&self, line: u32) -> Option<AddressRange> {
        if self.is_error() {
            return None;
        }
        self.coverage.range_for_line(line)
    }

    /// 0-based source line that emitted the byte at `addr`. `None` out
    /// of range, for unmapped addresses, or in an error state.
    pub fn line_for_addr(&self, addr: u32) -> Option<u32> {
        if self.is_error() {
            return None;
        }
        self.program.as_ref()?.line_for_addr(addr)
    }

    /// Breakpoint name registered at `addr`, if any.
    pub fn breakpoint_for_addr(&self, addr: u32) -> Option<&str> {
        self.program.as_ref()?.breakpoint(addr)
    }

    fn current_error(&self) -> Option<&chip8_program::CompileError> {
        self.program.as_ref()?.error()
    }
}
