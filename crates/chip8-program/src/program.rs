//! The compiled-program handle a backend hands to the session layer.
//!
//! Debug metadata is carried as dense tables indexed by VM address, one
//! entry per possible address. The tables are an internal substrate:
//! the session layer aggregates them into compact per-line views, so
//! callers never iterate them directly.

use crate::error::CompileError;

/// Size of the target VM's address space.
pub const RAM_MAX: usize = 65536;

/// Dense-table entry for "no source line emitted this byte".
const NO_LINE: u32 = u32::MAX;

/// The result of one compilation, owned by whoever holds it.
///
/// A backend builds one per compile call via [`CompiledProgram::new`] /
/// [`CompiledProgram::emit`] / [`CompiledProgram::set_breakpoint`], or
/// [`CompiledProgram::failed`] when the source does not compile.
/// Dropping the handle releases everything; there is no separate
/// release call.
#[derive(Debug, Clone)]
pub struct CompiledProgram {
    /// Full RAM image; emitted code occupies `start_address..length`.
    rom: Vec<u8>,
    start_address: u16,
    /// Total emitted length, including the start offset.
    length: usize,
    source_line_count: usize,
    error: Option<CompileError>,
    /// Source line that emitted each byte, `NO_LINE` where none did.
    line_map: Vec<u32>,
    /// Breakpoint name registered at each address, if any.
    breakpoints: Vec<Option<String>>,
}

impl CompiledProgram {
    /// Create an empty program about to receive emitted code.
    pub fn new(start_address: u16, source_line_count: usize) -> Self {
        Self {
            rom: vec![0; RAM_MAX],
            start_address,
            length: start_address as usize,
            source_line_count,
            error: None,
            line_map: vec![NO_LINE; RAM_MAX],
            breakpoints: vec![None; RAM_MAX],
        }
    }

    /// Create a program carrying a compilation error and no code.
    pub fn failed(error: CompileError) -> Self {
        let mut program = Self::new(0, 0);
        program.error = Some(error);
        program
    }

    /// Append one byte of code, recording the 0-based source line that
    /// produced it. Returns `false` once the address space is full.
    pub fn emit(&mut self, byte: u8, line: u32) -> bool {
        if self.length >= RAM_MAX {
            return false;
        }
        self.rom[self.length] = byte;
        self.line_map[self.length] = line;
        self.length += 1;
        true
    }

    /// Register a named breakpoint at an address.
    pub fn set_breakpoint(&mut self, addr: u16, name: impl Into<String>) {
        self.breakpoints[addr as usize] = Some(name.into());
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&CompileError> {
        self.error.as_ref()
    }

    pub fn start_address(&self) -> u16 {
        self.start_address
    }

    /// Total emitted length, including the start offset.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn source_line_count(&self) -> usize {
        self.source_line_count
    }

    /// The emitted code bytes, `rom[start_address..length]`.
    ///
    /// Empty when nothing was emitted (or the handle is inconsistent).
    pub fn code(&self) -> &[u8] {
        self.rom
            .get(self.start_address as usize..self.length)
            .unwrap_or(&[])
    }

    /// 0-based source line that emitted the byte at `addr`.
    pub fn line_for_addr(&self, addr: u32) -> Option<u32> {
        match self.line_map.get(addr as usize) {
            Some(&line) if line != NO_LINE => Some(line),
            _ => None,
        }
    }

    /// Breakpoint name registered at `addr`, if any.
    pub fn breakpoint(&self, addr: u32) -> Option<&str> {
        self.breakpoints.get(addr as usize)?.as_deref()
    }

    /// All registered breakpoints in ascending address order.
    pub fn breakpoints(&self) -> impl Iterator<Item = (u32, &str)> {
        self.breakpoints
            .iter()
            .enumerate()
            .filter_map(|(addr, name)| name.as_deref().map(|n| (addr as u32, n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_tracks_length_and_line_map() {
        let mut program = CompiledProgram::new(0x200, 3);
        assert!(program.emit(0x60, 0));
        assert!(program.emit(0x01, 0));
        assert!(program.emit(0x00, 2));

        assert_eq!(program.length(), 0x203);
        assert_eq!(program.code(), &[0x60, 0x01, 0x00]);
        assert_eq!(program.line_for_addr(0x200), Some(0));
        assert_eq!(program.line_for_addr(0x202), Some(2));
        assert_eq!(program.line_for_addr(0x203), None);
        assert_eq!(program.line_for_addr(0x1FF), None);
    }

    #[test]
    fn emit_stops_at_end_of_address_space() {
        let mut program = CompiledProgram::new((RAM_MAX - 1) as u16, 1);
        assert!(program.emit(0xAA, 0));
        assert!(!program.emit(0xBB, 0));
        assert_eq!(program.code(), &[0xAA]);
    }

    #[test]
    fn breakpoints_iterate_in_ascending_address_order() {
        let mut program = CompiledProgram::new(0x200, 1);
        // Registration order deliberately descending.
        program.set_breakpoint(0x210, "loop");
        program.set_breakpoint(0x200, "start");

        let named: Vec<_> = program.breakpoints().collect();
        assert_eq!(named, vec![(0x200, "start"), (0x210, "loop")]);
        assert_eq!(program.breakpoint(0x210), Some("loop"));
        assert_eq!(program.breakpoint(0x211), None);
        assert_eq!(program.breakpoint(0xFFFF_FFFF), None);
    }

    #[test]
    fn failed_program_has_no_code() {
        let program = CompiledProgram::failed(CompileError::new("bad token", 2, 5));
        assert!(program.is_error());
        assert_eq!(program.code(), &[] as &[u8]);
        assert_eq!(program.error().unwrap().line, 2);
    }
}
