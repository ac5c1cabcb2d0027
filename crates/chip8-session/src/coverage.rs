//! Line coverage — source line → emitted address range.
//!
//! The backend records which source line emitted each byte in a dense
//! table with one entry per VM address. This module folds that table
//! into one `[first, last]` address range per source line, which is
//! what debugger frontends actually want (highlight the line owning an
//! address, set a breakpoint on a line's first byte).
//!
//! A range is a bounding box, not a contiguity proof: a line that owns
//! two disjoint code regions still gets a single range spanning both
//! extremes.

use chip8_program::{CompiledProgram, RAM_MAX};
use serde::{Deserialize, Serialize};

/// Inclusive address range occupied by one source line's code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRange {
    pub first: u32,
    pub last: u32,
}

impl AddressRange {
    pub fn contains(&self, addr: u32) -> bool {
        self.first <= addr && addr <= self.last
    }
}

/// Per-line address ranges for one compiled program.
///
/// Indexed by 0-based source line; `None` where a line emitted no code.
/// Valid only for the program it was built from — the session clears it
/// on every compile so it can never answer for a newer program.
#[derive(Debug, Clone, Default)]
pub struct LineCoverage {
    ranges: Vec<Option<AddressRange>>,
}

impl LineCoverage {
    /// Aggregate the program's dense address→line table.
    ///
    /// Scans every VM address in ascending order and widens the owning
    /// line's range to include it. Lines reported outside the source's
    /// line count are ignored.
    pub fn build(program: &CompiledProgram) -> Self {
        let mut ranges: Vec<Option<AddressRange>> = vec![None; program.source_line_count()];
        for addr in 0..RAM_MAX as u32 {
            let Some(line) = program.line_for_addr(addr) else {
                continue;
            };
            if let Some(slot) = ranges.get_mut(line as usize) {
                match slot {
                    Some(range) => {
                        range.first = range.first.min(addr);
                        range.last = range.last.max(addr);
                    }
                    None => *slot = Some(AddressRange { first: addr, last: addr }),
                }
            }
        }
        Self { ranges }
    }

    /// Address range for a 0-based source line, `None` if the line is
    /// out of range or emitted no code.
    pub fn range_for_line(&self, line: u32) -> Option<AddressRange> {
        self.ranges.get(line as usize).copied().flatten()
    }

    /// Number of source lines this map was built for.
    pub fn line_count(&self) -> usize {
        self.ranges.len()
    }
}
