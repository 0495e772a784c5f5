//! The tape memory model.
//!
//! A [`Tape`] is a zero-initialized byte array with a movable cursor. The
//! array grows on demand in fixed 200-cell chunks at either end, so the
//! tape is unbounded in both directions. Cell arithmetic wraps modulo 256.

/// Number of cells the tape grows by at a time, and half of it the
/// starting cursor offset, giving symmetric headroom in both directions.
const CHUNK: usize = 200;

/// A bidirectionally growable byte tape with a cursor.
///
/// Every operation may assume the cursor addresses a valid cell: growth
/// happens inside [`Tape::move_by`] before the cursor is rebound. Growing
/// at the low end relocates the existing cells upward and rebases the
/// cursor by the same width, so logical cell identities are preserved.
#[derive(Debug)]
pub struct Tape {
    cells: Vec<u8>,
    position: usize,
}

impl Tape {
    /// A fresh tape of one zeroed chunk with the cursor at its center.
    pub fn new() -> Self {
        Self {
            cells: vec![0; CHUNK],
            position: CHUNK / 2,
        }
    }

    /// The value of the current cell.
    pub fn get(&self) -> u8 {
        self.cells[self.position]
    }

    /// Replace the value of the current cell.
    pub fn set(&mut self, value: u8) {
        self.cells[self.position] = value;
    }

    /// Add a signed count to the current cell, wrapping modulo 256 in
    /// either direction (0 incremented by -1 becomes 255).
    pub fn increment(&mut self, count: i64) {
        let cell = &mut self.cells[self.position];
        *cell = (i64::from(*cell) + count).rem_euclid(256) as u8;
    }

    /// Shift the cursor by a signed offset, growing the tape first when
    /// the target falls outside the backing array.
    pub fn move_by(&mut self, delta: i64) {
        let target = self.position as i64 + delta;
        if target < 0 {
            // Prepend whole chunks, shifting existing content upward and
            // rebasing the cursor so prior cells keep their identity.
            let shift = chunks_for(-target as usize);
            let mut grown = vec![0; self.cells.len() + shift];
            grown[shift..].copy_from_slice(&self.cells);
            self.cells = grown;
            self.position = (target + shift as i64) as usize;
        } else {
            let target = target as usize;
            if target >= self.cells.len() {
                let shortfall = target - self.cells.len() + 1;
                self.cells.resize(self.cells.len() + chunks_for(shortfall), 0);
            }
            self.position = target;
        }
    }

    /// The cursor's index into the backing array.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current size of the backing array in cells.
    pub fn size(&self) -> usize {
        self.cells.len()
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

/// Round `shortfall` cells up to a whole number of chunks.
fn chunks_for(shortfall: usize) -> usize {
    shortfall.div_ceil(CHUNK) * CHUNK
}
