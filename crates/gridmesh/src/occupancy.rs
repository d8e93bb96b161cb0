//! Per-node boolean occupancy tracking.

/// A plain per-cell boolean map, independent of mesh geometry.
///
/// Follows the same silent-ignore policy as color painting: out-of-range
/// writes are no-ops and out-of-range reads return `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Creates an all-vacant grid of `width × height` cells.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; (width as usize) * (height as usize)],
        }
    }

    /// Returns the grid width in cells.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the grid height in cells.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize) * (self.width as usize) + (x as usize))
    }

    /// Marks cell `(x, y)` occupied or vacant. Out of range is a no-op.
    pub fn set_occupied(&mut self, x: u32, y: u32, occupied: bool) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = occupied;
        }
    }

    /// Returns whether cell `(x, y)` is occupied. Out of range is vacant.
    #[must_use]
    pub fn is_occupied(&self, x: u32, y: u32) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    /// Marks every cell with the same state.
    pub fn fill(&mut self, occupied: bool) {
        self.cells.fill(occupied);
    }

    /// Marks every cell vacant.
    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn num_occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
