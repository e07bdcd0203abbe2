//! Borrowed read-only view over a universe's cell buffer.

use life_core::Cell;

/// A read-only window into the live cell buffer of a [`Universe`](crate::Universe).
///
/// The view borrows the universe, so it cannot be held across `step`,
/// `toggle_cell`, `stamp`, `randomize` or `clear`. Take a fresh view after
/// every mutation.
#[derive(Debug, Clone, Copy)]
pub struct CellView<'a> {
    width: u32,
    height: u32,
    cells: &'a [Cell],
}

impl<'a> CellView<'a> {
    pub(crate) fn new(width: u32, height: u32, cells: &'a [Cell]) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells, always `width * height`
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn as_slice(&self) -> &'a [Cell] {
        self.cells
    }

    /// Raw cell codes (`0` dead, `1` alive), row-major, without copying
    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.cells)
    }

    /// Flat buffer offset of `(row, col)`
    pub fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    pub fn get(&self, row: u32, col: u32) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[self.index(row, col)])
    }

    /// Iterator over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &'a [Cell]> + 'a {
        self.cells.chunks_exact(self.width as usize)
    }

    pub fn iter(&self) -> std::slice::Iter<'a, Cell> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for CellView<'a> {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
