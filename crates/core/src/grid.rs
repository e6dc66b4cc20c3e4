//! Square cell matrix holding one symbolic marker per cell.

use crate::types::{CellKind, Pos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self { size, cells: vec![CellKind::Empty; size * size] }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.size && (pos.y as usize) < self.size
    }

    /// Out-of-bounds reads behave like a wall.
    pub fn at(&self, pos: Pos) -> CellKind {
        if !self.in_bounds(pos) {
            return CellKind::Wall;
        }
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Pos, cell: CellKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    pub fn is_empty(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.at(pos) == CellKind::Empty
    }

    pub fn count(&self, cell: CellKind) -> usize {
        self.cells.iter().filter(|&&candidate| candidate == cell).count()
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.size).flat_map(move |y| {
            (0..self.size).map(move |x| Pos { y: y as i32, x: x as i32 })
        })
    }

    pub fn positions_of(&self, cell: CellKind) -> Vec<Pos> {
        self.positions().filter(|&pos| self.at(pos) == cell).collect()
    }

    /// Row-major symbols for display.
    pub fn rows(&self) -> Vec<Vec<char>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    pub(crate) fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.size + (pos.x as usize)
    }
}
