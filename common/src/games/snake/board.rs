use super::listener::GameListener;
use super::types::{Cell, Position};

/// Square grid of cell classifications, indexed row by row.
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let size = self.size as i32;
        pos.x >= 0 && pos.y >= 0 && pos.x < size && pos.y < size
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.is_in_bounds(pos) {
            Some(pos.y as usize * self.size + pos.x as usize)
        } else {
            None
        }
    }

    /// Out-of-bounds positions read as `None`.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|index| self.cells[index])
    }

    pub fn can_place(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Empty)
    }

    /// Writes the cell and reports it to the listener. Out-of-bounds writes are ignored.
    pub fn set_cell(&mut self, pos: Position, cell: Cell, listener: &mut impl GameListener) {
        let Some(index) = self.index(pos) else {
            return;
        };
        self.cells[index] = cell;
        listener.on_cell_changed(pos, cell, cell.color());
    }

    pub fn clear(&mut self, listener: &mut impl GameListener) {
        for y in 0..self.size as i32 {
            for x in 0..self.size as i32 {
                self.set_cell(Position::new(x, y), Cell::Empty, listener);
            }
        }
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions_of(Cell::Empty)
    }

    pub fn positions_of(&self, cell: Cell) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == cell)
            .map(|(index, _)| Position::new((index % self.size) as i32, (index / self.size) as i32))
            .collect()
    }
}
