use common::games::snake::{Cell, Position};

/// Text mirror of the board, built only from cell notifications.
pub struct BoardView {
    size: usize,
    cells: Vec<Cell>,
    score: u32,
}

impl BoardView {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            score: 0,
        }
    }

    pub fn resize(&mut self, size: usize) {
        *self = Self::new(size);
    }

    pub fn apply_cell(&mut self, position: Position, cell: Cell) {
        if position.x < 0 || position.y < 0 {
            return;
        }
        let (x, y) = (position.x as usize, position.y as usize);
        if x < self.size && y < self.size {
            self.cells[y * self.size + x] = cell;
        }
    }

    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.size * 2 + 3) * (self.size + 3));
        let border = format!("+{}+\n", "-".repeat(self.size * 2));
        out.push_str(&border);
        for row in self.cells.chunks(self.size.max(1)) {
            out.push('|');
            for cell in row {
                out.push(glyph(*cell));
                out.push(' ');
            }
            out.push_str("|\n");
        }
        out.push_str(&border);
        out.push_str(&format!("Score: {}", self.score));
        out
    }
}

fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Wall => '#',
        Cell::Body => 'o',
        Cell::Head => '@',
        Cell::Egg => '*',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_reflects_applied_cells() {
        let mut view = BoardView::new(10);
        view.apply_cell(Position::new(0, 0), Cell::Wall);
        view.apply_cell(Position::new(9, 1), Cell::Head);
        view.set_score(3);

        let rendered = view.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 13);
        assert!(lines[1].starts_with("|# . "));
        assert!(lines[2].ends_with("@ |"));
        assert_eq!(lines[12], "Score: 3");
    }

    #[test]
    fn test_out_of_bounds_cells_are_ignored() {
        let mut view = BoardView::new(10);
        view.apply_cell(Position::new(-1, 0), Cell::Head);
        view.apply_cell(Position::new(10, 0), Cell::Head);
        assert!(!view.render().contains('@'));
    }
}
