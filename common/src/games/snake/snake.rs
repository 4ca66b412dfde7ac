use super::types::{Direction, Position};

pub const SPAWN_LENGTH: usize = 5;

/// Segments ordered head first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Position>,
}

impl Snake {
    /// Head at `head`, the rest of the body stacked below it.
    pub fn spawn(head: Position) -> Self {
        let body = (0..SPAWN_LENGTH as i32)
            .map(|offset| Position::new(head.x, head.y + offset))
            .collect();
        Self { body }
    }

    /// `None` before the first spawn.
    pub fn head(&self) -> Option<Position> {
        self.body.first().copied()
    }

    pub fn tail(&self) -> Option<Position> {
        self.body.last().copied()
    }

    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Every segment behind the head takes its predecessor's place, walking
    /// from the tail forward. Returns the cell the tail left.
    pub fn follow(&mut self) -> Option<Position> {
        let vacated = self.tail()?;
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        Some(vacated)
    }

    pub fn advance_head(&mut self, direction: Direction) -> Option<Position> {
        let head = self.body.first_mut()?;
        *head = head.moved(direction);
        Some(*head)
    }

    pub fn hits_itself(&self) -> bool {
        match self.body.split_first() {
            Some((head, rest)) => rest.contains(head),
            None => false,
        }
    }

    /// Appends a copy of the tail; the copy separates from it on the next `follow`.
    pub fn grow_in_place(&mut self) -> Option<Position> {
        let tail = self.tail()?;
        self.body.push(tail);
        Some(tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_stacks_body_below_head() {
        let snake = Snake::spawn(Position::new(5, 5));
        assert_eq!(snake.len(), SPAWN_LENGTH);
        assert_eq!(snake.head(), Some(Position::new(5, 5)));
        assert_eq!(snake.tail(), Some(Position::new(5, 9)));
        assert_eq!(snake.segments()[1], Position::new(5, 6));
    }

    #[test]
    fn test_follow_then_advance() {
        let mut snake = Snake::spawn(Position::new(5, 5));
        let vacated = snake.follow();
        let head = snake.advance_head(Direction::Left);

        assert_eq!(vacated, Some(Position::new(5, 9)));
        assert_eq!(head, Some(Position::new(4, 5)));
        assert_eq!(
            snake.segments(),
            &[
                Position::new(4, 5),
                Position::new(5, 5),
                Position::new(5, 6),
                Position::new(5, 7),
                Position::new(5, 8),
            ]
        );
        assert!(!snake.hits_itself());
    }

    #[test]
    fn test_grow_in_place_duplicates_tail_for_one_move() {
        let mut snake = Snake::spawn(Position::new(5, 5));
        snake.grow_in_place();
        assert_eq!(snake.len(), SPAWN_LENGTH + 1);
        assert_eq!(snake.segments()[4], snake.segments()[5]);

        snake.follow();
        snake.advance_head(Direction::Up);
        assert_eq!(snake.segments()[5], Position::new(5, 9));
        assert_eq!(snake.segments()[4], Position::new(5, 8));
    }

    #[test]
    fn test_hits_itself_after_turning_back() {
        let mut snake = Snake::spawn(Position::new(5, 5));
        for direction in [Direction::Left, Direction::Down, Direction::Right] {
            snake.follow();
            snake.advance_head(direction);
        }
        assert!(snake.hits_itself());
    }

    #[test]
    fn test_empty_snake_has_no_head_and_does_not_move() {
        let mut snake = Snake::default();
        assert_eq!(snake.head(), None);
        assert_eq!(snake.tail(), None);
        assert_eq!(snake.follow(), None);
        assert_eq!(snake.advance_head(Direction::Up), None);
        assert_eq!(snake.grow_in_place(), None);
        assert!(!snake.hits_itself());
        assert!(snake.is_empty());
    }
}
