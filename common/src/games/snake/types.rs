#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn moved(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    /// Screen coordinates: y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Body,
    Head,
    Egg,
}

impl Cell {
    pub fn color(&self) -> CellColor {
        match self {
            Cell::Wall => CellColor::Black,
            Cell::Body => CellColor::LightGreen,
            Cell::Head => CellColor::DarkGreen,
            Cell::Egg => CellColor::Red,
            Cell::Empty => CellColor::LightGray,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellColor {
    Black,
    LightGreen,
    DarkGreen,
    Red,
    LightGray,
}

impl CellColor {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            CellColor::Black => (0, 0, 0),
            CellColor::LightGreen => (144, 238, 144),
            CellColor::DarkGreen => (0, 100, 0),
            CellColor::Red => (255, 0, 0),
            CellColor::LightGray => (211, 211, 211),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// No board has been generated yet.
    Idle,
    /// Board generated, ticks are ignored.
    Ready,
    Running,
    /// Terminal until `start_new_game` is called again.
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionKind {
    SelfCollision,
    Boundary,
    Wall,
}

impl CollisionKind {
    pub fn message(&self) -> &'static str {
        match self {
            CollisionKind::Wall => "You lost! Your snake collided with a wall!",
            CollisionKind::SelfCollision | CollisionKind::Boundary => {
                "You lost! Your snake collided!"
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is not running, nothing moved.
    Idle,
    Moved,
    Ate { score: u32 },
    GameOver(CollisionKind),
}
