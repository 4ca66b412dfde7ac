use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::listener::GameListener;
use super::settings::{validate_board_size, wall_count, SnakeGameSettings};
use super::snake::Snake;
use super::types::{Cell, CollisionKind, Direction, GamePhase, Position, TickOutcome};

const MAX_PLACEMENT_DRAWS: usize = 1024;

/// Single-player snake engine. The host drives it with `tick` on a timer and
/// forwards key presses; everything visible comes back through the listener.
pub struct SnakeGame<L: GameListener> {
    listener: L,
    rng: SessionRng,
    settings: SnakeGameSettings,
    board: Board,
    snake: Snake,
    egg: Option<Position>,
    phase: GamePhase,
    direction: Direction,
    direction_changed: bool,
    score: u32,
    tick_interval_ms: u64,
}

impl<L: GameListener> SnakeGame<L> {
    pub fn new(listener: L, settings: SnakeGameSettings) -> Self {
        Self::with_rng(listener, settings, SessionRng::from_random())
    }

    pub fn with_seed(listener: L, settings: SnakeGameSettings, seed: u64) -> Self {
        Self::with_rng(listener, settings, SessionRng::new(seed))
    }

    fn with_rng(listener: L, settings: SnakeGameSettings, rng: SessionRng) -> Self {
        Self {
            listener,
            rng,
            settings,
            board: Board::new(0),
            snake: Snake::default(),
            egg: None,
            phase: GamePhase::Idle,
            direction: Direction::Up,
            direction_changed: false,
            score: 0,
            tick_interval_ms: settings.base_tick_interval_ms,
        }
    }

    /// Throws away the current board and generates a fresh one. The game is
    /// left paused; the host decides when ticking starts.
    pub fn start_new_game(&mut self, board_size: usize) -> Result<(), String> {
        validate_board_size(board_size)?;

        self.board = Board::new(board_size);
        self.phase = GamePhase::Ready;
        self.direction = Direction::Up;
        self.direction_changed = false;
        self.score = 0;

        self.generate_board();

        self.tick_interval_ms = self.settings.base_tick_interval_ms;
        self.listener.on_score_changed(self.score);
        self.listener.on_speed_changed(self.tick_interval_ms);

        log!(
            "New game: size {}, seed {}, {} walls, egg at {:?}",
            board_size,
            self.rng.seed(),
            self.board.positions_of(Cell::Wall).len(),
            self.egg
        );
        Ok(())
    }

    pub fn toggle_state(&mut self, running: bool) {
        match self.phase {
            GamePhase::Ready | GamePhase::Running => {
                self.phase = if running {
                    GamePhase::Running
                } else {
                    GamePhase::Ready
                };
            }
            GamePhase::Idle | GamePhase::GameOver => {}
        }
    }

    /// Returns whether the turn was taken. Turns are dropped while paused,
    /// after a turn already taken this tick, and when reversing.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.direction_changed || self.phase != GamePhase::Running {
            return false;
        }
        if self.direction.is_opposite(&direction) {
            return false;
        }
        self.direction = direction;
        self.direction_changed = true;
        true
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != GamePhase::Running {
            return TickOutcome::Idle;
        }
        self.direction_changed = false;

        self.move_body();
        let Some(head) = self.snake.advance_head(self.direction) else {
            return TickOutcome::Idle;
        };

        if let Some(collision) = self.detect_collision(head) {
            self.game_over(collision);
            return TickOutcome::GameOver(collision);
        }

        self.board.set_cell(head, Cell::Head, &mut self.listener);

        if self.egg == Some(head) {
            self.eat();
            return TickOutcome::Ate { score: self.score };
        }
        TickOutcome::Moved
    }

    fn generate_board(&mut self) {
        self.board.clear(&mut self.listener);
        self.spawn_snake();
        self.egg = self.place_egg();
        self.place_walls();
    }

    fn spawn_snake(&mut self) {
        let center = (self.board.size() / 2) as i32;
        self.snake = Snake::spawn(Position::new(center, center));

        let segments = self.snake.segments().to_vec();
        self.board.set_cell(segments[0], Cell::Head, &mut self.listener);
        for segment in &segments[1..] {
            self.board.set_cell(*segment, Cell::Body, &mut self.listener);
        }
    }

    fn place_egg(&mut self) -> Option<Position> {
        let egg = self.random_free_position(|_| true)?;
        self.board.set_cell(egg, Cell::Egg, &mut self.listener);
        Some(egg)
    }

    fn place_walls(&mut self) {
        let spawn_column = (self.board.size() / 2) as i32;
        for _ in 0..wall_count(self.board.size()) {
            let Some(wall) = self.random_free_position(|pos| pos.x != spawn_column) else {
                break;
            };
            self.board.set_cell(wall, Cell::Wall, &mut self.listener);
        }
    }

    /// Redraws random cells until one is free; a crowded board falls back to
    /// picking among the remaining free cells.
    fn random_free_position(&mut self, allowed: impl Fn(Position) -> bool) -> Option<Position> {
        let size = self.board.size() as i32;
        for _ in 0..MAX_PLACEMENT_DRAWS {
            let pos = Position::new(
                self.rng.random_range(0..size),
                self.rng.random_range(0..size),
            );
            if self.board.can_place(pos) && allowed(pos) {
                return Some(pos);
            }
        }

        let free: Vec<Position> = self
            .board
            .empty_positions()
            .into_iter()
            .filter(|pos| allowed(*pos))
            .collect();
        self.rng.random_index(free.len()).map(|index| free[index])
    }

    fn move_body(&mut self) {
        if let Some(vacated) = self.snake.follow() {
            self.board.set_cell(vacated, Cell::Empty, &mut self.listener);
        }

        let segments = self.snake.segments();
        for i in (1..segments.len()).rev() {
            self.board.set_cell(segments[i], Cell::Body, &mut self.listener);
        }
    }

    fn detect_collision(&self, head: Position) -> Option<CollisionKind> {
        if self.snake.hits_itself() {
            Some(CollisionKind::SelfCollision)
        } else if !self.board.is_in_bounds(head) {
            Some(CollisionKind::Boundary)
        } else if self.board.cell(head) == Some(Cell::Wall) {
            Some(CollisionKind::Wall)
        } else {
            None
        }
    }

    fn eat(&mut self) {
        if let Some(grown) = self.snake.grow_in_place() {
            self.board.set_cell(grown, Cell::Body, &mut self.listener);
        }
        self.score += 1;
        let eaten = self.egg;
        self.egg = self.place_egg();
        self.listener.on_score_changed(self.score);

        log!(
            "Ate egg at {:?}. Score: {}, next egg at {:?}",
            eaten,
            self.score,
            self.egg
        );

        if self.settings.is_speed_up_score(self.score) {
            self.tick_interval_ms = self.settings.next_tick_interval(self.tick_interval_ms);
            self.listener.on_speed_changed(self.tick_interval_ms);
            log!("Tick interval is now {} ms", self.tick_interval_ms);
        }
    }

    fn game_over(&mut self, collision: CollisionKind) {
        self.phase = GamePhase::GameOver;
        log!(
            "Game over ({:?}) at {:?} with score {}",
            collision,
            self.snake.head(),
            self.score
        );
        self.listener.on_game_over(self.score, collision.message());
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn egg(&self) -> Option<Position> {
        self.egg
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.board.cell(pos)
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    #[cfg(test)]
    fn move_egg_to(&mut self, pos: Position) {
        if let Some(old) = self.egg {
            self.board.set_cell(old, Cell::Empty, &mut self.listener);
        }
        self.board.set_cell(pos, Cell::Egg, &mut self.listener);
        self.egg = Some(pos);
    }

    #[cfg(test)]
    fn put_cell(&mut self, pos: Position, cell: Cell) {
        self.board.set_cell(pos, cell, &mut self.listener);
    }

    #[cfg(test)]
    fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
