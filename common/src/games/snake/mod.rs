mod board;
mod game_state;
mod listener;
mod settings;
mod snake;
mod types;

pub use board::Board;
pub use game_state::SnakeGame;
pub use listener::{ChannelListener, GameEvent, GameListener};
pub use settings::{validate_board_size, wall_count, SnakeGameSettings, MIN_BOARD_SIZE};
pub use snake::{Snake, SPAWN_LENGTH};
pub use types::{Cell, CellColor, CollisionKind, Direction, GamePhase, Position, TickOutcome};
