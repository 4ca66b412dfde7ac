use tokio::sync::mpsc;

use super::types::{Cell, CellColor, Position};

/// Receiver of everything the engine wants a display to know about.
pub trait GameListener {
    fn on_cell_changed(&mut self, position: Position, cell: Cell, color: CellColor);

    fn on_score_changed(&mut self, score: u32);

    fn on_speed_changed(&mut self, tick_interval_ms: u64);

    fn on_game_over(&mut self, score: u32, message: &str);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    CellChanged {
        position: Position,
        cell: Cell,
        color: CellColor,
    },
    ScoreChanged(u32),
    SpeedChanged(u64),
    GameOver {
        score: u32,
        message: String,
    },
}

impl GameListener for Vec<GameEvent> {
    fn on_cell_changed(&mut self, position: Position, cell: Cell, color: CellColor) {
        self.push(GameEvent::CellChanged { position, cell, color });
    }

    fn on_score_changed(&mut self, score: u32) {
        self.push(GameEvent::ScoreChanged(score));
    }

    fn on_speed_changed(&mut self, tick_interval_ms: u64) {
        self.push(GameEvent::SpeedChanged(tick_interval_ms));
    }

    fn on_game_over(&mut self, score: u32, message: &str) {
        self.push(GameEvent::GameOver {
            score,
            message: message.to_string(),
        });
    }
}

/// Forwards events to a host task. Events sent after the receiver is dropped are discarded.
#[derive(Clone)]
pub struct ChannelListener {
    sender: mpsc::UnboundedSender<GameEvent>,
}

impl ChannelListener {
    pub fn new(sender: mpsc::UnboundedSender<GameEvent>) -> Self {
        Self { sender }
    }

    pub fn channel() -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }

    fn send(&self, event: GameEvent) {
        let _ = self.sender.send(event);
    }
}

impl GameListener for ChannelListener {
    fn on_cell_changed(&mut self, position: Position, cell: Cell, color: CellColor) {
        self.send(GameEvent::CellChanged { position, cell, color });
    }

    fn on_score_changed(&mut self, score: u32) {
        self.send(GameEvent::ScoreChanged(score));
    }

    fn on_speed_changed(&mut self, tick_interval_ms: u64) {
        self.send(GameEvent::SpeedChanged(tick_interval_ms));
    }

    fn on_game_over(&mut self, score: u32, message: &str) {
        self.send(GameEvent::GameOver {
            score,
            message: message.to_string(),
        });
    }
}
