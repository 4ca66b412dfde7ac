use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use common::games::snake::{ChannelListener, GameEvent, SnakeGame};
use common::log;

use crate::board_view::BoardView;
use crate::command::{ConsoleCommand, HELP};
use crate::config::ConsoleConfig;

enum Step {
    Tick,
    Input(Option<String>),
}

/// Plays the part of the game window: owns the timer, forwards input and
/// mirrors whatever the engine reports.
pub struct ConsoleSession {
    game: SnakeGame<ChannelListener>,
    events: mpsc::UnboundedReceiver<GameEvent>,
    view: BoardView,
    board_size: usize,
    ticking: bool,
    ticker: Interval,
}

fn new_ticker(period_ms: u64) -> Interval {
    let period = Duration::from_millis(period_ms.max(1));
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

impl ConsoleSession {
    pub fn new(config: &ConsoleConfig) -> Result<Self, String> {
        let (listener, events) = ChannelListener::channel();
        let mut game = match config.seed {
            Some(seed) => SnakeGame::with_seed(listener, config.settings, seed),
            None => SnakeGame::new(listener, config.settings),
        };
        game.start_new_game(config.board_size)?;

        let mut session = Self {
            ticker: new_ticker(game.tick_interval_ms()),
            game,
            events,
            view: BoardView::new(config.board_size),
            board_size: config.board_size,
            ticking: false,
        };
        session.drain_events();
        Ok(session)
    }

    pub async fn run(mut self) -> Result<(), String> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        println!("{}", self.view.render());
        println!("{}", HELP);

        loop {
            let step = tokio::select! {
                _ = self.ticker.tick(), if self.ticking => Step::Tick,
                line = lines.next_line() => {
                    Step::Input(line.map_err(|e| format!("Failed to read input: {}", e))?)
                }
            };

            match step {
                Step::Tick => {
                    self.game.tick();
                }
                Step::Input(None) => break,
                Step::Input(Some(line)) => {
                    match ConsoleCommand::parse(&line) {
                        Ok(ConsoleCommand::Quit) => break,
                        Ok(command) => self.handle_command(command),
                        Err(e) => println!("{}", e),
                    }
                }
            }

            self.drain_events();
        }

        log!("Console session finished with score {}", self.game.score());
        Ok(())
    }

    fn handle_command(&mut self, command: ConsoleCommand) {
        log!("Command: {:?}", command);
        match command {
            ConsoleCommand::Turn(direction) => {
                self.game.set_direction(direction);
            }
            ConsoleCommand::Toggle => {
                self.ticking = !self.ticking;
                self.game.toggle_state(self.ticking);
            }
            ConsoleCommand::NewGame(size) => {
                let size = size.unwrap_or(self.board_size);
                self.restart(size);
            }
            ConsoleCommand::Show => println!("{}", self.view.render()),
            ConsoleCommand::Help => println!("{}", HELP),
            ConsoleCommand::Quit => {}
        }
    }

    /// A rejected size leaves the current game and its timer as they were.
    fn restart(&mut self, size: usize) {
        match self.game.start_new_game(size) {
            Ok(()) => {
                self.ticking = false;
                self.board_size = size;
                self.view.resize(size);
            }
            Err(e) => println!("{}", e),
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                GameEvent::CellChanged { position, cell, .. } => {
                    self.view.apply_cell(position, cell);
                }
                GameEvent::ScoreChanged(score) => {
                    self.view.set_score(score);
                    if score > 0 {
                        println!("Score: {}", score);
                    }
                }
                GameEvent::SpeedChanged(interval_ms) => {
                    self.ticker = new_ticker(interval_ms);
                }
                GameEvent::GameOver { score, message } => {
                    println!("{}", self.view.render());
                    println!("{}\nYour Score: {}", message, score);
                    let size = self.board_size;
                    self.restart(size);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::GamePhase;

    fn create_session() -> ConsoleSession {
        let config = ConsoleConfig {
            board_size: 10,
            seed: Some(42),
            ..ConsoleConfig::default()
        };
        ConsoleSession::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_toggle_starts_and_pauses_ticking() {
        let mut session = create_session();
        assert!(!session.ticking);

        session.handle_command(ConsoleCommand::Toggle);
        assert!(session.ticking);
        assert!(session.game.is_running());

        session.handle_command(ConsoleCommand::Toggle);
        assert!(!session.ticking);
        assert_eq!(session.game.phase(), GamePhase::Ready);
    }

    #[tokio::test]
    async fn test_rejected_new_game_keeps_running_game_ticking() {
        let mut session = create_session();
        session.handle_command(ConsoleCommand::Toggle);

        session.handle_command(ConsoleCommand::NewGame(Some(5)));
        assert!(session.ticking);
        assert!(session.game.is_running());
        assert_eq!(session.board_size, 10);
        assert_eq!(session.game.board_size(), 10);
    }

    #[tokio::test]
    async fn test_new_game_stops_ticking_and_resizes() {
        let mut session = create_session();
        session.handle_command(ConsoleCommand::Toggle);

        session.handle_command(ConsoleCommand::NewGame(Some(15)));
        session.drain_events();
        assert!(!session.ticking);
        assert_eq!(session.game.phase(), GamePhase::Ready);
        assert_eq!(session.board_size, 15);
        assert_eq!(session.game.board_size(), 15);
    }
}
