use common::games::snake::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    Turn(Direction),
    /// Starts ticking when paused, pauses when ticking.
    Toggle,
    NewGame(Option<usize>),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  w/a/s/d or up/left/down/right   turn
  p or space                      start / pause
  new [size]                      new game, optionally with another board size
  show                            print the board
  help                            this text
  q                               quit";

impl ConsoleCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        // A bare space is the pause key, so it must survive trimming.
        if line == " " {
            return Ok(ConsoleCommand::Toggle);
        }

        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Err("empty command".to_string());
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "w" | "up" => ConsoleCommand::Turn(Direction::Up),
            "a" | "left" => ConsoleCommand::Turn(Direction::Left),
            "s" | "down" => ConsoleCommand::Turn(Direction::Down),
            "d" | "right" => ConsoleCommand::Turn(Direction::Right),
            "p" | "pause" | "space" => ConsoleCommand::Toggle,
            "new" | "n" => {
                let size = words
                    .next()
                    .map(|s| {
                        s.parse::<usize>()
                            .map_err(|e| format!("invalid board size '{}': {}", s, e))
                    })
                    .transpose()?;
                ConsoleCommand::NewGame(size)
            }
            "show" => ConsoleCommand::Show,
            "help" | "?" => ConsoleCommand::Help,
            "q" | "quit" | "exit" => ConsoleCommand::Quit,
            other => return Err(format!("unknown command '{}'", other)),
        };

        if let Some(extra) = words.next() {
            return Err(format!("unexpected argument '{}'", extra));
        }
        Ok(command)
    }
}
