//! Line-oriented text protocol, modelled on GTP version 2.
//!
//! Each command may carry a numeric id. Responses are `=id result` on
//! success and `?id message` on failure, followed by a blank line. This lets
//! any front end (a GUI, a test harness, a referee) drive the engine over
//! stdin/stdout.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`, `list_commands`,
//!   `known_command <cmd>`, `quit`
//! - `boardsize <size>` - Only the compiled-in size is accepted
//! - `clear_board` - New game of the same type
//! - `newgame <pvp|pve>` - New game of the given type
//! - `play <color> <vertex>` - Place a stone
//! - `genmove <color>` - Let the engine move for `color`
//! - `undo [n]` - Take back `n` plies (default 1)
//! - `retract` - Take back one turn (two plies against the engine)
//! - `time_limit` - Seconds allowed per move on the front end's clock
//! - `timeout <color>` - `color` ran out of time and loses
//! - `suspend`, `resume` - Pause and continue the game
//! - `showboard` - Print the board
//! - `forbidden` - Empty points the side to move may not play
//! - `status` - Game type, state, side to move and winner
//! - `depth <n>` - Set the search depth
//! - `savestate` - Print the game record
//! - `loadstate <record>` - Replace the game with a record
//!
//! Vertices are a column letter (A-T, skipping I) and a row number counted
//! from the bottom, e.g. `E5` is the center of a 9x9 board.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::board::Color;
use crate::constants::{COORD_MAX, COORD_MIN, DEFAULT_SEARCH_DEPTH, MOVE_TIME_LIMIT_SECS, N};
use crate::game::{ComputerMove, GameSession, GameState, GameType, PlaceOutcome};
use crate::record::{from_record, to_record};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "depth",
    "forbidden",
    "genmove",
    "known_command",
    "list_commands",
    "loadstate",
    "name",
    "newgame",
    "play",
    "protocol_version",
    "quit",
    "resume",
    "retract",
    "savestate",
    "showboard",
    "status",
    "suspend",
    "time_limit",
    "timeout",
    "undo",
    "version",
];

/// Parse a vertex such as `D4` into board coordinates.
///
/// Returns `None` for anything that is not an interior point.
pub fn parse_vertex(s: &str) -> Option<(usize, usize)> {
    let mut chars = s.chars();
    let col_char = chars.next()?.to_ascii_uppercase();
    if !col_char.is_ascii_uppercase() || col_char == 'I' {
        return None;
    }
    let mut x = (col_char as u8 - b'A') as usize + 1;
    // Skip the 'I' column
    if col_char > 'I' {
        x -= 1;
    }
    let row: usize = chars.as_str().parse().ok()?;
    if !(COORD_MIN..=COORD_MAX).contains(&x) || !(1..=N).contains(&row) {
        return None;
    }
    Some((x, N - row + 1))
}

/// Convert board coordinates to a vertex string (e.g. "D4").
pub fn vertex_str(x: usize, y: usize) -> String {
    let mut c = (b'@' + x as u8) as char;
    if c >= 'I' {
        c = (c as u8 + 1) as char;
    }
    format!("{c}{}", N + 1 - y)
}

fn parse_game_type(s: &str) -> Option<GameType> {
    match s.to_ascii_lowercase().as_str() {
        "pvp" => Some(GameType::Pvp),
        "pve" => Some(GameType::Pve),
        _ => None,
    }
}

/// Protocol engine state.
pub struct ProtocolEngine {
    game: GameSession,
    depth: u32,
}

impl Default for ProtocolEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolEngine {
    /// A new Pve game at the default search depth.
    pub fn new() -> Self {
        Self::with_game(GameSession::default(), DEFAULT_SEARCH_DEPTH)
    }

    pub fn with_game(game: GameSession, depth: u32) -> Self {
        Self { game, depth }
    }

    pub fn game(&self) -> &GameSession {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, O: Write>(&mut self, input: R, mut output: O) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];
            debug!(%command, ?args, "command");

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Run the command loop on stdin/stdout.
    pub fn run_stdio(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(stdin.lock(), stdout.lock())
    }

    /// Parse an optional numeric command id from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, "nogo-rust".to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<usize>() {
                    Ok(size) if size == N => (true, String::new()),
                    Ok(size) => (
                        false,
                        format!("unacceptable size, only {N} is supported (got {size})"),
                    ),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                self.game = GameSession::new(self.game.game_type());
                (true, String::new())
            }

            "newgame" => match args.first().and_then(|s| parse_game_type(s)) {
                Some(game_type) => {
                    self.game = GameSession::new(game_type);
                    (true, String::new())
                }
                None => (false, "expected pvp or pve".to_string()),
            },

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let Some(color) = Color::parse(args[0]) else {
                    return (false, "invalid color".to_string());
                };
                let Some((x, y)) = parse_vertex(args[1]) else {
                    return (false, "invalid vertex".to_string());
                };
                match self.game.place_stone_as(x, y, color) {
                    PlaceOutcome::Placed => (true, String::new()),
                    PlaceOutcome::IllegalMove => (false, "illegal move".to_string()),
                    PlaceOutcome::NotPlayersTurn => (false, "not your turn".to_string()),
                    PlaceOutcome::GameAlreadyOver => (false, "game is over".to_string()),
                }
            }

            "genmove" => {
                let Some(color) = args.first().and_then(|s| Color::parse(s)) else {
                    return (false, "invalid color".to_string());
                };
                if self.game.state() == GameState::Playing && color != self.game.active_player() {
                    return (false, "not your turn".to_string());
                }
                match self.game.play_computer_move(self.depth) {
                    ComputerMove::Played { x, y } => (true, vertex_str(x, y)),
                    ComputerMove::Resigned => (true, "resign".to_string()),
                    ComputerMove::NotComputersTurn => {
                        (false, "cannot generate a move now".to_string())
                    }
                }
            }

            "undo" => {
                let n = match args.first() {
                    None => 1,
                    Some(s) => match s.parse::<usize>() {
                        Ok(n) => n,
                        Err(_) => return (false, "invalid count".to_string()),
                    },
                };
                if self.game.undo(n) == 0 {
                    (false, "cannot undo".to_string())
                } else {
                    (true, String::new())
                }
            }

            "retract" => {
                if self.game.retract() == 0 {
                    (false, "cannot undo".to_string())
                } else {
                    (true, String::new())
                }
            }

            "timeout" => {
                let Some(color) = args.first().and_then(|s| Color::parse(s)) else {
                    return (false, "invalid color".to_string());
                };
                if self.game.forfeit_by_timeout(color) {
                    (true, String::new())
                } else {
                    (false, "game is not in progress".to_string())
                }
            }

            "time_limit" => (true, MOVE_TIME_LIMIT_SECS.to_string()),

            "suspend" => {
                if self.game.suspend() {
                    (true, String::new())
                } else {
                    (false, "game is not in progress".to_string())
                }
            }

            "resume" => {
                if self.game.resume() {
                    (true, String::new())
                } else {
                    (false, "game is not suspended".to_string())
                }
            }

            "showboard" => (true, format!("\n{}", self.game.board())),

            "forbidden" => {
                let points: Vec<String> = self
                    .game
                    .forbidden_points()
                    .into_iter()
                    .map(|(x, y)| vertex_str(x, y))
                    .collect();
                (true, points.join(" "))
            }

            "status" => {
                let game_type = match self.game.game_type() {
                    GameType::Pvp => "pvp",
                    GameType::Pve => "pve",
                };
                let state = match self.game.state() {
                    GameState::Playing => "playing",
                    GameState::GameOver => "gameover",
                    GameState::Suspended => "suspended",
                };
                let mut s = format!(
                    "{game_type} {state} {} {}",
                    self.game.active_player(),
                    self.game.move_count()
                );
                if let Some(w) = self.game.winner() {
                    s.push_str(&format!(" winner {w}"));
                }
                (true, s)
            }

            "depth" => match args.first().and_then(|s| s.parse::<u32>().ok()) {
                Some(d) if d > 0 => {
                    self.depth = d;
                    (true, String::new())
                }
                _ => (false, "invalid depth".to_string()),
            },

            "savestate" => (true, to_record(&self.game)),

            "loadstate" => {
                let Some(record) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match from_record(record) {
                    Ok(game) => {
                        info!("game loaded");
                        self.game = game;
                        (true, String::new())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
