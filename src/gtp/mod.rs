//! Go Text Protocol (GTP) session engine.
//!
//! One command per line in, one framed response out. The session owns the
//! board size and the color-to-move; the actual game lives behind the
//! [`MoveEngine`] collaborator, whose returned color is authoritative for
//! turn tracking.

use std::fmt;
use std::io::{self, BufRead, Write};

use log::{debug, warn};
use once_cell::sync::Lazy;

use crate::game::{Color, EngineError, MoveEngine, Vertex, VertexError};

pub mod command;
pub mod response;

pub use command::{parse_command, Command, KNOWN_COMMANDS};
pub use response::Response;

/// GTP protocol version reported by `protocol_version`.
const PROTOCOL_VERSION: &str = "2";

static COMMAND_LIST: Lazy<String> = Lazy::new(|| KNOWN_COMMANDS.join("\n"));

/// Error type for rejected GTP commands.
///
/// Every variant is recoverable: the session answers with a `?` line and
/// keeps running, and a rejected command never changes session state.
#[derive(Debug, Clone, PartialEq)]
pub enum GtpError {
    /// The command name is not part of the supported set
    UnknownCommand { name: String },
    /// Wrong argument count or malformed argument for a known command
    BadArguments {
        command: &'static str,
        message: String,
    },
    /// `boardsize` asked for a size other than the configured one
    ConfigurationMismatch { configured: usize, requested: usize },
    /// Move text that does not name a point on this board
    InvalidCoordinate { message: String },
    /// The declared color does not match the color to move
    OutOfTurn { color: Color, to_move: Color },
}

impl fmt::Display for GtpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GtpError::UnknownCommand { name } => write!(f, "unknown command '{name}'"),
            GtpError::BadArguments { command, message } => {
                write!(f, "invalid arguments for '{command}': {message}")
            }
            GtpError::ConfigurationMismatch {
                configured,
                requested,
            } => write!(
                f,
                "board size is fixed at {configured}x{configured}, cannot play {requested}x{requested}"
            ),
            GtpError::InvalidCoordinate { message } => {
                write!(f, "invalid coordinate: {message}")
            }
            GtpError::OutOfTurn { color, to_move } => {
                write!(f, "out of turn: {color} played but {to_move} is to move")
            }
        }
    }
}

impl std::error::Error for GtpError {}

impl From<VertexError> for GtpError {
    fn from(e: VertexError) -> Self {
        GtpError::InvalidCoordinate {
            message: e.to_string(),
        }
    }
}

impl From<EngineError> for GtpError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::OutOfTurn { color, to_move } => GtpError::OutOfTurn { color, to_move },
            EngineError::IllegalMove { .. } => GtpError::InvalidCoordinate {
                message: e.to_string(),
            },
        }
    }
}

/// Result of executing a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Response payload (possibly empty) for the success envelope
    Payload(String),
    /// Acknowledge and end the session
    Quit,
}

/// A GTP session: board size, color-to-move, and the collaborator that owns
/// the game itself.
pub struct Session<E: MoveEngine> {
    size: usize,
    to_move: Color,
    engine: E,
}

impl<E: MoveEngine> Session<E> {
    /// Start a session around a freshly reset engine.
    pub fn new(mut engine: E) -> Self {
        let size = engine.board_size();
        let to_move = engine.clear();
        Session {
            size,
            to_move,
            engine,
        }
    }

    /// The board size baked in at engine construction.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.size
    }

    /// The color whose move is currently expected.
    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    fn check_turn(&self, color: Color) -> Result<(), GtpError> {
        if color != self.to_move {
            return Err(GtpError::OutOfTurn {
                color,
                to_move: self.to_move,
            });
        }
        Ok(())
    }

    /// Execute one command against the session.
    ///
    /// On error the session state is unchanged and remains usable.
    pub fn execute(&mut self, command: Command) -> Result<Reply, GtpError> {
        let payload = match command {
            Command::ProtocolVersion => PROTOCOL_VERSION.to_string(),
            Command::Name => self.engine.name(),
            Command::Version => env!("CARGO_PKG_VERSION").to_string(),
            Command::KnownCommand(name) => {
                KNOWN_COMMANDS.contains(&name.as_str()).to_string()
            }
            Command::ListCommands => COMMAND_LIST.clone(),
            Command::BoardSize(requested) => {
                if requested != self.size {
                    return Err(GtpError::ConfigurationMismatch {
                        configured: self.size,
                        requested,
                    });
                }
                String::new()
            }
            Command::ClearBoard => {
                self.to_move = self.engine.clear();
                String::new()
            }
            // The komi was baked in when the engine was trained/built;
            // accept the command for protocol compliance and ignore it.
            Command::Komi(_) => String::new(),
            Command::Play(color, vertex_text) => {
                self.check_turn(color)?;
                let vertex = Vertex::parse(&vertex_text, self.size)?;
                self.to_move = self.engine.play(color, vertex)?;
                String::new()
            }
            Command::GenMove(color) => {
                self.check_turn(color)?;
                let (vertex, to_move) = self.engine.genmove(color)?;
                // The engine decides what comes next (it may have passed or
                // resigned internally), so copy its answer instead of
                // toggling.
                self.to_move = to_move;
                match vertex {
                    Vertex::Pass => "pass".to_string(),
                    Vertex::Point(point) => point.to_text(self.size),
                }
            }
            Command::Quit => return Ok(Reply::Quit),
        };

        Ok(Reply::Payload(payload))
    }

    /// Handle one raw input line, producing a framed response.
    ///
    /// Returns `None` for lines the protocol ignores (blank or comment). The
    /// boolean is true when the session should end.
    pub fn process_line(&mut self, line: &str) -> Option<(Response, bool)> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return None,
            Err(e) => {
                warn!("rejected line {:?}: {}", line.trim(), e);
                return Some((Response::Failure(e.to_string()), false));
            }
        };

        debug!("<<< {:?}", command);
        match self.execute(command) {
            Ok(Reply::Payload(payload)) => Some((Response::Success(payload), false)),
            Ok(Reply::Quit) => Some((Response::ok(), true)),
            Err(e) => {
                warn!("command failed: {e}");
                Some((Response::Failure(e.to_string()), false))
            }
        }
    }
}

/// Run a blocking GTP session over the given reader and writer.
///
/// Commands are handled strictly in arrival order; `play`/`genmove` block
/// until the engine returns. The loop ends on `quit` or end of input.
pub fn run_session<E, R, W>(engine: E, input: R, mut output: W) -> io::Result<()>
where
    E: MoveEngine,
    R: BufRead,
    W: Write,
{
    let mut session = Session::new(engine);

    for line in input.lines() {
        let line = line?;
        if let Some((response, quit)) = session.process_line(&line) {
            write!(output, "{response}")?;
            output.flush()?;
            if quit {
                break;
            }
        }
    }

    Ok(())
}
