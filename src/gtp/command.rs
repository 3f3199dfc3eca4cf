//! GTP command parsing.
//!
//! Commands form a closed set: anything outside [`KNOWN_COMMANDS`] is an
//! [`UnknownCommand`](crate::gtp::GtpError::UnknownCommand) at parse time,
//! and argument-count or argument-shape problems are `BadArguments`. The
//! vertex argument of `play` stays as raw text here because decoding it
//! needs the board size, which only the session knows.

use crate::gtp::GtpError;
use crate::Color;

/// All commands the session implements, as reported by `list_commands`.
pub const KNOWN_COMMANDS: [&str; 11] = [
    "protocol_version",
    "name",
    "version",
    "known_command",
    "list_commands",
    "boardsize",
    "clear_board",
    "komi",
    "play",
    "genmove",
    "quit",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ProtocolVersion,
    Name,
    Version,
    KnownCommand(String),
    ListCommands,
    BoardSize(usize),
    ClearBoard,
    Komi(f32),
    Play(Color, String),
    GenMove(Color),
    Quit,
}

fn bad_arguments(command: &'static str, message: &str) -> GtpError {
    GtpError::BadArguments {
        command,
        message: message.to_string(),
    }
}

fn expect_arity(
    command: &'static str,
    args: &[&str],
    expected: usize,
) -> Result<(), GtpError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(bad_arguments(
            command,
            &format!("expected {expected} argument(s), got {}", args.len()),
        ))
    }
}

fn parse_color(command: &'static str, arg: &str) -> Result<Color, GtpError> {
    arg.parse()
        .map_err(|e: crate::game::ColorError| bad_arguments(command, &e.to_string()))
}

/// Parse one input line into a command.
///
/// Returns `Ok(None)` for blank lines and lines holding only a `#` comment;
/// the GTP convention is to ignore those rather than answer them.
pub fn parse_command(line: &str) -> Result<Option<Command>, GtpError> {
    let line = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = parts.split_first() else {
        return Ok(None);
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "protocol_version" => {
            expect_arity("protocol_version", args, 0)?;
            Command::ProtocolVersion
        }
        "name" => {
            expect_arity("name", args, 0)?;
            Command::Name
        }
        "version" => {
            expect_arity("version", args, 0)?;
            Command::Version
        }
        "known_command" => {
            expect_arity("known_command", args, 1)?;
            Command::KnownCommand(args[0].to_ascii_lowercase())
        }
        "list_commands" => {
            expect_arity("list_commands", args, 0)?;
            Command::ListCommands
        }
        "boardsize" => {
            expect_arity("boardsize", args, 1)?;
            let size = args[0]
                .parse()
                .map_err(|_| bad_arguments("boardsize", "size must be a positive integer"))?;
            Command::BoardSize(size)
        }
        "clear_board" => {
            expect_arity("clear_board", args, 0)?;
            Command::ClearBoard
        }
        "komi" => {
            expect_arity("komi", args, 1)?;
            let value = args[0]
                .parse()
                .map_err(|_| bad_arguments("komi", "komi must be a number"))?;
            Command::Komi(value)
        }
        "play" => {
            expect_arity("play", args, 2)?;
            Command::Play(parse_color("play", args[0])?, args[1].to_string())
        }
        "genmove" => {
            expect_arity("genmove", args, 1)?;
            Command::GenMove(parse_color("genmove", args[0])?)
        }
        "quit" => {
            expect_arity("quit", args, 0)?;
            Command::Quit
        }
        _ => {
            return Err(GtpError::UnknownCommand {
                name: name.to_string(),
            })
        }
    };

    Ok(Some(command))
}
