use std::io;
use std::process::ExitCode;

use gtp_engine::game::{RandomEngine, MAX_BOARD_SIZE};
use gtp_engine::gtp;

const DEFAULT_BOARD_SIZE: usize = 19;

fn main() -> ExitCode {
    let size = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) if (1..=MAX_BOARD_SIZE).contains(&n) => n,
            _ => {
                eprintln!("invalid board size '{arg}' (must be 1-{MAX_BOARD_SIZE})");
                return ExitCode::FAILURE;
            }
        },
        None => DEFAULT_BOARD_SIZE,
    };

    let engine = RandomEngine::new(size);
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = gtp::run_session(engine, stdin.lock(), stdout.lock()) {
        eprintln!("io error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
