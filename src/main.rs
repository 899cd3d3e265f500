use std::process::ExitCode;

use happy_families::cli::{self, Args};
use happy_families::io::{ConsoleInteraction, TerminalIO};
use happy_families::services::game::{read_player_count, Game};
use happy_families::GameResult;

fn init_tracing(args: &Args) {
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> GameResult<()> {
    let num_players = match args.players {
        Some(n) => n,
        None => read_player_count(&mut TerminalIO)?,
    };
    let config = args.game_config(num_players)?;

    let mut game = Game::new(config)?;
    game.run(&mut ConsoleInteraction::terminal())?;
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_tracing(&args);

    println!("*** HAPPY FAMILIES ***");
    println!();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
