#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use tictactoe::{cli, init_logging, ui, GameEngine};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a game in the terminal.
    Play,
    /// Apply a list of moves and jumps, then print the resulting game.
    Replay {
        /// Cell indices and jumps, e.g. `0 4 1 j2 5`.
        #[arg(required = true)]
        commands: Vec<String>,
        #[arg(long, help = "Print the final view as JSON instead of a board")]
        json: bool,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Cli::parse();
    let mut engine = GameEngine::new();

    match args.command {
        Commands::Play => {
            let stdin = std::io::stdin();
            cli::run_session(&mut engine, stdin.lock(), std::io::stdout())?;
        }
        Commands::Replay { commands, json } => {
            cli::replay(&mut engine, commands.as_slice())?;
            if json {
                println!("{}", serde_json::to_string(&engine.view())?);
            } else {
                print!("{}", ui::render_view(&engine.view()));
            }
        }
    }
    Ok(())
}
