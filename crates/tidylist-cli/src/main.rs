use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod shell;

#[derive(Parser)]
#[command(name = "tidylist", version, about = "Interactive in-memory todo list")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Command::Version) => {
            println!("tidylist {}", tidylist_core::version());
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            shell::run(stdin.lock(), stdout.lock())?;
        }
    }
    Ok(())
}
