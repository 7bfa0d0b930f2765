use clap::{Parser, Subcommand};

use maskproxy::cmd;

#[derive(Parser, Debug)]
#[command(name = "maskproxy", about = "Masks AWS identifiers in outbound LLM prompts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Runs the proxy server.
    Serve(cmd::serve::Args),
    /// Masks a single string and prints the result.
    Mask(cmd::mask::Args),
    /// Unmasks a single string and prints the result.
    Unmask(cmd::unmask::Args),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => cmd::serve::run(args),
        Command::Mask(args) => cmd::mask::run(args),
        Command::Unmask(args) => cmd::unmask::run(args),
    }
}
