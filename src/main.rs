use clap::{Parser, Subcommand};

mod cmd;
mod household;
mod tax;

#[derive(Parser, Debug)]
#[command(name = "taxfr", version, about = "Compute French household income tax")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the tax owed by a single fiscal household
    Assess(cmd::assess::AssessCommand),
    /// Compute tax for many households from a CSV or JSON file
    Batch(cmd::batch::BatchCommand),
    /// Print expected input formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Assess(cmd) => cmd.exec(),
        Command::Batch(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
