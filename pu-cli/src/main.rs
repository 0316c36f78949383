//! PU CLI - Command line tool for checking the site's data files.

use clap::Parser;

mod cmd;

#[derive(Parser)]
#[command(
    name = "pu-cli",
    version,
    about = "Pressure ulcer research site data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cmd::run(cli.command)
}
