use clap::Parser;
use qat_api::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => cli::serve::run().await,
        Command::InitDb => cli::init_db::run().await,
    }
}
