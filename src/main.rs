use anyhow::Result;
use clap::Parser;
use sigmap::cli::{Cli, Commands};
use sigmap::commands::build::{build_database, BuildConfig};
use sigmap::commands::selector::print_selectors;

fn main() -> Result<()> {
    // Rejection and skip diagnostics are warn-level; visible by default,
    // tunable through RUST_LOG.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Build { input, output } => {
            let report = build_database(&BuildConfig { input, output })?;
            println!(
                "stored {} entries ({} rejected, {} skipped)",
                report.stored(),
                report.rejected,
                report.skipped
            );
            Ok(())
        }
        Commands::Selector { signatures } => print_selectors(&signatures),
    }
}
