use clap::Parser;
use playfetch::commands::{self, Context};
use playfetch::navigator::TerminalNavigator;
use playfetch::{Cli, FinderConfig};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let config = match FinderConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(e.exit_code());
        }
    };
    let locale = cli.locale.unwrap_or(config.locale);
    tracing::debug!(locale = %locale, "starting playfetch");

    let navigator = TerminalNavigator::stdout();
    let ctx = Context {
        config: &config,
        locale,
        navigator: &navigator,
    };

    let mut stdout = std::io::stdout();
    match commands::execute(cli.command, &ctx, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {}", e.user_message(locale));
            ExitCode::from(e.exit_code())
        }
    }
}
