use anyhow::Context;
use clap::Parser;
use student_roster::utils::error::{ErrorSeverity, RosterError};
use student_roster::core::ConfigProvider;
use student_roster::utils::{logger, validation::Validate};
use student_roster::{CliConfig, LocalStorage, Roster, Settings, Shell};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match Settings::resolve(&cli).and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    if settings.log_format == "json" {
        logger::init_json_logger(cli.verbose, settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, settings.log_level.as_deref());
    }

    tracing::info!("Starting student-roster");
    tracing::debug!("Effective settings: {:?}", settings);

    let storage = LocalStorage::new(settings.data_dir().to_string());
    let mut roster = Roster::new();

    if let Some(file) = &cli.load {
        if let Err(e) = roster.load(&storage, file).await {
            tracing::error!(
                "Initial load of {} failed: {} (Category: {:?})",
                file,
                e,
                e.category()
            );
            exit_with(&e);
        }
    }

    let mut shell = Shell::with_roster(roster, storage, settings);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    shell
        .run(stdin, &mut stdout)
        .await
        .context("terminal input/output failed")?;

    tracing::info!("Session ended with {} students in memory", shell.roster().len());
    Ok(())
}

fn exit_with(e: &RosterError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
