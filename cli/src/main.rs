//! CLI entrypoint for War Room
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::io::IsTerminal;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use war_room_application::{DebateProgress, NoProgress, RandomSource, RunDebateUseCase};
use war_room_domain::{DebateContext, DebateResponse, OutputFormat, ScriptBank};
use war_room_infrastructure::{
    ConfigLoader, CredentialSource, Credentials, FileConfig, HttpProviderGateway, SeededRandom,
};
use war_room_presentation::{
    ChatRepl, Cli, Command, ConsoleFormatter, KeyRow, MatchArgs, ProgressReporter,
    SimpleProgress, server,
};

type DebateUseCase = RunDebateUseCase<HttpProviderGateway>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };
    config.validate().context("invalid configuration")?;

    if !config.output.color {
        ConsoleFormatter::set_color(false);
    }

    info!("Starting War Room");

    match command {
        Command::Personas => {
            let registry = config.persona_registry()?;
            print!("{}", ConsoleFormatter::format_roster(&registry));
        }
        Command::CheckKeys => check_keys(&config),
        Command::Ask {
            message,
            matchup,
            output,
        } => {
            let use_case = build_use_case(&config, cli.seed)?;
            let format = output
                .map(OutputFormat::from)
                .or(config.output.format)
                .unwrap_or_default();
            ask(&use_case, message, &matchup, format, cli.quiet).await;
        }
        Command::Chat { matchup } => {
            let use_case = build_use_case(&config, cli.seed)?;
            let mut repl = ChatRepl::new(use_case, matchup.match_info())
                .with_progress(!cli.quiet && config.repl.show_progress)
                .with_history_file(config.repl.history_path());
            repl.run().await?;
        }
        Command::Serve { bind } => {
            let use_case = build_use_case(&config, cli.seed)?;
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let addr: SocketAddr = bind
                .parse()
                .with_context(|| format!("invalid bind address: {}", bind))?;
            server::serve(use_case, addr).await?;
        }
    }

    Ok(())
}

// === Dependency Injection ===
fn build_use_case(config: &FileConfig, seed: Option<u64>) -> Result<Arc<DebateUseCase>> {
    let gateway = Arc::new(
        HttpProviderGateway::from_config(&config.providers, config.debate.timeout())
            .context("failed to build HTTP client")?,
    );

    let missing: Vec<_> = gateway
        .credential_report()
        .iter()
        .filter(|s| !s.is_present())
        .map(|s| s.provider.as_str())
        .collect();
    if !missing.is_empty() {
        info!("No API key for: {} (scripted replies)", missing.join(", "));
    }

    let registry = Arc::new(config.persona_registry()?);
    let random: Arc<dyn RandomSource> = Arc::new(SeededRandom::new(seed.or(config.debate.seed)));

    let use_case = RunDebateUseCase::new(gateway, registry, Arc::new(ScriptBank::builtin()), random)
        .with_config(config.debate.to_debate_config());
    Ok(Arc::new(use_case))
}

async fn ask(
    use_case: &DebateUseCase,
    message: String,
    matchup: &MatchArgs,
    format: OutputFormat,
    quiet: bool,
) {
    let context = DebateContext::new(message, matchup.match_info());

    let progress: Box<dyn DebateProgress> = if quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let output = match use_case.run_guarded(context.clone(), progress.as_ref()).await {
        Ok(outcome) => ConsoleFormatter::render(format, &context, &outcome),
        Err(e) => ConsoleFormatter::render_response(format, &DebateResponse::offline(e)),
    };
    println!("{}", output);
}

fn check_keys(config: &FileConfig) {
    let credentials = Credentials::from_env(&config.providers);
    let rows: Vec<KeyRow<'_>> = credentials
        .report()
        .iter()
        .map(|status| KeyRow {
            provider: status.provider,
            env_var: &status.env_var,
            source: status.source.as_ref().map(|source| match source {
                CredentialSource::Config => "config api_key".to_string(),
                CredentialSource::Env(var) => format!("env {}", var),
            }),
        })
        .collect();
    print!("{}", ConsoleFormatter::format_key_report(&rows));
}
