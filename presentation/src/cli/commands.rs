//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;
use war_room_domain::MatchInfo;

/// Output format for a finished debate
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Header, every turn, fallback markers
    Full,
    /// One `[speaker]: text` line per turn
    Compact,
    /// The `{"replies": [...]}` envelope
    Json,
}

impl From<OutputFormat> for war_room_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Compact => Self::Compact,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for war-room
#[derive(Parser, Debug)]
#[command(name = "war-room")]
#[command(author, version, about = "Football betting war room - six AI analysts argue about your match")]
#[command(long_about = r#"
War Room puts six analyst personas in a room and lets them argue about a match.

Address one analyst with @ (e.g. "@grok is it cooked?") and the rest react
to the answer. Anything else starts a debate: openers, reactors, rebuttals,
escalation, and a Chairman verdict when you ask for one ("decide", "final").

Analysts whose provider key is missing or whose provider is down answer from
a script, so the room never goes silent.

Configuration files are loaded from (in priority order):
1. WAR_ROOM_* environment variables
2. --config <path>     Explicit config file
3. ./war-room.toml     Project-level config
4. ~/.config/war-room/config.toml   Global config

Example:
  war-room ask "who wins?" --home Inter --away Milan
  war-room ask "@claude how much should I stake?" --home Arsenal --away Spurs -o json
  war-room chat --home Real --away Barca
  war-room serve --bind 0.0.0.0:3000
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Seed for speaker selection and scripted replies (reproducible runs)
    #[arg(long, value_name = "N", global = true)]
    pub seed: Option<u64>,
}

/// Match the debate is about
#[derive(clap::Args, Debug, Clone)]
pub struct MatchArgs {
    /// Home side
    #[arg(long, default_value = "Home")]
    pub home: String,

    /// Away side
    #[arg(long, default_value = "Away")]
    pub away: String,

    /// Extra match detail passed to every analyst (repeatable)
    #[arg(long = "detail", value_name = "KEY=VALUE", value_parser = parse_detail)]
    pub details: Vec<(String, String)>,
}

impl MatchArgs {
    pub fn match_info(&self) -> MatchInfo {
        self.details
            .iter()
            .fold(MatchInfo::new(&self.home, &self.away), |info, (key, value)| {
                info.with_field(key, Value::String(value.clone()))
            })
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send one message to the war room
    Ask {
        /// What you say to the room
        message: String,

        #[command(flatten)]
        matchup: MatchArgs,

        /// Output format (default: [output] format from config, else full)
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Start an interactive session
    Chat {
        #[command(flatten)]
        matchup: MatchArgs,
    },

    /// Serve the JSON HTTP surface
    Serve {
        /// Address to listen on (default: [server] bind from config)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// List the analysts
    Personas,

    /// Report which providers have an API key configured
    CheckKeys,
}

fn parse_detail(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}
