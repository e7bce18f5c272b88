//! Console output formatter for debate results

use colored::{ColoredString, Colorize};
use war_room_application::DebateOutcome;
use war_room_domain::{
    DebateContext, DebateResponse, OutputFormat, PersonaRegistry, ProviderId, Turn,
};

/// One line of the `check-keys` report
#[derive(Debug, Clone)]
pub struct KeyRow<'a> {
    pub provider: ProviderId,
    pub env_var: &'a str,
    /// Where the key came from, `None` when missing
    pub source: Option<String>,
}

/// Formats debate results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colors on or off for everything printed afterwards
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Render a finished debate in the requested format
    pub fn render(format: OutputFormat, context: &DebateContext, outcome: &DebateOutcome) -> String {
        match format {
            OutputFormat::Full => Self::format(context, outcome),
            OutputFormat::Compact => Self::format_compact(&outcome.replies()),
            OutputFormat::Json => Self::format_json(&DebateResponse::new(outcome.replies())),
        }
    }

    /// Render an envelope with no provenance (offline replies, HTTP bodies)
    pub fn render_response(format: OutputFormat, response: &DebateResponse) -> String {
        match format {
            OutputFormat::Full => {
                let mut output = String::new();
                for turn in &response.replies {
                    output.push_str(&Self::turn(turn, false));
                }
                output
            }
            OutputFormat::Compact => Self::format_compact(&response.replies),
            OutputFormat::Json => Self::format_json(response),
        }
    }

    /// Format the complete debate
    pub fn format(context: &DebateContext, outcome: &DebateOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!(
            "WAR ROOM: {} vs {}",
            context.match_info.home, context.match_info.away
        )));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "You:".cyan().bold(), context.message));
        output.push_str(&format!(
            "{} {}\n",
            "Mode:".cyan().bold(),
            outcome.mode.as_str()
        ));

        for spoken in &outcome.turns {
            output.push_str(&Self::turn(&spoken.turn, spoken.is_fallback()));
        }

        let fallbacks = outcome.fallback_count();
        if fallbacks > 0 {
            output.push_str(&format!(
                "\n{}\n",
                format!("{} of {} replies were scripted", fallbacks, outcome.turns.len()).dimmed()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Just the turns, for the chat loop
    pub fn format_turns(outcome: &DebateOutcome) -> String {
        outcome
            .turns
            .iter()
            .map(|spoken| Self::turn(&spoken.turn, spoken.is_fallback()))
            .collect()
    }

    /// One `[speaker]: text` line per turn
    pub fn format_compact(replies: &[Turn]) -> String {
        replies
            .iter()
            .map(Turn::line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format as JSON
    pub fn format_json(response: &DebateResponse) -> String {
        serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
    }

    /// Roster table for `personas` and `/personas`
    pub fn format_roster(registry: &PersonaRegistry) -> String {
        let chairman = registry.chairman();
        let mut output = String::new();
        output.push_str(&format!("{}\n", "The Council".cyan().bold()));

        for persona in registry.roster() {
            let mut line = format!(
                "  {:<16} {:<13} {:<10}",
                persona.name.bold(),
                persona.role,
                persona.provider.as_str().dimmed()
            );
            if !persona.traits.is_empty() {
                line.push_str(&format!(" {}", persona.traits.join(" · ")));
            }
            if persona.name == chairman.name {
                line.push_str(&format!(" {}", "(chair)".yellow()));
            }
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    /// Key presence report for `check-keys`
    pub fn format_key_report(rows: &[KeyRow<'_>]) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Provider keys".cyan().bold()));

        for row in rows {
            let line = match &row.source {
                Some(source) => format!(
                    "  {} {:<10} {}",
                    "v".green(),
                    row.provider.as_str(),
                    source.dimmed()
                ),
                None => format!(
                    "  {} {:<10} {} not set (scripted replies only)",
                    "x".red(),
                    row.provider.as_str(),
                    row.env_var
                ),
            };
            output.push_str(&line);
            output.push('\n');
        }

        let present = rows.iter().filter(|r| r.source.is_some()).count();
        output.push_str(&format!("\n{}/{} providers configured\n", present, rows.len()));
        output
    }

    fn turn(turn: &Turn, scripted: bool) -> String {
        let speaker = Self::speaker(turn);
        let marker = if scripted {
            format!(" {}", "(scripted)".dimmed())
        } else {
            String::new()
        };
        format!("\n{}{}\n{}\n", speaker, marker, turn.text)
    }

    fn speaker(turn: &Turn) -> ColoredString {
        let label = format!("── {} ──", turn.speaker);
        if turn.is_system() {
            label.red().bold()
        } else if turn.is_user {
            label.cyan().bold()
        } else {
            label.yellow().bold()
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
