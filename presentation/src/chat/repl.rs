//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;
use war_room_application::{NoProgress, ProviderGateway, RunDebateUseCase};
use war_room_domain::{DebateContext, DebateResponse, MatchInfo, OutputFormat};

/// Interactive chat REPL
pub struct ChatRepl<G: ProviderGateway + 'static> {
    use_case: Arc<RunDebateUseCase<G>>,
    match_info: MatchInfo,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl<G: ProviderGateway + 'static> ChatRepl<G> {
    /// Create a new ChatRepl
    pub fn new(use_case: Arc<RunDebateUseCase<G>>, match_info: MatchInfo) -> Self {
        Self {
            use_case,
            match_info,
            show_progress: true,
            history_file: None,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Persist line history in `path`; `None` keeps history in memory only
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.history_file.clone();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("war-room> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    self.process_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              W A R   R O O M                │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Match: {} vs {}",
            self.match_info.home.bold(),
            self.match_info.away.bold()
        );
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Talk to the room, or @mention one analyst (e.g. @grok, @claude).");
        println!("Say \"decide\" or \"final\" to make the Chairman rule.");
        println!();
        println!("Commands:");
        println!("  /help, /h, /?            - Show this help");
        println!("  /personas                - Show the analysts");
        println!("  /match <home> vs <away>  - Switch teams, keeping match details");
        println!("  /quit, /exit, /q         - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, line: &str) -> bool {
        let (cmd, args) = match line.split_once(char::is_whitespace) {
            Some((cmd, args)) => (cmd, args.trim()),
            None => (line, ""),
        };

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                Self::print_help();
                false
            }
            "/personas" => {
                println!();
                println!("{}", ConsoleFormatter::format_roster(self.use_case.registry()));
                false
            }
            "/match" => {
                match parse_match(args) {
                    Some((home, away)) => {
                        self.match_info = self.match_info.clone().with_teams(home, away);
                        println!(
                            "Match set: {} vs {}",
                            self.match_info.home.bold(),
                            self.match_info.away.bold()
                        );
                    }
                    None => println!("Usage: /match <home> vs <away>"),
                }
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_message(&self, message: &str) {
        println!();

        let context = DebateContext::new(message, self.match_info.clone());
        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.run_guarded(context, &progress).await
        } else {
            self.use_case.run_guarded(context, &NoProgress).await
        };

        match result {
            Ok(outcome) => println!("{}", ConsoleFormatter::format_turns(&outcome)),
            Err(e) => println!(
                "{}",
                ConsoleFormatter::render_response(OutputFormat::Full, &DebateResponse::offline(e))
            ),
        }
        println!();
    }
}

/// `"Real Madrid vs Barcelona"` or `"Inter Milan"` → (home, away)
fn parse_match(args: &str) -> Option<(String, String)> {
    let (home, away) = match args.split_once(" vs ") {
        Some(pair) => pair,
        None => args.split_once(char::is_whitespace)?,
    };
    let (home, away) = (home.trim(), away.trim());
    if home.is_empty() || away.is_empty() {
        None
    } else {
        Some((home.to_string(), away.to_string()))
    }
}
