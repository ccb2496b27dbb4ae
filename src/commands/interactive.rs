//! Interactive command implementation
//!
//! Prompts for a username, then loops over the analysis menu.

use crate::api::{GitHubClient, RelationSource};
use crate::cli::output::{api_hint, Painter, Tone, UserList};
use crate::cli::prompt::Prompter;
use crate::config::Config;
use crate::domain::{Category, RelationKind, Username};
use crate::error::Result;
use crate::services::{export, ExportFormat, Session};

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Settings for an interactive session
#[derive(Debug, Clone)]
pub struct InteractiveOptions {
    /// Page size for listing requests
    pub per_page: u32,
    /// Directory saved lists go to
    pub output_dir: PathBuf,
    /// Print a notice to stderr when a list starts downloading
    pub show_progress: bool,
}

impl From<&Config> for InteractiveOptions {
    fn from(config: &Config) -> Self {
        Self {
            per_page: config.api.per_page,
            output_dir: config.output.directory(),
            show_progress: true,
        }
    }
}

/// Menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Analyze(Category),
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Analyze(Category::NonFollowers)),
            "2" => Some(MenuChoice::Analyze(Category::Fans)),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Execute the interactive command on the terminal
pub fn run_interactive(config: &Config) -> Result<()> {
    let client = GitHubClient::new(&config.api)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock(), Painter::detect());

    interactive_loop(&mut prompter, client, &InteractiveOptions::from(config))
}

/// Drive the prompt/menu loop against any reader, writer and API source
pub fn interactive_loop<R, W, S>(
    prompter: &mut Prompter<R, W>,
    source: S,
    options: &InteractiveOptions,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: RelationSource,
{
    prompter.say("Welcome to the GitHub Relationship Analyzer!", Tone::Banner)?;

    let Some(username) = ask_username(prompter)? else {
        prompter.say("Goodbye!", Tone::Info)?;
        return Ok(());
    };

    let mut session = Session::new(source, username).with_per_page(options.per_page);
    if options.show_progress {
        let painter = *prompter.painter();
        session = session.with_progress(move |user, kind| {
            let notice = match kind {
                RelationKind::Followers => format!("Fetching followers for {}...", user),
                RelationKind::Following => format!("Fetching users {} is following...", user),
            };
            eprintln!("{}", painter.paint(&notice, Tone::Info));
        });
    }

    loop {
        prompter.line("")?;
        prompter.line("What would you like to do?")?;
        prompter.line("  1. Find users you follow who DON'T follow you back")?;
        prompter.line("  2. Find users who follow you that you DON'T follow back (Fans)")?;
        prompter.line("  3. Exit")?;

        let Some(answer) = prompter.ask("Enter your choice (1-3): ")? else {
            prompter.say("Goodbye!", Tone::Info)?;
            return Ok(());
        };

        match MenuChoice::parse(&answer) {
            Some(MenuChoice::Analyze(category)) => {
                run_choice(prompter, &mut session, category, options)?;
            }
            Some(MenuChoice::Exit) => {
                prompter.say("Goodbye!", Tone::Info)?;
                return Ok(());
            }
            None => {
                prompter.say(
                    "Invalid choice. Please enter a number between 1 and 3.",
                    Tone::Error,
                )?;
            }
        }
    }
}

/// Prompt until a valid username is entered; `None` at end of input
fn ask_username<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Option<Username>> {
    loop {
        let Some(answer) = prompter.ask("Enter your GitHub username: ")? else {
            return Ok(None);
        };

        match Username::new(answer) {
            Ok(username) => return Ok(Some(username)),
            Err(e) => {
                log::debug!("{}", e);
                prompter.say("Invalid GitHub username. Please try again.", Tone::Error)?;
            }
        }
    }
}

fn run_choice<R, W, S>(
    prompter: &mut Prompter<R, W>,
    session: &mut Session<S>,
    category: Category,
    options: &InteractiveOptions,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: RelationSource,
{
    if session.retry_failed() {
        log::info!("Retrying previously failed fetches");
    }

    let users = match session.difference(category) {
        Ok(users) => users,
        Err(e) => {
            prompter.say(&format!("Error: {}", e), Tone::Error)?;
            if let Some(hint) = api_hint(&e) {
                prompter.line(&format!("Hint: {}", hint))?;
            }
            return Ok(());
        }
    };

    let list = UserList::new(session.username(), category, users);
    let painter = *prompter.painter();
    prompter.line("")?;
    prompter.line(&list.render(&painter))?;

    if list.users.is_empty() || !prompter.confirm("Save this list to a file? (y/n): ")? {
        return Ok(());
    }

    let Some(token) = prompter.ask("Enter format (txt, csv, json): ")? else {
        return Ok(());
    };

    let saved = token.parse::<ExportFormat>().and_then(|format| {
        export::save(
            &list.users,
            &options.output_dir,
            session.username(),
            category,
            format,
        )
    });

    match saved {
        Ok(path) => prompter.say(
            &format!("Successfully saved list to {}", path.display()),
            Tone::Success,
        )?,
        Err(e) => prompter.say(&e.to_string(), Tone::Error)?,
    }

    Ok(())
}
