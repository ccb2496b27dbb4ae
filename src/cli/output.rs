//! Output formatting utilities
//!
//! Provides list, JSON and compact output for CLI commands, plus terminal
//! colors for the interactive mode.

use crate::cli::args::OutputFormat;
use crate::domain::{Category, Username};
use crate::error::ApiError;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_output(&mut handle, data, format)
}

/// Format output into any writer
pub fn write_output<W: Write, T: Serialize + TableDisplay>(
    out: &mut W,
    data: &T,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).map_err(io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(out, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Terminal color role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Progress and farewells
    Info,
    /// Completed actions
    Success,
    /// List headings
    Heading,
    /// Failures and invalid input
    Error,
    /// Welcome banner
    Banner,
    /// Prompts
    Prompt,
}

impl Tone {
    const fn ansi(&self) -> &'static str {
        match self {
            Tone::Info => "\x1b[36m",               // Cyan
            Tone::Success => "\x1b[32m",            // Green
            Tone::Heading => "\x1b[1m\x1b[33m",     // Bold Yellow
            Tone::Error => "\x1b[31m",              // Red
            Tone::Banner => "\x1b[1m\x1b[35m",      // Bold Magenta
            Tone::Prompt => "\x1b[1m",              // Bold
        }
    }
}

/// Applies ANSI colors when the terminal supports them
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    /// Detect color support for stdout from the environment
    pub fn detect() -> Self {
        let term = std::env::var("TERM").ok();
        Self::from_env(
            io::stdout().is_terminal(),
            term.as_deref(),
            std::env::var_os("NO_COLOR").is_some(),
        )
    }

    /// Decide color support from terminal state
    ///
    /// Colors need a tty with a non-dumb `TERM` and no `NO_COLOR`.
    pub fn from_env(is_tty: bool, term: Option<&str>, no_color: bool) -> Self {
        let term_ok = term.is_some_and(|term| term != "dumb");
        Self {
            enabled: is_tty && term_ok && !no_color,
        }
    }

    /// A painter that never emits escape codes
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// Wrap text in the tone's color
    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if self.enabled {
            format!("{}{}\x1b[0m", tone.ansi(), text)
        } else {
            text.to_string()
        }
    }
}

/// A difference list for display
#[derive(Debug, Clone, Serialize)]
pub struct UserList {
    pub username: String,
    pub category: Category,
    pub count: usize,
    pub users: Vec<String>,
}

impl UserList {
    /// Wrap a difference result
    pub fn new(username: &Username, category: Category, users: Vec<String>) -> Self {
        Self {
            username: username.to_string(),
            category,
            count: users.len(),
            users,
        }
    }

    /// Render the list, colored by `painter`
    pub fn render(&self, painter: &Painter) -> String {
        if self.users.is_empty() {
            return painter.paint("All good! No users found in this category.", Tone::Success);
        }

        let heading = format!("--- {} ({}) ---", self.category.title(), self.count);
        let mut output = painter.paint(&heading, Tone::Heading);
        output.push('\n');

        for user in &self.users {
            output.push_str(&format!("  - {}\n", user));
        }

        output.push_str(&painter.paint("------------------------", Tone::Heading));
        output
    }
}

impl TableDisplay for UserList {
    fn to_table(&self) -> String {
        self.render(&Painter::plain())
    }

    fn to_compact(&self) -> String {
        format!("{} {}: {}", self.category, self.count, self.users.join(","))
    }
}

/// Extra guidance for API failures users can act on
pub fn api_hint(err: &ApiError) -> Option<&'static str> {
    match err {
        ApiError::NotFound(_) => Some("Check the spelling of the username."),
        e if e.is_rate_limited() => Some(
            "GitHub limits unauthenticated requests to 60 per hour. Wait for the limit to reset and try again.",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(users: &[&str]) -> UserList {
        let name = Username::new("octocat").unwrap();
        UserList::new(
            &name,
            Category::NonFollowers,
            users.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_empty_list_table() {
        assert_eq!(
            list(&[]).to_table(),
            "All good! No users found in this category."
        );
    }

    #[test]
    fn test_list_table() {
        let output = list(&["a", "b"]).to_table();
        assert!(output.starts_with("--- Users Who Don't Follow You Back (2) ---"));
        assert!(output.contains("  - a\n  - b\n"));
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_list_compact() {
        assert_eq!(list(&["a", "b"]).to_compact(), "non_followers 2: a,b");
    }

    #[test]
    fn test_list_json() {
        let mut buf = Vec::new();
        write_output(&mut buf, &list(&["a"]), OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["category"], "non_followers");
        assert_eq!(value["count"], 1);
        assert_eq!(value["users"][0], "a");
    }

    #[test]
    fn test_painter_plain_and_enabled() {
        assert_eq!(Painter::plain().paint("hi", Tone::Error), "hi");

        let painter = Painter { enabled: true };
        let painted = painter.paint("hi", Tone::Error);
        assert!(painted.starts_with("\x1b[31m"));
        assert!(painted.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_painter_needs_terminal() {
        let colored = Painter::from_env(true, Some("xterm-256color"), false);
        assert_ne!(colored.paint("hi", Tone::Info), "hi");

        // Redirected output stays plain
        let piped = Painter::from_env(false, Some("xterm-256color"), false);
        assert_eq!(piped.paint("hi", Tone::Info), "hi");

        assert_eq!(Painter::from_env(true, Some("dumb"), false).paint("hi", Tone::Info), "hi");
        assert_eq!(Painter::from_env(true, None, false).paint("hi", Tone::Info), "hi");
        assert_eq!(Painter::from_env(true, Some("xterm"), true).paint("hi", Tone::Info), "hi");
    }

    #[test]
    fn test_api_hints() {
        assert!(api_hint(&ApiError::NotFound("x".into())).is_some());
        let limited = ApiError::Fetch {
            status: Some(429),
            message: "Too Many Requests".into(),
        };
        assert!(api_hint(&limited).unwrap().contains("60 per hour"));
        assert!(api_hint(&ApiError::fetch("dns")).is_none());
    }
}
