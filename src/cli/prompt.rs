//! Line-oriented prompting
//!
//! Generic over reader and writer so the interactive flow runs against
//! in-memory buffers in tests.

use crate::cli::output::{Painter, Tone};
use std::io::{self, BufRead, Write};

/// Reads answers from `input`, writes prompts and messages to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
    painter: Painter,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter
    pub fn new(input: R, output: W, painter: Painter) -> Self {
        Self {
            input,
            output,
            painter,
        }
    }

    /// The painter used for messages
    pub fn painter(&self) -> &Painter {
        &self.painter
    }

    /// Ask a question and read one trimmed line
    ///
    /// Returns `None` at end of input.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", self.painter.paint(question, Tone::Prompt))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Ask a yes/no question; anything but `y`/`yes` is no
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        Ok(self
            .ask(question)?
            .is_some_and(|answer| matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")))
    }

    /// Print a line in the given tone
    pub fn say(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        writeln!(self.output, "{}", self.painter.paint(text, tone))
    }

    /// Print a line without color
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            Painter::plain(),
        )
    }

    #[test]
    fn test_ask_trims_answer() {
        let mut p = prompter("  octocat \n");
        assert_eq!(p.ask("Name: ").unwrap().as_deref(), Some("octocat"));
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "Name: ");
    }

    #[test]
    fn test_ask_at_eof() {
        let mut p = prompter("");
        assert_eq!(p.ask("Name: ").unwrap(), None);
    }

    #[test]
    fn test_confirm() {
        let mut p = prompter("Y\nyes\nn\n\n");
        assert!(p.confirm("? ").unwrap());
        assert!(p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
    }
}
