//! Result list export
//!
//! Writes difference lists to flat files.

use crate::domain::{Category, Username};
use crate::error::ExportError;

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// On-disk format for a saved list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// One username per line
    Txt,
    /// `username` header, one row per username
    Csv,
    /// Pretty-printed JSON array of strings
    Json,
}

impl ExportFormat {
    /// All supported formats
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Txt, ExportFormat::Csv, ExportFormat::Json];

    /// File extension, also the format token users type
    pub const fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Render a list in this format
    pub fn render(&self, users: &[String]) -> Result<String, ExportError> {
        match self {
            ExportFormat::Txt => Ok(users.iter().map(|u| format!("{}\n", u)).collect()),
            ExportFormat::Csv => {
                let mut out = String::from("username\n");
                for user in users {
                    out.push_str(&csv_field(user));
                    out.push('\n');
                }
                Ok(out)
            }
            ExportFormat::Json => {
                let mut buf = Vec::new();
                let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
                let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
                users.serialize(&mut ser)?;
                // serde_json only ever emits UTF-8
                Ok(String::from_utf8_lossy(&buf).into_owned())
            }
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.extension() == token)
            .ok_or_else(|| ExportError::UnsupportedFormat(s.trim().to_string()))
    }
}

/// Quote a CSV field when it contains a delimiter, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// File name for a saved list: `{username}_{category}.{ext}`
pub fn file_name(username: &Username, category: Category, format: ExportFormat) -> String {
    format!("{}_{}.{}", username, category.slug(), format.extension())
}

/// Write a list to `dir`, returning the path written
///
/// # Errors
/// `ExportError::Write` if the file cannot be written
pub fn save(
    users: &[String],
    dir: &Path,
    username: &Username,
    category: Category,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(file_name(username, category, format));
    let contents = format.render(users)?;

    std::fs::write(&path, contents).map_err(|source| ExportError::Write {
        path: path.display().to_string(),
        source,
    })?;

    log::info!("Saved {} {} to {}", users.len(), category, path.display());
    Ok(path)
}
