//! One-shot analysis commands
//!
//! Handles the `non-followers` and `fans` subcommands.

use crate::api::{GitHubClient, RelationSource};
use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::cli::output::{print_output, UserList};
use crate::config::Config;
use crate::domain::Category;
use crate::error::{ExportError, Result};
use crate::services::{export, ExportFormat, Session};

use std::path::{Path, PathBuf};

/// Outcome of an analysis
#[derive(Debug)]
pub struct Report {
    /// The difference list
    pub list: UserList,
    /// Result of the save, if one was requested
    ///
    /// A failed save does not discard the list.
    pub saved: Option<std::result::Result<PathBuf, ExportError>>,
}

/// Execute an analysis command
pub fn run_analyze(
    category: Category,
    args: &AnalyzeArgs,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    // Reject a bad format token before spending API requests
    let save_format = args
        .save
        .as_deref()
        .map(str::parse::<ExportFormat>)
        .transpose()?;

    let client = GitHubClient::new(&config.api)?;
    let mut session =
        Session::new(client, args.username.clone()).with_per_page(config.api.per_page);

    let dir = config.output.directory();
    let report = analyze(&mut session, category, save_format, &dir)?;

    print_output(&report.list, format)?;

    match report.saved {
        Some(Ok(path)) => {
            eprintln!("Saved list to {}", path.display());
            Ok(())
        }
        Some(Err(e)) => Err(e.into()),
        None => Ok(()),
    }
}

/// Compute a difference and optionally save it
///
/// Fetch failures are returned as errors. A save failure is carried in
/// [`Report::saved`] next to the computed list.
pub fn analyze<S: RelationSource>(
    session: &mut Session<S>,
    category: Category,
    save_format: Option<ExportFormat>,
    dir: &Path,
) -> Result<Report> {
    let users = session.difference(category)?;

    let saved = save_format
        .map(|format| export::save(&users, dir, session.username(), category, format));

    Ok(Report {
        list: UserList::new(session.username(), category, users),
        saved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RelationKind, Username};
    use crate::error::{ApiError, AppError};
    use crate::mock::MockSource;

    fn session_for(source: MockSource) -> Session<MockSource> {
        Session::new(source, Username::new("octocat").unwrap())
    }

    fn scripted() -> MockSource {
        MockSource::new()
            .with_list(RelationKind::Following, &["a", "b", "c"])
            .with_list(RelationKind::Followers, &["b", "c", "d"])
    }

    #[test]
    fn test_analyze_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_for(scripted());

        let report = analyze(&mut session, Category::Fans, None, dir.path()).unwrap();

        assert_eq!(report.list.users, ["d"]);
        assert_eq!(report.list.count, 1);
        assert!(report.saved.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_analyze_and_save_csv() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_for(scripted());

        let report = analyze(
            &mut session,
            Category::NonFollowers,
            Some(ExportFormat::Csv),
            dir.path(),
        )
        .unwrap();

        let path = report.saved.unwrap().unwrap();
        assert_eq!(path, dir.path().join("octocat_non_followers.csv"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "username\na\n");
    }

    #[test]
    fn test_analyze_keeps_list_when_save_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let mut session = session_for(scripted());

        let report = analyze(
            &mut session,
            Category::NonFollowers,
            Some(ExportFormat::Txt),
            &missing,
        )
        .unwrap();

        assert_eq!(report.list.users, ["a"]);
        assert!(matches!(report.saved, Some(Err(ExportError::Write { .. }))));
        assert!(!missing.exists());
    }

    #[test]
    fn test_analyze_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = MockSource::new()
            .with_error(RelationKind::Following, ApiError::NotFound("octocat".into()));
        let mut session = session_for(source);

        let err = analyze(&mut session, Category::Fans, Some(ExportFormat::Json), dir.path())
            .unwrap_err();

        assert!(matches!(err, AppError::Api(ApiError::NotFound(_))));
        // Nothing is written for a failed fetch
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
