//! Command runners behind the CLI subcommands.
//!
//! Each runner takes the loaded [`Settings`] and a [`Reporter`] so the same
//! code path serves the binary and the integration tests.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use motheme_edit::{
    BatchOperation, BatchReport, EditConfig, EditOutcome, FileStatus, ThemeLookup, process_files,
};
use motheme_io::{IgnoreList, expand_files, resolve_themes_dir};
use motheme_themes::{ThemeDownloader, ThemeError, ThemeStore};

use crate::reporter::Reporter;
use crate::settings::Settings;

/// Files / directories named on the command line.
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    /// Files and directories as given.
    pub files: Vec<PathBuf>,
    /// Walk directories for notebooks.
    pub recursive: bool,
    /// Extra ignore globs, added to the ones from settings.
    pub ignore: Vec<String>,
}

impl FileSelection {
    /// Expand into the marimo notebooks to process.
    ///
    /// # Errors
    /// Fails when an ignore glob is invalid.
    pub fn expand(&self, settings: &Settings) -> Result<Vec<PathBuf>> {
        let patterns: Vec<&str> = settings
            .ignore
            .iter()
            .chain(&self.ignore)
            .map(String::as_str)
            .collect();
        let ignore = IgnoreList::new(&patterns).context("invalid ignore pattern")?;
        let files = expand_files(&self.files, self.recursive, &ignore);
        tracing::debug!(
            inputs = self.files.len(),
            notebooks = files.len(),
            recursive = self.recursive,
            "expanded file selection"
        );
        Ok(files)
    }
}

/// Open the theme store the settings point at.
///
/// # Errors
/// Fails when the directory cannot be resolved or created.
pub fn open_store(settings: &Settings) -> Result<ThemeStore> {
    let dir = resolve_themes_dir(settings.themes_dir.as_deref())
        .context("cannot locate the themes directory")?;
    ThemeStore::open(&dir).with_context(|| format!("cannot open themes directory {}", dir.display()))
}

fn check_files_provided<W: Write>(
    action: &str,
    selection: &FileSelection,
    reporter: &mut Reporter<W>,
) -> bool {
    if selection.files.is_empty() {
        reporter.always(format!(
            "Error: Please specify at least one file or directory to {action}."
        ));
        return false;
    }
    true
}

/// Resolve a theme, printing the available ones when it is missing.
fn resolve_theme<W: Write>(
    store: &ThemeStore,
    name: &str,
    reporter: &mut Reporter<W>,
) -> Result<Option<PathBuf>> {
    match store.resolve(name) {
        Ok(path) => Ok(Some(path)),
        Err(ThemeError::NotFound {
            path, available, ..
        }) => {
            reporter.say(format!("Error: Theme file {} does not exist.", path.display()));
            reporter.say("Available themes:");
            for theme in available {
                reporter.say(format!("- {theme}"));
            }
            Ok(None)
        }
        Err(error) => Err(error.into()),
    }
}

fn show_diff<W: Write>(reporter: &mut Reporter<W>, diff: &str) {
    if !diff.is_empty() {
        reporter.say(diff.trim_end());
    }
}

fn edit_config(dry_run: bool) -> EditConfig {
    EditConfig {
        preview_only: dry_run,
        ..EditConfig::default()
    }
}

/// `motheme apply THEME FILES...`
///
/// # Errors
/// Store or ignore-pattern failures; per-file errors are reported and skipped.
pub fn run_apply<W: Write>(
    settings: &Settings,
    theme: &str,
    selection: &FileSelection,
    dry_run: bool,
    reporter: &mut Reporter<W>,
) -> Result<BatchReport> {
    if !check_files_provided("apply the theme", selection, reporter) {
        return Ok(BatchReport::new());
    }

    let store = open_store(settings)?;
    let Some(css_path) = resolve_theme(&store, theme, reporter)? else {
        return Ok(BatchReport::new());
    };

    let files = selection.expand(settings)?;
    let operation = BatchOperation::Apply {
        css_path: css_path.display().to_string(),
    };
    let report = process_files(&settings.editor(), &files, &operation, edit_config(dry_run));

    let mut themed = 0usize;
    for (path, status) in &report.entries {
        let file = path.display();
        match status {
            FileStatus::Edited(result) => match result.outcome {
                EditOutcome::Applied | EditOutcome::Unchanged => {
                    themed += 1;
                    if dry_run {
                        show_diff(reporter, &result.diff);
                        reporter.say(format!("Would apply {theme} theme to {file}"));
                    } else {
                        reporter.say(format!("Applied {theme} theme to {file}"));
                    }
                }
                _ => reporter.say(format!("Failed to apply {theme} theme to {file}")),
            },
            FileStatus::Failed(error) => reporter.say(format!("Error processing {file}: {error}")),
            FileStatus::Inspected(_) => {}
        }
    }

    if themed > 0 {
        reporter.say(format!(
            "\nSuccessfully applied {theme} theme to {themed} file(s)."
        ));
    } else {
        reporter.say("No files were modified.");
    }
    Ok(report)
}

/// `motheme clear FILES...`
///
/// # Errors
/// Ignore-pattern failures; per-file errors are reported and skipped.
pub fn run_clear<W: Write>(
    settings: &Settings,
    selection: &FileSelection,
    dry_run: bool,
    reporter: &mut Reporter<W>,
) -> Result<BatchReport> {
    if !check_files_provided("clear themes from", selection, reporter) {
        return Ok(BatchReport::new());
    }

    let files = selection.expand(settings)?;
    let report = process_files(
        &settings.editor(),
        &files,
        &BatchOperation::Clear,
        edit_config(dry_run),
    );

    for (path, status) in &report.entries {
        let file = path.display();
        match status {
            FileStatus::Edited(result) if result.outcome == EditOutcome::Cleared => {
                if dry_run {
                    show_diff(reporter, &result.diff);
                    reporter.say(format!("Would clear theme from {file}"));
                } else {
                    reporter.say(format!("Cleared theme from {file}"));
                }
            }
            FileStatus::Edited(_) => reporter.say(format!("No theme found in {file}")),
            FileStatus::Failed(error) => reporter.say(format!("Error processing {file}: {error}")),
            FileStatus::Inspected(_) => {}
        }
    }

    if report.files_changed() > 0 {
        reporter.say(format!(
            "\nSuccessfully cleared theme from {} file(s).",
            report.files_changed()
        ));
    } else {
        reporter.say("No files were modified.");
    }
    Ok(report)
}

/// `motheme current FILES...`
///
/// # Errors
/// Ignore-pattern failures; per-file errors are reported and skipped.
pub fn run_current<W: Write>(
    settings: &Settings,
    selection: &FileSelection,
    reporter: &mut Reporter<W>,
) -> Result<BatchReport> {
    if !check_files_provided("check themes for", selection, reporter) {
        return Ok(BatchReport::new());
    }

    let files = selection.expand(settings)?;
    let report = process_files(
        &settings.editor(),
        &files,
        &BatchOperation::Inspect,
        EditConfig::default(),
    );

    let mut found_themes = false;
    for (path, status) in &report.entries {
        let file = path.display();
        match status {
            FileStatus::Inspected(ThemeLookup::Theme(theme)) => {
                found_themes = true;
                reporter.say(format!("{file}: {theme}"));
            }
            FileStatus::Inspected(ThemeLookup::NoTheme) => {
                reporter.say(format!("{file}: No theme applied"));
            }
            FileStatus::Inspected(ThemeLookup::BlockNotFound) => {
                reporter.say(format!("No marimo.App found in {file}"));
            }
            FileStatus::Failed(error) => reporter.say(format!("Error processing {file}: {error}")),
            FileStatus::Edited(_) => {}
        }
    }

    if !found_themes {
        reporter.say("\nNo themes found in any files.");
    }
    Ok(report)
}

/// `motheme themes`
///
/// # Errors
/// Fails when the store cannot be opened or read.
pub fn run_themes<W: Write>(settings: &Settings, reporter: &mut Reporter<W>) -> Result<()> {
    let store = open_store(settings)?;
    let themes = store.list()?;
    if themes.is_empty() {
        reporter.say("No themes downloaded. Run 'motheme update' to download themes.");
        return Ok(());
    }
    reporter.say("Available Themes:");
    for theme in themes {
        reporter.say(format!("- {theme}"));
    }
    Ok(())
}

/// `motheme update`
///
/// A failed listing is reported, not returned, so the exit status stays 0.
///
/// # Errors
/// Fails when the store or HTTP client cannot be set up.
pub async fn run_update<W: Write>(settings: &Settings, reporter: &mut Reporter<W>) -> Result<()> {
    let store = open_store(settings)?;
    let downloader = ThemeDownloader::new(settings.repo_url(), settings.request_timeout())?;
    tracing::info!(api = downloader.api_base(), dir = %store.dir().display(), "updating themes");

    match downloader.download_all(&store).await {
        Ok(report) => {
            for path in &report.downloaded {
                reporter.say(format!("Downloaded: {}", path.display()));
            }
            for (theme, error) in &report.failed {
                reporter.say(format!("Failed to download {theme}: {error}"));
            }
        }
        Err(error) => reporter.say(error),
    }
    Ok(())
}

/// `motheme create REF NAME`
///
/// # Errors
/// Filesystem failures other than a missing reference or a taken name.
pub fn run_create<W: Write>(
    settings: &Settings,
    reference: &str,
    name: &str,
    reporter: &mut Reporter<W>,
) -> Result<Option<PathBuf>> {
    let store = open_store(settings)?;
    if resolve_theme(&store, reference, reporter)?.is_none() {
        return Ok(None);
    }
    match store.create(reference, name) {
        Ok(path) => {
            reporter.say(format!("Created new theme: {}", path.display()));
            Ok(Some(path))
        }
        Err(error @ ThemeError::AlreadyExists(_)) => {
            reporter.say(format!("Error: {error}"));
            Ok(None)
        }
        Err(error) => Err(error.into()),
    }
}

/// `motheme remove THEMES...`
///
/// Asks for confirmation on `input` unless `assume_yes`.
///
/// # Errors
/// Fails when the answer cannot be read or a file cannot be deleted.
pub fn run_remove<R: BufRead, W: Write>(
    settings: &Settings,
    themes: &[String],
    assume_yes: bool,
    input: &mut R,
    reporter: &mut Reporter<W>,
) -> Result<Vec<String>> {
    let store = open_store(settings)?;
    let plan = store.plan_removal(themes);

    if !plan.missing.is_empty() {
        reporter.say("Following themes do not exist:");
        for theme in &plan.missing {
            reporter.say(format!("- {theme}"));
        }
    }
    if plan.is_empty() {
        return Ok(Vec::new());
    }

    reporter.say(format!("Will remove themes: {}", plan.existing.join(", ")));
    if !assume_yes {
        reporter.prompt("Continue? (y/n): ");
        let mut answer = String::new();
        input
            .read_line(&mut answer)
            .context("failed to read confirmation")?;
        if answer.trim().to_lowercase() != "y" {
            reporter.say("Operation cancelled");
            return Ok(Vec::new());
        }
    }

    let removed = store.remove(&plan)?;
    for theme in &removed {
        reporter.say(format!("Removed theme: {theme}"));
    }
    Ok(removed)
}
