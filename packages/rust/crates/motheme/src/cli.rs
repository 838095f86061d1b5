use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use motheme::FileSelection;

#[derive(Parser)]
#[command(name = "motheme", version)]
#[command(about = "Apply and manage CSS themes for marimo notebooks.")]
pub(crate) struct Cli {
    /// Settings file (default: <config_dir>/motheme/settings.yaml).
    #[arg(long, global = true)]
    pub(crate) conf: Option<PathBuf>,

    /// Debug logging on stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

/// Notebook selection shared by apply / clear / current.
#[derive(Args, Debug)]
pub(crate) struct FileArgs {
    /// Notebook files or directories.
    pub(crate) files: Vec<PathBuf>,

    /// Search directories recursively for marimo notebooks.
    #[arg(short, long)]
    pub(crate) recursive: bool,

    /// Suppress output.
    #[arg(short, long)]
    pub(crate) quiet: bool,

    /// Glob of paths to skip (repeatable).
    #[arg(long = "ignore", value_name = "GLOB")]
    pub(crate) ignore: Vec<String>,
}

impl FileArgs {
    pub(crate) fn selection(&self) -> FileSelection {
        FileSelection {
            files: self.files.clone(),
            recursive: self.recursive,
            ignore: self.ignore.clone(),
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Download themes from the GitHub repository.
    Update,
    /// List available themes.
    Themes,
    /// Apply a theme to notebook files.
    Apply {
        /// Name of the theme to apply.
        theme: String,

        #[command(flatten)]
        files: FileArgs,

        /// Print the diff instead of writing files.
        #[arg(long)]
        dry_run: bool,
    },
    /// Remove the theme from notebook files.
    Clear {
        #[command(flatten)]
        files: FileArgs,

        /// Print the diff instead of writing files.
        #[arg(long)]
        dry_run: bool,
    },
    /// Show the theme currently applied to notebook files.
    Current {
        #[command(flatten)]
        files: FileArgs,
    },
    /// Create a new theme by duplicating an existing one.
    Create {
        /// Theme to copy.
        reference: String,
        /// Name of the new theme.
        name: String,
    },
    /// Delete themes from the store.
    Remove {
        /// Themes to delete.
        #[arg(required = true)]
        themes: Vec<String>,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_args() {
        let cli = Cli::try_parse_from([
            "motheme", "apply", "coffee", "a.py", "nb", "-r", "--ignore", "**/skip/**",
        ])
        .unwrap();
        match cli.command {
            Command::Apply {
                theme,
                files,
                dry_run,
            } => {
                assert_eq!(theme, "coffee");
                assert_eq!(files.files, vec![PathBuf::from("a.py"), PathBuf::from("nb")]);
                assert!(files.recursive);
                assert!(!files.quiet);
                assert_eq!(files.ignore, vec!["**/skip/**"]);
                assert!(!dry_run);
            }
            _ => panic!("expected apply"),
        }
    }

    #[test]
    fn test_clear_without_files_parses() {
        let cli = Cli::try_parse_from(["motheme", "clear", "-q"]).unwrap();
        assert!(matches!(cli.command, Command::Clear { ref files, .. } if files.files.is_empty()));
    }

    #[test]
    fn test_remove_requires_a_theme() {
        assert!(Cli::try_parse_from(["motheme", "remove"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["motheme", "themes", "-v", "--conf", "s.yaml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.conf, Some(PathBuf::from("s.yaml")));
    }
}
