//! Directory of downloaded / user-created theme stylesheets.

use std::fs;
use std::path::{Path, PathBuf};

use motheme_io::ensure_dir;

use crate::error::ThemeError;

/// File extension of a theme.
pub const THEME_EXTENSION: &str = "css";

/// Themes split by whether they exist, ready for confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalPlan {
    /// Themes that will be deleted.
    pub existing: Vec<String>,
    /// Requested themes that have no file.
    pub missing: Vec<String>,
}

impl RemovalPlan {
    /// True when nothing would be removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.existing.is_empty()
    }
}

/// A directory of `<name>.css` theme files.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    dir: PathBuf,
}

impl ThemeStore {
    /// Open the store at `dir`, creating the directory when missing.
    ///
    /// # Errors
    /// `ThemeError::Store` when the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, ThemeError> {
        let dir = dir.into();
        ensure_dir(&dir)?;
        Ok(Self { dir })
    }

    /// Store directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a theme would live at, whether or not it exists.
    #[must_use]
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{THEME_EXTENSION}"))
    }

    /// True when `<name>.css` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.path_of(name).is_file()
    }

    /// Names of all themes, sorted.
    ///
    /// # Errors
    /// `ThemeError::Io` when the directory cannot be read.
    pub fn list(&self) -> Result<Vec<String>, ThemeError> {
        let mut names: Vec<String> = fs::read_dir(&self.dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| path.extension().is_some_and(|ext| ext == THEME_EXTENSION))
            .filter_map(|path| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .collect();
        names.sort();
        Ok(names)
    }

    /// Path of an existing theme.
    ///
    /// # Errors
    /// `ThemeError::NotFound` listing the available themes.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, ThemeError> {
        let path = self.path_of(name);
        if path.is_file() {
            return Ok(path);
        }
        Err(ThemeError::NotFound {
            name: name.to_string(),
            path,
            available: self.list().unwrap_or_default(),
        })
    }

    /// Write a theme's stylesheet, replacing any previous version.
    ///
    /// # Errors
    /// `ThemeError::Io` on write failure.
    pub fn save(&self, name: &str, css: &str) -> Result<PathBuf, ThemeError> {
        let path = self.path_of(name);
        fs::write(&path, css)?;
        Ok(path)
    }

    /// Create `new_name` as a copy of `reference`.
    ///
    /// # Errors
    /// `NotFound` for a missing reference, `AlreadyExists` when `new_name`
    /// is taken.
    pub fn create(&self, reference: &str, new_name: &str) -> Result<PathBuf, ThemeError> {
        let source = self.resolve(reference)?;
        let target = self.path_of(new_name);
        if target.exists() {
            return Err(ThemeError::AlreadyExists(new_name.to_string()));
        }
        fs::copy(&source, &target)?;
        tracing::info!(reference, theme = new_name, "created theme");
        Ok(target)
    }

    /// Split `names` into existing and missing themes.
    #[must_use]
    pub fn plan_removal<S: AsRef<str>>(&self, names: &[S]) -> RemovalPlan {
        let (existing, missing) = names
            .iter()
            .map(|name| name.as_ref().to_string())
            .partition(|name| self.contains(name));
        RemovalPlan { existing, missing }
    }

    /// Delete every theme in `plan.existing`, returning the ones removed.
    ///
    /// # Errors
    /// `ThemeError::Io` on the first file that cannot be deleted.
    pub fn remove(&self, plan: &RemovalPlan) -> Result<Vec<String>, ThemeError> {
        let mut removed = Vec::with_capacity(plan.existing.len());
        for name in &plan.existing {
            fs::remove_file(self.path_of(name))?;
            tracing::info!(theme = %name, "removed theme");
            removed.push(name.clone());
        }
        Ok(removed)
    }
}
