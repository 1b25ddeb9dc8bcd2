//! Settings lookup.
//!
//! Distribution settings live in bash files (`GoboPath`, `Compile.conf`, …)
//! that are layered user-first: the user's settings directory, then the
//! system settings directory, then the bare file name. A variable set in
//! the environment always wins over the files.
//!
//! # Example
//!
//! ```no_run
//! use alien::settings::SettingsLookup;
//!
//! let mut settings = SettingsLookup::new();
//! let programs = settings.variable("goboPrograms", "GoboPath").unwrap();
//! let options = settings.compile_options().unwrap();
//! println!("{} {:?}", programs, options.recipe_dirs);
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use tracing::debug;

use crate::error::Result;
use crate::shell::{bash_output, quote};

/// The file defining the distribution's directory layout.
pub const GOBO_PATH: &str = "GoboPath";

const SETTINGS_FALLBACK: &str = "/System/Settings";

/// Recipe locations used by the compile tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Local recipe directories, `~` expanded.
    pub recipe_dirs: Vec<PathBuf>,
    /// Remote recipe store URLs.
    pub recipe_stores: Vec<String>,
}

/// Resolves settings variables from the environment and settings files.
///
/// Values found in files are remembered in the lookup itself, so a file is
/// sourced at most once per variable. Arrays are remembered item by item. The process environment is
/// never modified.
#[derive(Debug, Clone)]
pub struct SettingsLookup {
    overlay: HashMap<String, String>,
    lists: HashMap<String, Vec<String>>,
    use_process_env: bool,
}

impl Default for SettingsLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsLookup {
    /// Create a lookup that consults the process environment first.
    pub fn new() -> Self {
        Self {
            overlay: HashMap::new(),
            lists: HashMap::new(),
            use_process_env: true,
        }
    }

    /// Create a lookup that ignores the process environment.
    ///
    /// Only values given through [`set`](Self::set) or read from files are
    /// visible.
    pub fn isolated() -> Self {
        Self {
            overlay: HashMap::new(),
            lists: HashMap::new(),
            use_process_env: false,
        }
    }

    /// Provide a value as if it were set in the environment.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.lists.remove(&name);
        self.overlay.insert(name, value.into());
    }

    fn from_env(&self, name: &str) -> Option<String> {
        if let Some(value) = self.overlay.get(name) {
            return Some(value.clone());
        }
        if self.use_process_env {
            std::env::var(name).ok()
        } else {
            None
        }
    }

    /// Settings files to try for `file`, most specific first.
    pub fn candidate_files(&mut self, file: &str) -> Result<Vec<PathBuf>> {
        if file == GOBO_PATH {
            return Ok(vec![PathBuf::from(file)]);
        }
        let user_settings = self.variable("goboUserSettings", GOBO_PATH)?;
        let settings = self.variable("goboSettings", GOBO_PATH)?;
        Ok(vec![
            Path::new(&user_settings).join(file),
            Path::new(&settings).join(file),
            PathBuf::from(file),
        ])
    }

    /// Look up a scalar variable.
    ///
    /// Returns an empty string when no source defines it.
    pub fn variable(&mut self, name: &str, file: &str) -> Result<String> {
        validate_name(name)?;
        if let Some(value) = self.from_env(name) {
            return Ok(value);
        }

        let mut value = String::new();
        for candidate in self.candidate_files(file)? {
            value = source_scalar(&candidate, name)?;
            if !value.is_empty() {
                debug!("{} found in {}", name, candidate.display());
                break;
            }
        }
        self.overlay.insert(name.to_string(), value.clone());
        Ok(value)
    }

    /// Look up a bash array variable.
    ///
    /// An environment value is split on whitespace.
    pub fn list(&mut self, name: &str, file: &str) -> Result<Vec<String>> {
        validate_name(name)?;
        if let Some(items) = self.lists.get(name) {
            return Ok(items.clone());
        }
        if let Some(value) = self.from_env(name) {
            return Ok(value.split_whitespace().map(str::to_string).collect());
        }

        let candidates = self.candidate_files(file)?;
        let items = first_array(&candidates, name)?;
        self.lists.insert(name.to_string(), items.clone());
        Ok(items)
    }

    /// Read the first non-empty settings file as a list of entries.
    ///
    /// `#` comments are stripped and blank lines dropped.
    pub fn file_lines(&mut self, file: &str) -> Result<Vec<String>> {
        for candidate in self.candidate_files(file)? {
            let Ok(content) = std::fs::read_to_string(&candidate) else {
                continue;
            };
            if content.trim().is_empty() {
                continue;
            }
            return Ok(content
                .lines()
                .map(|line| line.split('#').next().unwrap_or("").trim())
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect());
        }
        Ok(Vec::new())
    }

    /// Recipe directories and stores for the compile tooling.
    pub fn compile_options(&mut self) -> Result<CompileOptions> {
        let user_settings = self.variable("goboUserSettings", GOBO_PATH)?;
        let settings = self.variable("goboSettings", GOBO_PATH)?;
        let programs = self.variable("goboPrograms", GOBO_PATH)?;

        let conf = "Compile/Compile.conf";
        let files = [
            Path::new(&user_settings).join(conf),
            Path::new(&settings).join(conf),
            Path::new(&programs)
                .join("Compile/Current/Resources/Defaults/Settings")
                .join(conf),
            Path::new(SETTINGS_FALLBACK).join(conf),
        ];

        let recipe_dirs = match self.from_env("compileRecipeDirs") {
            Some(value) => value.split_whitespace().map(str::to_string).collect(),
            None => first_array(&files, "compileRecipeDirs")?,
        };
        let recipe_stores = match self.from_env("getRecipeStores") {
            Some(value) => value
                .trim_matches('\n')
                .split('\n')
                .map(str::to_string)
                .collect(),
            None => first_array(&files, "getRecipeStores")?,
        };

        Ok(CompileOptions {
            recipe_dirs: recipe_dirs.iter().map(|d| expand_home(d)).collect(),
            recipe_stores,
        })
    }
}

fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(anyhow!("invalid settings variable name '{}'", name).into())
    }
}

fn source_scalar(file: &Path, name: &str) -> Result<String> {
    let script = format!(
        ". {} 2> /dev/null; echo -n \"${}\"",
        quote(&file.to_string_lossy()),
        name
    );
    bash_output(&script)
}

fn source_array(file: &Path, name: &str) -> Result<Vec<String>> {
    let script = format!(
        ". {} 2> /dev/null; for i in \"${{{}[@]}}\"; do echo \"$i\"; done",
        quote(&file.to_string_lossy()),
        name
    );
    let output = bash_output(&script)?;
    Ok(output
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn first_array(files: &[PathBuf], name: &str) -> Result<Vec<String>> {
    for file in files {
        let items = source_array(file, name)?;
        if !items.is_empty() {
            debug!("{} found in {}", name, file.display());
            return Ok(items);
        }
    }
    Ok(Vec::new())
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from(path));
    }
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn layered(temp: &TempDir) -> SettingsLookup {
        let user = temp.path().join("user");
        let system = temp.path().join("system");
        fs::create_dir_all(&user).unwrap();
        fs::create_dir_all(&system).unwrap();

        let mut lookup = SettingsLookup::isolated();
        lookup.set("goboUserSettings", user.to_string_lossy());
        lookup.set("goboSettings", system.to_string_lossy());
        lookup
    }

    #[test]
    fn overlay_wins_over_files() {
        let temp = TempDir::new().unwrap();
        let mut lookup = layered(&temp);
        fs::write(temp.path().join("system/Alien.conf"), "helperPrefix=Gobo-\n").unwrap();
        lookup.set("helperPrefix", "Env-");
        assert_eq!(lookup.variable("helperPrefix", "Alien.conf").unwrap(), "Env-");
    }

    #[test]
    fn user_settings_shadow_system_settings() {
        let temp = TempDir::new().unwrap();
        let mut lookup = layered(&temp);
        fs::write(temp.path().join("user/Alien.conf"), "helperPrefix=User-\n").unwrap();
        fs::write(temp.path().join("system/Alien.conf"), "helperPrefix=System-\n").unwrap();
        assert_eq!(
            lookup.variable("helperPrefix", "Alien.conf").unwrap(),
            "User-"
        );
    }

    #[test]
    fn falls_through_to_system_settings() {
        let temp = TempDir::new().unwrap();
        let mut lookup = layered(&temp);
        fs::write(temp.path().join("system/Alien.conf"), "helperPrefix=System-\n").unwrap();
        assert_eq!(
            lookup.variable("helperPrefix", "Alien.conf").unwrap(),
            "System-"
        );
    }

    #[test]
    fn found_values_are_remembered() {
        let temp = TempDir::new().unwrap();
        let mut lookup = layered(&temp);
        let conf = temp.path().join("system/Alien.conf");
        fs::write(&conf, "helperPrefix=First-\n").unwrap();
        assert_eq!(lookup.variable("helperPrefix", "Alien.conf").unwrap(), "First-");

        fs::write(&conf, "helperPrefix=Second-\n").unwrap();
        assert_eq!(lookup.variable("helperPrefix", "Alien.conf").unwrap(), "First-");
    }

    #[test]
    fn undefined_variable_is_empty() {
        let temp = TempDir::new().unwrap();
        let mut lookup = layered(&temp);
        assert_eq!(lookup.variable("nothingHere", "Alien.conf").unwrap(), "");
    }

    #[test]
    fn reads_bash_arrays() {
        let temp = TempDir::new().unwrap();
        let mut lookup = layered(&temp);
        fs::write(
            temp.path().join("system/Alien.conf"),
            "managers=(CPAN PIP \"Ruby Gems\")\n",
        )
        .unwrap();
        assert_eq!(
            lookup.list("managers", "Alien.conf").unwrap(),
            vec!["CPAN", "PIP", "Ruby Gems"]
        );
    }

    #[test]
    fn remembered_arrays_keep_items_with_spaces() {
        let temp = TempDir::new().unwrap();
        let mut lookup = layered(&temp);
        let conf = temp.path().join("system/Alien.conf");
        fs::write(&conf, "managers=(CPAN \"Ruby Gems\")\n").unwrap();

        let first = lookup.list("managers", "Alien.conf").unwrap();
        fs::write(&conf, "managers=(PIP)\n").unwrap();
        let second = lookup.list("managers", "Alien.conf").unwrap();

        assert_eq!(first, vec!["CPAN", "Ruby Gems"]);
        assert_eq!(second, first);
    }

    #[test]
    fn set_replaces_remembered_array() {
        let temp = TempDir::new().unwrap();
        let mut lookup = layered(&temp);
        fs::write(
            temp.path().join("system/Alien.conf"),
            "managers=(CPAN \"Ruby Gems\")\n",
        )
        .unwrap();
        lookup.list("managers", "Alien.conf").unwrap();

        lookup.set("managers", "PIP LuaRocks");
        assert_eq!(
            lookup.list("managers", "Alien.conf").unwrap(),
            vec!["PIP", "LuaRocks"]
        );
    }

    #[test]
    fn rejects_unsafe_variable_names() {
        let mut lookup = SettingsLookup::isolated();
        assert!(lookup.variable("x; rm -rf /", GOBO_PATH).is_err());
        assert!(lookup.list("1abc", GOBO_PATH).is_err());
    }

    #[test]
    fn file_lines_strip_comments() {
        let temp = TempDir::new().unwrap();
        let mut lookup = layered(&temp);
        fs::write(
            temp.path().join("user/Managers"),
            "# Alien managers\nCPAN\n\nPIP   # python\n   \n",
        )
        .unwrap();
        assert_eq!(lookup.file_lines("Managers").unwrap(), vec!["CPAN", "PIP"]);
    }

    #[test]
    fn file_lines_of_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let mut lookup = layered(&temp);
        assert!(lookup.file_lines("Missing").unwrap().is_empty());
    }

    #[test]
    fn compile_options_read_from_user_conf() {
        let temp = TempDir::new().unwrap();
        let mut lookup = layered(&temp);
        lookup.set("goboPrograms", temp.path().join("Programs").to_string_lossy());
        fs::create_dir_all(temp.path().join("user/Compile")).unwrap();
        fs::write(
            temp.path().join("user/Compile/Compile.conf"),
            "compileRecipeDirs=(/Data/Compile/Recipes ~/Recipes)\ngetRecipeStores=(http://recipes.example.org)\n",
        )
        .unwrap();

        let options = lookup.compile_options().unwrap();
        assert_eq!(options.recipe_dirs.len(), 2);
        assert_eq!(
            options.recipe_dirs[0],
            PathBuf::from("/Data/Compile/Recipes")
        );
        assert_eq!(options.recipe_stores, vec!["http://recipes.example.org"]);
    }

    #[test]
    fn compile_options_prefer_overlay() {
        let mut lookup = SettingsLookup::isolated();
        lookup.set("goboUserSettings", "/nonexistent/user");
        lookup.set("goboSettings", "/nonexistent/system");
        lookup.set("goboPrograms", "/nonexistent/Programs");
        lookup.set("compileRecipeDirs", "/a /b");
        lookup.set("getRecipeStores", "http://one\nhttp://two\n");

        let options = lookup.compile_options().unwrap();
        assert_eq!(
            options.recipe_dirs,
            vec![PathBuf::from("/a"), PathBuf::from("/b")]
        );
        assert_eq!(options.recipe_stores, vec!["http://one", "http://two"]);
    }

    #[test]
    fn expand_home_leaves_absolute_paths() {
        assert_eq!(expand_home("/usr/src"), PathBuf::from("/usr/src"));
        assert_eq!(expand_home("relative/~"), PathBuf::from("relative/~"));
    }
}
