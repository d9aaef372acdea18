//! Interactive browse loop.
//!
//! Every iteration rescans the current directory, prints the sorted listing
//! and the menu, then applies one command read from the input. The only
//! state that survives between iterations is [`SessionState`].

use std::fs;
use std::io::{self, BufRead};
use std::path::{Component, Path, PathBuf};

use termcolor::WriteColor;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::output::{ListingFormatter, OutputConfig};
use crate::scan::{ScanConfig, Scanner};
use crate::sort::{SortMode, sort_entries};

/// Behavior switches for the session loop.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// End the session when a scan finds nothing.
    pub exit_on_empty: bool,
    /// Refuse to descend into paths that exist but are not directories.
    pub require_directory: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            exit_on_empty: true,
            require_directory: false,
        }
    }
}

/// The state carried from one loop iteration to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    current_path: PathBuf,
    include_subdirectories: bool,
    sort_mode: SortMode,
}

impl SessionState {
    /// Start at `current_path`, with `.` and `..` folded out of it.
    pub fn new(current_path: PathBuf) -> Self {
        Self {
            current_path: normalize_lexically(&current_path),
            include_subdirectories: false,
            sort_mode: SortMode::None,
        }
    }

    pub fn with_subdirectories(mut self, include: bool) -> Self {
        self.include_subdirectories = include;
        self
    }

    pub fn with_sort_mode(mut self, mode: SortMode) -> Self {
        self.sort_mode = mode;
        self
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn include_subdirectories(&self) -> bool {
        self.include_subdirectories
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn toggle_subdirectories(&mut self) {
        self.include_subdirectories = !self.include_subdirectories;
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
    }

    /// Move to `current_path/name` if it exists.
    ///
    /// `.` and `..` are resolved lexically. With `require_directory` the
    /// target must also be a directory. On error the path is left unchanged.
    pub fn descend(&mut self, name: &str, require_directory: bool) -> Result<&Path> {
        let target = join_lexically(&self.current_path, name);
        let metadata = fs::metadata(&target).map_err(|source| Error::NavigationTargetMissing {
            path: target.clone(),
            source,
        })?;
        if require_directory && !metadata.is_dir() {
            return Err(Error::NotADirectory(target));
        }

        info!(from = %self.current_path.display(), to = %target.display(), "changed directory");
        self.current_path = target;
        Ok(&self.current_path)
    }
}

/// Join `name` onto `base`, folding `.` and `..` and ignoring any root in `name`.
fn join_lexically(base: &Path, name: &str) -> PathBuf {
    let mut path = base.to_path_buf();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::ParentDir => {
                path.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    path
}

/// Fold `.` and `..` out of `path` without touching the filesystem.
///
/// `..` directly under the root stays at the root; leading `..` in a
/// relative path is kept.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

/// A command picked from the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EnterDirectory,
    ToggleSubdirectories,
    Sort(SortMode),
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        let number: u32 = input.trim().parse().ok()?;
        match number {
            1 => Some(MenuChoice::EnterDirectory),
            2 => Some(MenuChoice::ToggleSubdirectories),
            7 => Some(MenuChoice::Exit),
            n => SortMode::from_menu_choice(n).map(MenuChoice::Sort),
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user chose Exit, or the input ran out.
    Exited,
    /// A scan found no entries and the session is configured to stop there.
    Empty,
    /// The current directory could not be listed.
    ScanFailed,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Exited | Outcome::Empty => 0,
            Outcome::ScanFailed => 1,
        }
    }
}

/// Interactive browser reading commands from `R` and writing to `W`.
pub struct Session<R, W> {
    state: SessionState,
    config: SessionConfig,
    scanner: Scanner,
    formatter: ListingFormatter,
    input: R,
    output: W,
}

impl<R: BufRead, W: WriteColor> Session<R, W> {
    pub fn new(state: SessionState, input: R, output: W) -> Self {
        Self {
            state,
            config: SessionConfig::default(),
            scanner: Scanner::new(ScanConfig::default()),
            formatter: ListingFormatter::new(OutputConfig::default()),
            input,
            output,
        }
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_scanner(mut self, scanner: Scanner) -> Self {
        self.scanner = scanner;
        self
    }

    pub fn with_formatter(mut self, formatter: ListingFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user exits, the input ends, or a scan stops the session.
    pub fn run(&mut self) -> Result<Outcome> {
        loop {
            if let Some(outcome) = self.step()? {
                debug!(?outcome, "session finished");
                return Ok(outcome);
            }
        }
    }

    /// One scan, display and command cycle.
    fn step(&mut self) -> Result<Option<Outcome>> {
        writeln!(
            self.output,
            "Current directory: {}",
            self.state.current_path().display()
        )?;

        let scanned = self.scanner.scan(
            self.state.current_path(),
            self.state.include_subdirectories(),
        );
        let mut entries = match scanned {
            Ok(entries) => entries,
            Err(err) => {
                writeln!(self.output, "Error: {}", err)?;
                return Ok(Some(Outcome::ScanFailed));
            }
        };

        if entries.is_empty() {
            writeln!(self.output, "No files found in the specified directory.")?;
            if self.config.exit_on_empty {
                return Ok(Some(Outcome::Empty));
            }
        } else {
            sort_entries(&mut entries, self.state.sort_mode());
            self.formatter.write_listing(&mut self.output, &entries)?;
        }

        self.write_menu()?;
        let Some(line) = self.read_line()? else {
            writeln!(self.output)?;
            return Ok(Some(Outcome::Exited));
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::EnterDirectory) => self.prompt_descend()?,
            Some(MenuChoice::ToggleSubdirectories) => self.state.toggle_subdirectories(),
            Some(MenuChoice::Sort(mode)) => self.state.set_sort_mode(mode),
            Some(MenuChoice::Exit) => return Ok(Some(Outcome::Exited)),
            None => {
                debug!("{}", Error::InvalidMenuChoice(line.trim().to_string()));
                writeln!(self.output, "Invalid choice. Please try again.")?;
            }
        }
        Ok(None)
    }

    fn write_menu(&mut self) -> io::Result<()> {
        let out = &mut self.output;
        writeln!(out)?;
        writeln!(out, "Options:")?;
        writeln!(out, "1. Enter directory")?;
        writeln!(
            out,
            "2. Toggle subdirectories (Currently: {})",
            self.state.include_subdirectories
        )?;
        writeln!(out, "3. Sort by Name")?;
        writeln!(out, "4. Sort by Size")?;
        writeln!(out, "5. Sort by Modification Time")?;
        writeln!(out, "6. Sort by Permissions")?;
        writeln!(out, "7. Exit")?;
        write!(out, "Enter your choice: ")?;
        out.flush()
    }

    fn prompt_descend(&mut self) -> Result<()> {
        write!(self.output, "Enter directory name: ")?;
        self.output.flush()?;
        let name = self.read_line()?.unwrap_or_default();

        if let Err(err) = self
            .state
            .descend(name.trim(), self.config.require_directory)
        {
            writeln!(self.output, "Error: {}", err)?;
        }
        Ok(())
    }

    /// Read one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
