//! CLI entry point for grove

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use grove::logging::init_logging;
use grove::{
    ListingFormatter, OutputConfig, ScanConfig, Scanner, Session, SessionConfig, SessionState,
    SortMode, print_json, sort_entries,
};
use termcolor::{ColorChoice, StandardStream};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "grove")]
#[command(about = "Browse a directory interactively, sorted the way you want")]
#[command(version)]
struct Args {
    /// Directory to start in (default: current directory)
    path: Option<PathBuf>,

    /// Start with subdirectories included in the listing
    #[arg(short, long)]
    recursive: bool,

    /// Initial sort order
    #[arg(short, long, value_name = "KEY", default_value = "none")]
    sort: SortMode,

    /// Number of scan worker threads
    /// (0 = auto-detect, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,

    /// Descend into symbolic links to directories (cycles are detected)
    #[arg(long = "follow-links")]
    follow_links: bool,

    /// Only allow entering paths that are directories
    #[arg(long = "require-dir")]
    require_dir: bool,

    /// Keep browsing when a directory turns out to be empty instead of exiting
    #[arg(long = "keep-going-on-empty")]
    keep_going_on_empty: bool,

    /// Print the listing once and exit instead of starting the menu
    #[arg(long = "list")]
    list: bool,

    /// Print the listing once as JSON (implies --list)
    #[arg(long = "json")]
    json: bool,

    /// Show sizes in human-readable units
    #[arg(short = 'H', long = "human")]
    human: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    init_logging();
    let args = Args::parse();

    let start = match args.path.clone() {
        Some(path) if path.is_absolute() => path,
        Some(path) => current_dir().join(path),
        None => current_dir(),
    };

    let scanner = Scanner::new(ScanConfig {
        jobs: args.jobs,
        follow_links: args.follow_links,
    });
    let use_color = should_use_color(args.color);
    let formatter = ListingFormatter::new(OutputConfig {
        use_color,
        human_sizes: args.human,
    });
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let code = if args.list || args.json {
        list_once(&args, &start, &scanner, &formatter, color_choice)
    } else {
        let state = SessionState::new(start)
            .with_subdirectories(args.recursive)
            .with_sort_mode(args.sort);
        let config = SessionConfig {
            exit_on_empty: !args.keep_going_on_empty,
            require_directory: args.require_dir,
        };
        let stdin = io::stdin();
        let mut session = Session::new(state, stdin.lock(), StandardStream::stdout(color_choice))
            .with_config(config)
            .with_scanner(scanner)
            .with_formatter(formatter);

        match session.run() {
            Ok(outcome) => outcome.exit_code(),
            Err(e) => {
                eprintln!("grove: {}", e);
                1
            }
        }
    };

    process::exit(code);
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|e| {
        eprintln!("grove: cannot determine current directory: {}", e);
        process::exit(1);
    })
}

/// Scan, sort and print once. Returns the process exit code.
fn list_once(
    args: &Args,
    start: &Path,
    scanner: &Scanner,
    formatter: &ListingFormatter,
    color_choice: ColorChoice,
) -> i32 {
    let mut entries = match scanner.scan(start, args.recursive) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("grove: {}", e);
            return 1;
        }
    };
    sort_entries(&mut entries, args.sort);

    let result = if args.json {
        print_json(&entries)
    } else {
        let mut stdout = StandardStream::stdout(color_choice);
        formatter.write_listing(&mut stdout, &entries)
    };

    if let Err(e) = result {
        eprintln!("grove: error writing output: {}", e);
        return 1;
    }
    0
}
