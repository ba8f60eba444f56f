// errtag-cli: shared utilities for CLI tools.

pub mod input;

use std::path::PathBuf;
use std::process;

use errtag_hi::Resources;

/// Environment variable naming a resource directory.
pub const RESOURCE_DIR_ENV: &str = "ERRTAG_RESOURCE_DIR";

/// Resource directory name below the per-user and system data roots.
const RESOURCE_SUBDIR: &str = "hi";

/// Search for a resource directory and load the word list and POS map.
///
/// Search order:
/// 1. `resource_dir` argument (if provided)
/// 2. `ERRTAG_RESOURCE_DIR` environment variable
/// 3. `~/.errtag/hi`
/// 4. `/usr/share/errtag/hi`
/// 5. Current working directory
pub fn load_resources(resource_dir: Option<&str>) -> Result<Resources, String> {
    let search_paths = build_search_paths(resource_dir);

    for dir in &search_paths {
        if Resources::is_resource_dir(dir) {
            return Resources::load_dir(dir).map_err(|e| e.to_string());
        }
    }

    Err(format!(
        "could not find {} and {} in any of the search paths:\n{}",
        errtag_hi::resources::WORD_LIST_FILE,
        errtag_hi::resources::POS_MAP_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search for resource files.
fn build_search_paths(resource_dir: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = resource_dir {
        paths.push(PathBuf::from(p));
    }

    // 2. ERRTAG_RESOURCE_DIR environment variable
    if let Ok(env_path) = std::env::var(RESOURCE_DIR_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".errtag").join(RESOURCE_SUBDIR));
    }

    // 4. System path
    paths.push(PathBuf::from("/usr/share/errtag").join(RESOURCE_SUBDIR));

    // 5. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Extract a `--long=VALUE`, `--long VALUE` or `-s VALUE` option from
/// command line args. The last occurrence wins.
///
/// Returns `(value, remaining_args)`.
pub fn parse_option(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();
    let prefix = format!("{long}=");

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Parse a `--resource-dir=PATH` or `-r PATH` argument.
pub fn parse_resource_dir(args: &[String]) -> (Option<String>, Vec<String>) {
    parse_option(args, "--resource-dir", "-r")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Send diagnostics to stderr. The level defaults to `warn` and can be
/// raised with `RUST_LOG` (e.g. `RUST_LOG=errtag_hi=debug`).
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn option_with_separate_value() {
        let (dir, rest) = parse_resource_dir(&args(&["-r", "/data", "-i", "in.jsonl"]));
        assert_eq!(dir.as_deref(), Some("/data"));
        assert_eq!(rest, args(&["-i", "in.jsonl"]));
    }

    #[test]
    fn option_with_equals() {
        let (dir, rest) = parse_resource_dir(&args(&["--resource-dir=/data", "x"]));
        assert_eq!(dir.as_deref(), Some("/data"));
        assert_eq!(rest, args(&["x"]));
    }

    #[test]
    fn option_absent() {
        let (tally, rest) = parse_option(&args(&["-o", "out.m2"]), "--tally", "--tally");
        assert_eq!(tally, None);
        assert_eq!(rest, args(&["-o", "out.m2"]));
    }

    #[test]
    fn last_occurrence_wins() {
        let (out, _) = parse_option(&args(&["-o", "a", "--output=b"]), "--output", "-o");
        assert_eq!(out.as_deref(), Some("b"));
    }

    #[test]
    fn help_flag() {
        assert!(wants_help(&args(&["-r", "x", "--help"])));
        assert!(!wants_help(&args(&["-r", "x"])));
    }

    #[test]
    fn explicit_dir_searched_first() {
        let paths = build_search_paths(Some("/explicit"));
        assert_eq!(paths[0], PathBuf::from("/explicit"));
        assert!(paths.contains(&PathBuf::from("/usr/share/errtag/hi")));
    }

    #[test]
    fn missing_resources_list_search_paths() {
        let err = load_resources(Some("/nonexistent/errtag")).err();
        // A resource directory may exist on the host; only check the failure path.
        if let Some(msg) = err {
            assert!(msg.contains("/nonexistent/errtag"));
            assert!(msg.contains("big.txt"));
        }
    }
}
