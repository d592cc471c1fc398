//! Command-line argument parsing and help for fie.
//!
//! fie takes at most one argument: a path to list, or one of the flags below.
//! When invoked with no args (fie), the current directory is listed.

use crate::config::Config;

/// Exit status for malformed command lines.
pub const USAGE_EXIT: u8 = 2;

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    ListCurrent,
    ListPath(String),
    Exit(u8),
}

/// Reads the process arguments and acts on informational flags.
pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().skip(1).collect();
    handle(&args)
}

/// Decides what to do for the given arguments (program name excluded).
/// Prints help, version, or usage errors as a side effect.
pub fn handle(args: &[String]) -> CliAction {
    match args {
        [] => CliAction::ListCurrent,
        [arg] => match arg.as_str() {
            "--version" | "-v" => {
                print_version();
                CliAction::Exit(0)
            }
            "-h" | "--help" => {
                print_help();
                CliAction::Exit(0)
            }
            "--init" => {
                let path = Config::default_path();
                match Config::generate_default(&path) {
                    Ok(()) => {
                        println!("Wrote default config to {}", path.display());
                        CliAction::Exit(0)
                    }
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        CliAction::Exit(1)
                    }
                }
            }
            "--" => CliAction::ListCurrent,
            arg if !arg.starts_with('-') && !arg.trim().is_empty() => {
                CliAction::ListPath(arg.to_string())
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                eprintln!("Try --help for available options");
                CliAction::Exit(USAGE_EXIT)
            }
        },
        [dashes, path] if dashes == "--" => CliAction::ListPath(path.clone()),
        _ => {
            eprintln!("Error: fie accepts only one argument at a time.");
            eprintln!("Usage: fie [PATH] or fie [OPTION]");
            CliAction::Exit(USAGE_EXIT)
        }
    }
}

fn print_version() {
    println!("fie v{}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"fie - list a directory as an aligned, colorized table

USAGE:
  fie [PATH]

PATH:
  Directory to list (defaults to current directory)

OPTIONS:
      --init              Generate a default configuration file
  -h, --help              Print help information
  -v, --version           Display the current installed version of fie

ENVIRONMENT:
  FIE_CONFIG              Override the default config path
  FIE_LOG                 Log filter for diagnostics on stderr (e.g. "debug")
  NO_COLOR                Disable colors when color = "auto"
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_argument_lists_current_directory() {
        assert_eq!(handle(&[]), CliAction::ListCurrent);
    }

    #[test]
    fn path_argument() {
        assert_eq!(
            handle(&args(&["/tmp"])),
            CliAction::ListPath("/tmp".to_string())
        );
        assert_eq!(
            handle(&args(&["--", "-odd-name"])),
            CliAction::ListPath("-odd-name".to_string())
        );
    }

    #[test]
    fn informational_flags_exit_cleanly() {
        assert_eq!(handle(&args(&["--version"])), CliAction::Exit(0));
        assert_eq!(handle(&args(&["-h"])), CliAction::Exit(0));
    }

    #[test]
    fn bad_usage_exits_with_usage_status() {
        assert_eq!(handle(&args(&["--bogus"])), CliAction::Exit(USAGE_EXIT));
        assert_eq!(handle(&args(&["a", "b"])), CliAction::Exit(USAGE_EXIT));
    }
}
