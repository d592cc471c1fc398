//! main.rs
//! Entry point for fie

use fie::app;
use fie::config::{ColorChoice, Config};
use fie::ui::Renderer;
use fie::utils::cli::{CliAction, handle_args};
use fie::utils::init_logging;

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();

    let target = match handle_args() {
        CliAction::ListCurrent => None,
        CliAction::ListPath(path) => Some(PathBuf::from(path)),
        CliAction::Exit(code) => return ExitCode::from(code),
    };

    let config = Config::load();
    let choice = config.general().color();
    if choice == ColorChoice::Always {
        crossterm::style::force_color_output(true);
    }

    let stderr = io::stderr();
    let err_renderer = Renderer::new(config.theme(), choice.enabled(&stderr));

    let path = match target {
        Some(path) => path,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                let _ = err_renderer.write_error(&mut stderr.lock(), &e);
                return ExitCode::FAILURE;
            }
        },
    };

    let stdout = io::stdout();
    let color = choice.enabled(&stdout);
    let mut out = BufWriter::new(stdout.lock());

    match app::settle(app::run(&path, &config, &mut out, color)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("listing {} failed: {:?}", path.display(), e);
            let _ = err_renderer.write_error(&mut stderr.lock(), &e);
            ExitCode::from(e.exit_code())
        }
    }
}
