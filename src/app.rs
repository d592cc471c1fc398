//! Ties one invocation together: list the directory, then render it.

use crate::config::Config;
use crate::core::list_dir;
use crate::error::{FieError, Result};
use crate::ui::Renderer;

use std::io::{self, Write};
use std::path::Path;

/// Lists `path` and writes the table (or the empty notice) to `out`.
///
/// The directory is fully read and sorted before anything is written, so a failing
/// path produces no output at all.
pub fn run<W: Write>(path: &Path, config: &Config, out: &mut W, color: bool) -> Result<()> {
    let general = config.general();
    let listing = list_dir(path, &general.list_options())?;

    Renderer::new(config.theme(), color)
        .with_header(general.header())
        .render(out, &listing)?;
    out.flush()?;
    Ok(())
}

/// Decides which outcomes of [run] are failures worth reporting.
///
/// A reader that closes early (`fie | head`) is not an error: everything it asked
/// for was written.
pub fn settle(result: Result<()>) -> Result<()> {
    match result {
        Err(FieError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("output closed early: {}", e);
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::ErrorKind;
    use tempfile::tempdir;

    /// Accepts a few bytes, then behaves like a pipe whose reader has gone away.
    struct ClosingPipe {
        budget: usize,
    }

    impl Write for ClosingPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::from(io::ErrorKind::BrokenPipe));
            }
            let n = buf.len().min(self.budget);
            self.budget -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_reader_is_not_a_failure() -> Result<()> {
        let dir = tempdir()?;
        for i in 0..50 {
            File::create(dir.path().join(format!("file_{i:02}")))?;
        }

        let mut out = ClosingPipe { budget: 20 };
        let result = run(dir.path(), &Config::default(), &mut out, false);
        let broken = matches!(&result, Err(FieError::Io(e)) if e.kind() == ErrorKind::BrokenPipe);
        assert!(broken, "expected a broken pipe, got {:?}", result);
        assert!(settle(result).is_ok());
        Ok(())
    }

    #[test]
    fn other_errors_still_fail() {
        let missing = settle(Err(FieError::PathNotFound {
            path: "/nope".into(),
        }));
        assert!(matches!(missing, Err(FieError::PathNotFound { .. })));

        let io_err = settle(Err(FieError::Io(io::Error::from(io::ErrorKind::PermissionDenied))));
        assert!(matches!(io_err, Err(FieError::Io(_))));
    }
}
