use log::{LevelFilter, SetLoggerError};
use simplelog::WriteLogger;
use std::path::Path;
use thiserror::Error;

/// Send log messages at `level` and above to the file at `path`, creating it
/// (and its parent directories) or truncating it.  If `path` is `None`,
/// nothing is logged.
///
/// The terminal belongs to the game while it runs, so a file is the only
/// place logs can go.
pub(crate) fn init(path: Option<&Path>, level: LevelFilter) -> Result<(), LoggingError> {
    let Some(path) = path else {
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let file = fs_err::File::create(path)?;
    WriteLogger::init(level, simplelog::Config::default(), file)?;
    Ok(())
}

#[derive(Debug, Error)]
pub(crate) enum LoggingError {
    #[error("failed to create log file")]
    Create(#[from] std::io::Error),
    #[error("failed to install logger")]
    Install(#[from] SetLoggerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_is_a_no_op() {
        assert!(init(None, LevelFilter::Trace).is_ok());
    }

    #[test]
    fn unwritable_path() {
        let tmpdir = tempfile::tempdir().unwrap();
        let blocker = tmpdir.path().join("blocker");
        fs_err::write(&blocker, "").unwrap();
        let path = blocker.join("game.log");
        assert!(matches!(
            init(Some(&path), LevelFilter::Info),
            Err(LoggingError::Create(_))
        ));
    }
}
