//! Run configuration and the output sink it names.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use tempfile::NamedTempFile;

use crate::size::MaxSize;

/// File written when no output is requested.
pub const DEFAULT_OUTPUT: &str = "twiddle.h";

/// Where the generated header goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// Standard output, spelled `-` on the command line.
    Stdout,
    File(PathBuf),
}

impl Default for Output {
    fn default() -> Self {
        Output::File(PathBuf::from(DEFAULT_OUTPUT))
    }
}

impl FromStr for Output {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "-" {
            Output::Stdout
        } else {
            Output::File(PathBuf::from(s))
        })
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stdout => write!(f, "-"),
            Output::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Output {
    /// Run `body` against a writer for this output.
    ///
    /// A file target is written through a temporary file in the same
    /// directory and renamed into place only after `body` succeeds and the
    /// data is flushed. On any error the temporary file is dropped and
    /// removed, leaving an existing target untouched.
    pub fn write_with<F>(&self, body: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        match self {
            Output::Stdout => {
                let stdout = io::stdout();
                let mut out = BufWriter::new(stdout.lock());
                body(&mut out)?;
                out.flush()
            }
            Output::File(path) => write_file_atomically(path, body),
        }
    }
}

fn write_file_atomically<F>(path: &Path, body: F) -> io::Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let tmp = NamedTempFile::new_in(&dir)?;
    {
        let mut out = BufWriter::new(tmp.as_file());
        body(&mut out)?;
        out.flush()?;
    }
    tmp.as_file().sync_all()?;
    let file = tmp.persist(path).map_err(|e| e.error)?;
    // NamedTempFile is created 0600; give the header ordinary permissions.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }
    #[cfg(not(unix))]
    let _ = file;
    info!("wrote {}", path.display());
    Ok(())
}

/// Everything one generation run needs, passed explicitly.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Config {
    pub max: MaxSize,
    pub output: Output,
    pub verbose: bool,
}

impl Config {
    pub fn new(max: MaxSize, output: Output) -> Self {
        Self {
            max,
            output,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
