use anyhow::{bail, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Get the workspace root directory
pub fn workspace_root() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let mut path = PathBuf::from(manifest_dir);
    path.pop(); // Go up from xtask to workspace root
    path
}

fn cargo() -> Command {
    let mut cmd = Command::new(std::env::var("CARGO").unwrap_or_else(|_| "cargo".into()));
    cmd.current_dir(workspace_root());
    cmd
}

pub fn build_command(release: bool) -> Command {
    let mut cmd = cargo();
    cmd.args(["build", "--workspace"]);
    if release {
        cmd.arg("--release");
    }
    cmd
}

pub fn test_command() -> Command {
    let mut cmd = cargo();
    cmd.args(["test", "--workspace"]);
    cmd
}

pub fn clippy_command() -> Command {
    let mut cmd = cargo();
    cmd.args(["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"]);
    cmd
}

pub fn fmt_command() -> Command {
    let mut cmd = cargo();
    cmd.args(["fmt", "--all"]);
    cmd
}

/// Regenerate a twiddle header through the `twiddlegen` binary.
pub fn header_command(max: usize, output: &Path) -> Command {
    let mut cmd = cargo();
    cmd.args(["run", "-q", "-r", "-p", "twiddlegen", "--", "--max"])
        .arg(max.to_string())
        .arg("--output")
        .arg(output);
    cmd
}

/// Run the reference oracle on `case`, writing its spectrum to `output`.
pub fn oracle_command(case: &Path, output: &Path) -> Command {
    let mut cmd = cargo();
    cmd.args(["run", "-q", "-r", "-p", "sanity-check", "--bin", "oracle", "--", "-i"])
        .arg(case)
        .arg("-o")
        .arg(output);
    cmd
}

/// Compare two spectra with the harness.
pub fn compare_command(expected: &Path, actual: &Path, tolerance: Option<f64>) -> Command {
    let mut cmd = cargo();
    cmd.args(["run", "-q", "-r", "-p", "sanity-check", "--bin", "compare", "--", "--all"]);
    if let Some(t) = tolerance {
        cmd.arg("--tolerance").arg(t.to_string());
    }
    cmd.arg(expected).arg(actual);
    cmd
}

/// Check an FFT implementation's output for `case` against the oracle.
///
/// Returns the harness exit code, i.e. the number of mismatches capped at 255.
pub fn verify(case: &Path, actual: &Path, tolerance: Option<f64>) -> Result<i32> {
    if !case.is_file() {
        bail!("test case {} not found", case.display());
    }
    let expected = tempfile::Builder::new().suffix(".out").tempfile()?;
    let status = oracle_command(case, expected.path())
        .stdout(Stdio::null())
        .status()?;
    if !status.success() {
        bail!("oracle failed on {}", case.display());
    }
    let status = compare_command(expected.path(), actual, tolerance).status()?;
    Ok(status.code().unwrap_or(1))
}

/// Feed `case` to an external FFT program on stdin and capture its stdout.
pub fn run_program(program: &Path, case: &Path, output: &Path) -> Result<()> {
    let status = Command::new(program)
        .stdin(File::open(case)?)
        .stdout(File::create(output)?)
        .status()?;
    if !status.success() {
        bail!("{} exited with {status}", program.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(cmd: &Command) -> Vec<String> {
        cmd.get_args()
            .map(|a| a.to_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_build_release_flag() {
        assert!(args(&build_command(true)).contains(&"--release".to_string()));
        assert!(!args(&build_command(false)).contains(&"--release".to_string()));
    }

    #[test]
    fn test_header_command() {
        let a = args(&header_command(1024, Path::new("out/twiddle.h")));
        assert!(a.contains(&"twiddlegen".to_string()));
        assert!(a.windows(2).any(|w| w == ["--max", "1024"]));
        assert!(a.windows(2).any(|w| w == ["--output", "out/twiddle.h"]));
    }

    #[test]
    fn test_oracle_and_compare_commands() {
        let o = args(&oracle_command(Path::new("a.tc"), Path::new("a.out")));
        assert!(o.windows(2).any(|w| w == ["--bin", "oracle"]));
        assert!(o.contains(&"a.tc".to_string()));

        let c = args(&compare_command(Path::new("x"), Path::new("y"), Some(1e-6)));
        assert!(c.windows(2).any(|w| w == ["--bin", "compare"]));
        assert!(c.contains(&"--all".to_string()));
        assert!(c.contains(&"0.000001".to_string()));
        assert_eq!(&c[c.len() - 2..], ["x", "y"]);

        let c = args(&compare_command(Path::new("x"), Path::new("y"), None));
        assert!(!c.contains(&"--tolerance".to_string()));
    }

    #[test]
    fn test_other_commands() {
        assert!(test_command().get_args().any(|a| a == "test"));
        assert!(clippy_command().get_args().any(|a| a == "clippy"));
        assert!(fmt_command().get_args().any(|a| a == "fmt"));
    }

    #[test]
    fn test_commands_run_from_workspace_root() {
        let cmd = build_command(false);
        assert_eq!(cmd.get_current_dir(), Some(workspace_root().as_path()));
        assert!(workspace_root().join("Cargo.toml").is_file());
    }

    #[test]
    fn test_verify_missing_case() {
        let err = verify(Path::new("does/not/exist.tc"), Path::new("x"), None).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
