use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// TestHarness provides an isolated working directory for running the clause
/// binary. The global config directory points inside the temp dir so a
/// developer's own configuration never leaks into tests.
pub struct TestHarness {
    pub dir: TempDir,
    pub clause_binary: PathBuf,
}

impl TestHarness {
    /// Creates a new harness with an empty working directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("home")).expect("Failed to create home dir");

        TestHarness {
            dir: temp_dir,
            clause_binary: PathBuf::from(env!("CARGO_BIN_EXE_clause")),
        }
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `content` to `name` inside the harness directory and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes the project config `.clause/config.md`.
    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) -> PathBuf {
        self.write_file(".clause/config.md", content)
    }

    /// Executes the clause binary with the given arguments in the harness directory.
    pub fn run(&self, args: &[&str]) -> Output {
        let home = self.path().join("home");
        Command::new(&self.clause_binary)
            .args(args)
            .current_dir(self.path())
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("CLAUSE_QUIET")
            .output()
            .expect("Failed to run clause binary")
    }
}

/// Captured stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Captured stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
