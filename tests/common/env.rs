//! Test environment builder for isolated CLI testing.
//!
//! Provides `TestEnv` - temp project and home directories, plus a fake
//! `mypy` shell script whose stdout and exit status each test controls.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory the CLI runs in
    pub project_root: TempDir,
    /// HOME for the CLI, so no user config leaks in
    pub home_dir: TempDir,
    /// Holds the fake checker script and its recorded arguments
    tools_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Environment whose fake checker prints `output` and exits with `code`.
    pub fn with_checker(output: &str, code: i32) -> Self {
        let env = Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            tools_dir: TempDir::new().expect("Failed to create tools dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_mypy-missing-imports")),
        };
        env.install_checker(output, code, "");
        env
    }

    /// Replace the fake checker, optionally writing `stderr` too.
    pub fn install_checker(&self, output: &str, code: i32, stderr: &str) {
        let out_file = self.tools_dir.path().join("stdout.txt");
        let err_file = self.tools_dir.path().join("stderr.txt");
        std::fs::write(&out_file, output).expect("Failed to write checker output");
        std::fs::write(&err_file, stderr).expect("Failed to write checker stderr");

        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{args}'\ncat '{out}'\ncat '{err}' >&2\nexit {code}\n",
            args = self.args_file().display(),
            out = out_file.display(),
            err = err_file.display(),
        );
        std::fs::write(self.script_path(), script).expect("Failed to write checker script");
    }

    fn script_path(&self) -> PathBuf {
        self.tools_dir.path().join("fake-mypy.sh")
    }

    /// Checker command line; run through `sh` so the script needs no exec bit.
    pub fn checker_command(&self) -> String {
        format!("sh {}", self.script_path().display())
    }

    fn args_file(&self) -> PathBuf {
        self.tools_dir.path().join("args.txt")
    }

    /// Arguments the fake checker received on its last run.
    pub fn checker_args(&self) -> Vec<String> {
        std::fs::read_to_string(self.args_file())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn read_project_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.project_path(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("MYPY_MISSING_IMPORTS_CHECKER", self.checker_command())
            .env("NO_COLOR", "1")
            .env_remove("MYPY_MISSING_IMPORTS_COLOR")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute mypy-missing-imports");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
