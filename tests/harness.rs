//! Test harness for sapling integration tests

#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;

pub use sapling::test_utils::TestDir;

/// Run sapling in `dir` with `args`, feeding `stdin`.
pub fn run_sapling(dir: &Path, args: &[&str], stdin: &str) -> (String, String, bool) {
    let output = Command::cargo_bin("sapling")
        .expect("sapling binary should be built")
        .args(args)
        .arg("--color=never")
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .write_stdin(stdin)
        .output()
        .expect("Failed to run sapling");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Tree lines only (everything that carries the branch marker).
pub fn tree_lines(stdout: &str) -> Vec<&str> {
    stdout.lines().filter(|l| l.contains("|-- ")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("nested/test.rs", "fn main() {}");
        assert!(file_path.exists());
    }

    #[test]
    fn test_tree_lines_filters_status_lines() {
        let out = "Current directory: /x\nDirectory structure of: y\n|-- a\n    |-- b\n";
        assert_eq!(tree_lines(out), vec!["|-- a", "    |-- b"]);
    }
}
