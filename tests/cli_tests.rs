//! Integration tests for the pathkit CLI
//!
//! These tests run the pathkit binary against grid and number files.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

/// Get a Command for pathkit, isolated from any user configuration
fn pathkit(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("pathkit");
    cmd.env("PATHKIT_CONFIG_DIR", config_dir)
        .env_remove("PATHKIT_CONFIG")
        .env_remove("PATHKIT_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

const WEIGHTED: &str = "S9E\n.1.\n";

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_lists_commands() {
    let dir = tempdir().unwrap();
    pathkit(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: pathkit"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("levels"))
        .stdout(predicate::str::contains("mix"));
}

#[test]
fn test_no_command_prints_version() {
    let dir = tempdir().unwrap();
    pathkit(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("pathkit "));
}

// ============================================================================
// path
// ============================================================================

#[test]
fn test_path_astar_human() {
    let dir = tempdir().unwrap();
    let grid = write_file(&dir, "grid.txt", WEIGHTED);

    pathkit(dir.path())
        .arg("path")
        .arg(&grid)
        .assert()
        .success()
        .stdout(predicate::str::contains("status: reached"))
        .stdout(predicate::str::contains("cost: 4"))
        .stdout(predicate::str::contains("steps: 4"))
        .stdout(predicate::str::contains("path: (0, 0) -> (1, 0)"));
}

#[test]
fn test_path_bfs_ignores_cell_costs() {
    let dir = tempdir().unwrap();
    let grid = write_file(&dir, "grid.txt", WEIGHTED);

    let output = pathkit(dir.path())
        .args(["--format", "json", "path", "--algorithm", "bfs"])
        .arg(&grid)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "bfs");
    assert_eq!(json["status"], "reached");
    assert_eq!(json["found"], true);
    assert_eq!(json["steps"], 2);
    assert_eq!(json["cost"], 10);
    assert_eq!(json["path"], serde_json::json!([[0, 0], [0, 1], [0, 2]]));
}

#[test]
fn test_path_dijkstra_and_astar_agree() {
    let dir = tempdir().unwrap();
    let grid = write_file(&dir, "grid.txt", "S.3.\n#2#.\n..1E\n");

    let cost_of = |algorithm: &str| {
        let output = pathkit(dir.path())
            .args(["--format", "json", "path", "-a", algorithm])
            .arg(&grid)
            .output()
            .unwrap();
        stdout_json(&output)["cost"].clone()
    };
    assert_eq!(cost_of("dijkstra"), cost_of("astar"));
}

#[test]
fn test_path_unreachable_is_not_an_error() {
    let dir = tempdir().unwrap();
    let grid = write_file(&dir, "grid.txt", "S.#E\n..##\n");

    let output = pathkit(dir.path())
        .args(["--format", "json", "path"])
        .arg(&grid)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["status"], "unreachable");
    assert_eq!(json["found"], false);
    assert!(json["cost"].is_null());
    assert_eq!(json["path"], serde_json::json!([]));
}

#[test]
fn test_path_step_limit_reports_partial_path() {
    let dir = tempdir().unwrap();
    let grid = write_file(&dir, "grid.txt", "S.........E\n");

    let output = pathkit(dir.path())
        .args(["--format", "json", "path", "--step-limit", "3"])
        .arg(&grid)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["status"], "step_limit");
    assert_eq!(json["found"], false);
    assert_eq!(json["steps"], 3);
    assert_eq!(json["path"].as_array().unwrap().len(), 4);
}

#[test]
fn test_path_diagonal_flag() {
    let dir = tempdir().unwrap();
    let grid = write_file(&dir, "grid.txt", "S..\n...\n..E\n");

    pathkit(dir.path())
        .arg("path")
        .arg(&grid)
        .assert()
        .success()
        .stdout(predicate::str::contains("steps: 4"));

    pathkit(dir.path())
        .args(["path", "--diagonal"])
        .arg(&grid)
        .assert()
        .success()
        .stdout(predicate::str::contains("steps: 2"));
}

#[test]
fn test_path_custom_legend_from_config_flag() {
    let dir = tempdir().unwrap();
    let config = write_file(
        &dir,
        "legend.toml",
        "wall = \"X\"\nstart = \"a\"\ngoal = \"z\"\n",
    );
    let grid = write_file(&dir, "grid.txt", "aX.\n..z\n");

    pathkit(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("path")
        .arg(&grid)
        .assert()
        .success()
        .stdout(predicate::str::contains("steps: 3"));
}

#[test]
fn test_config_from_environment() {
    let dir = tempdir().unwrap();
    let config = write_file(&dir, "legend.toml", "diagonal = true\n");
    let grid = write_file(&dir, "grid.txt", "S..\n...\n..E\n");

    pathkit(dir.path())
        .env("PATHKIT_CONFIG", &config)
        .arg("path")
        .arg(&grid)
        .assert()
        .success()
        .stdout(predicate::str::contains("steps: 2"));
}

#[test]
fn test_config_dir_default_file() {
    let dir = tempdir().unwrap();
    write_file(&dir, "config.toml", "diagonal = true\n");
    let grid = write_file(&dir, "grid.txt", "S..\n...\n..E\n");

    pathkit(dir.path())
        .arg("path")
        .arg(&grid)
        .assert()
        .success()
        .stdout(predicate::str::contains("steps: 2"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().unwrap();
    let config = write_file(&dir, "legend.toml", "wall = \"S\"\n");
    let grid = write_file(&dir, "grid.txt", "S.E\n");

    pathkit(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("path")
        .arg(&grid)
        .assert()
        .failure()
        .stderr(predicate::str::contains("legend.toml"));
}

#[test]
fn test_ragged_grid_is_data_error() {
    let dir = tempdir().unwrap();
    let grid = write_file(&dir, "grid.txt", "S..\n.E\n");

    pathkit(dir.path())
        .arg("path")
        .arg(&grid)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid grid at line 2"));
}

#[test]
fn test_error_as_json() {
    let dir = tempdir().unwrap();
    let grid = write_file(&dir, "grid.txt", "...\n.E.\n");

    let output = pathkit(dir.path())
        .args(["--format", "json", "path"])
        .arg(&grid)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "invalid_grid");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_grid_without_goal_is_usage_error() {
    let dir = tempdir().unwrap();
    let grid = write_file(&dir, "grid.txt", "S..\n");

    pathkit(dir.path())
        .arg("path")
        .arg(&grid)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no goal cell"));
}

#[test]
fn test_missing_grid_file() {
    let dir = tempdir().unwrap();

    pathkit(dir.path())
        .args(["path", "does-not-exist.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does-not-exist.txt"));
}

#[test]
fn test_unknown_algorithm_json_usage_error() {
    let dir = tempdir().unwrap();
    let grid = write_file(&dir, "grid.txt", WEIGHTED);

    let output = pathkit(dir.path())
        .args(["--format", "json", "path", "--algorithm", "greedy"])
        .arg(&grid)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_quiet_suppresses_error_text() {
    let dir = tempdir().unwrap();

    pathkit(dir.path())
        .args(["--quiet", "path", "missing.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// levels
// ============================================================================

#[test]
fn test_levels_human() {
    let dir = tempdir().unwrap();
    let grid = write_file(&dir, "grid.txt", "S..\n...\n");

    pathkit(dir.path())
        .arg("levels")
        .arg(&grid)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "level 0: 1\nlevel 1: 2\nlevel 2: 2\nlevel 3: 1\n",
        ))
        .stdout(predicate::str::contains("reachable: 6"));
}

#[test]
fn test_levels_json() {
    let dir = tempdir().unwrap();
    let grid = write_file(&dir, "grid.txt", "S#.\n.#.\n");

    let output = pathkit(dir.path())
        .args(["--format", "json", "levels"])
        .arg(&grid)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        serde_json::json!([{ "level": 0, "count": 1 }, { "level": 1, "count": 1 }])
    );
}

// ============================================================================
// mix
// ============================================================================

#[test]
fn test_mix_starts_from_zero() {
    let dir = tempdir().unwrap();
    let input = write_file(&dir, "numbers.txt", "1\n2\n-3\n3\n-2\n0\n4\n");

    pathkit(dir.path())
        .arg("mix")
        .arg(&input)
        .assert()
        .success()
        .stdout("0\n3\n-2\n1\n2\n-3\n4\n");
}

#[test]
fn test_mix_with_key_and_rounds_json() {
    let dir = tempdir().unwrap();
    let input = write_file(&dir, "numbers.txt", "1\n2\n-3\n3\n-2\n0\n4\n");

    let output = pathkit(dir.path())
        .args(["--format", "json", "mix", "--key", "811589153", "--rounds", "10"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        serde_json::json!([
            0,
            -2434767459i64,
            1623178306,
            3246356612i64,
            -1623178306,
            2434767459i64,
            811589153
        ])
    );
}

#[test]
fn test_mix_without_zero_reads_from_first() {
    let dir = tempdir().unwrap();
    let input = write_file(&dir, "numbers.txt", "1\n2\n3\n4\n5\n6\n7\n");

    pathkit(dir.path())
        .args(["--format", "json", "mix"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("[1,5,2,3,6,4,7]"));
}

#[test]
fn test_mix_bad_number_is_data_error() {
    let dir = tempdir().unwrap();
    let input = write_file(&dir, "numbers.txt", "1\ntwo\n3\n");

    pathkit(dir.path())
        .arg("mix")
        .arg(&input)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid number at line 2"));
}
