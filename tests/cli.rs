use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rastergrid_cmd() -> Command {
    Command::cargo_bin("rastergrid").expect("binary exists")
}

#[test]
fn rastergrid_help_prints_usage() {
    rastergrid_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interactive comparison of classic grid rasterization algorithms",
        ));
}

#[test]
fn no_flags_prints_script_directives() {
    rastergrid_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Script directives:"));
}

#[test]
fn compare_prints_bresenham_cells() {
    rastergrid_cmd()
        .args(["--compare", "0,0,5,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Bresenham: (0, 0) (1, 0) (2, 1) (3, 1) (4, 2) (5, 2)",
        ));
}

#[test]
fn compare_json_is_parseable() {
    let output = rastergrid_cmd()
        .args(["--compare", "0,0,2,1", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = report.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1]["algorithm"], "DDA");
    assert_eq!(entries[1]["points"][1], serde_json::json!({ "x": 1, "y": 0 }));
}

#[test]
fn circle_rejects_negative_radius() {
    rastergrid_cmd()
        .args(["--circle", "0,0,-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("radius must not be negative"));
}

#[test]
fn compare_rejects_malformed_segment() {
    rastergrid_cmd()
        .args(["--compare", "1,2,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 4 comma-separated integers"));
}

#[test]
fn compare_rejects_coordinates_past_limit() {
    rastergrid_cmd()
        .args(["--compare", "0,0,2000000000,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("coordinate 2000000000 is outside"));
}

#[test]
fn circle_rejects_radius_past_limit() {
    rastergrid_cmd()
        .args(["--circle", "100,60,2147483600"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("radius must be at most 10000"));
}

#[test]
fn replay_survives_huge_radius_entry() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("events.txt");
    // Circle tool row, radius box, oversized radius, then a circle click
    std::fs::write(
        &script,
        "click 650 225\nclick 615 60\ntype 2147483600\nkey enter\nclick 502 302\ntick\n",
    )
    .unwrap();

    rastergrid_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--replay")
        .arg(&script)
        .arg("--output")
        .arg(temp.path().join("frame.png"))
        .assert()
        .success()
        .stdout(predicate::str::contains("8 cells"));
}

#[test]
fn realtime_requires_replay() {
    rastergrid_cmd()
        .arg("--realtime")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn replay_writes_png() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("events.txt");
    let output = temp.path().join("frame.png");
    std::fs::write(&script, "click 2 2\ntick\nclick 27 12\ntick\nclose\n").unwrap();

    rastergrid_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--replay")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("6 cells"));

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn replay_reports_script_line_on_error() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("events.txt");
    std::fs::write(&script, "tick\nwiggle 1 2\n").unwrap();

    rastergrid_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--replay")
        .arg(&script)
        .arg("--output")
        .arg(temp.path().join("frame.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: unknown directive 'wiggle'"));
}

#[test]
fn replay_uses_explicit_config() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    let script = temp.path().join("events.txt");
    std::fs::write(&config, "[grid]\ncell_size = 10\n").unwrap();
    // With 10 px cells these pixels land on cells (0, 0) and (5, 2)
    std::fs::write(&script, "click 5 5\nclick 55 25\n").unwrap();

    rastergrid_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--config")
        .arg(&config)
        .arg("--replay")
        .arg(&script)
        .arg("--output")
        .arg(temp.path().join("frame.png"))
        .assert()
        .success()
        .stdout(predicate::str::contains("6 cells"));
}

#[test]
fn init_config_uses_temp_config_home() {
    let temp = TempDir::new().unwrap();

    rastergrid_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote example config"));

    let written = std::fs::read_to_string(temp.path().join("rastergrid/config.toml")).unwrap();
    assert!(written.contains("[grid]"));

    rastergrid_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn schema_dump_writes_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("schema.json");

    Command::cargo_bin("dump_config_schema")
        .unwrap()
        .arg("--output")
        .arg(&path)
        .assert()
        .success();

    let schema: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(schema["properties"]["grid"].is_object());
}
