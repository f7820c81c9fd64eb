//! End-to-end tests for the `viperx` binary.

use std::fs;
use std::path::Path;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

/// Isolated from the caller's config directory and environment.
fn viperx(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("viperx");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .arg("--no-color");
    cmd
}

fn template_dir(home: &TempDir) -> String {
    home.path().join("templates").display().to_string()
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    viperx(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("templates"))
        .stdout(predicate::str::contains("learn"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    viperx(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn bad_arguments_exit_two() {
    let home = TempDir::new().unwrap();
    viperx(&home)
        .args(["new", "demo", "--type", "web"])
        .assert()
        .code(2);
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn new_creates_classic_project() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    viperx(&home)
        .args(["new", "demo-app", "-a", "Ada", "--template-dir", &template_dir(&home)])
        .arg("-o")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("created"))
        .stdout(predicate::str::contains("uv sync"));

    let root = out.path().join("demo-app");
    let pyproject = fs::read_to_string(root.join("pyproject.toml")).unwrap();
    assert!(pyproject.contains("name = \"demo-app\""));
    assert!(root.join("README.md").is_file());
    assert!(root.join(".gitignore").is_file());
    assert!(root.join("src/demo_app/__init__.py").is_file());
    assert!(root.join("src/demo_app/tests/test_core.py").is_file());
    assert!(!root.join("src/demo_app/data_loader.py").exists());
    assert!(fs::read_to_string(root.join("LICENSE")).unwrap().contains("Ada"));
}

#[test]
fn new_dl_uses_chosen_framework() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    viperx(&home)
        .args(["new", "vision", "-t", "dl", "-f", "tensorflow", "--no-tests"])
        .args(["--template-dir", &template_dir(&home)])
        .arg("-o")
        .arg(out.path())
        .assert()
        .success();

    let root = out.path().join("vision");
    let loader = fs::read_to_string(root.join("src/vision/data_loader.py")).unwrap();
    assert!(loader.contains("import tensorflow as tf"));
    assert!(!loader.contains("import torch"));
    assert!(!root.join("src/vision/tests").exists());
}

#[test]
fn existing_project_needs_force() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let run = |extra: &[&str]| {
        let mut cmd = viperx(&home);
        cmd.args(["new", "twice", "--template-dir", &template_dir(&home)])
            .arg("-o")
            .arg(out.path())
            .args(extra);
        cmd.assert()
    };

    run(&[]).success();
    run(&[])
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));
    run(&["--force"]).success();
}

#[test]
fn dry_run_writes_nothing() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    viperx(&home)
        .args(["new", "ghost", "--dry-run", "--template-dir", &template_dir(&home)])
        .arg("-o")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("pyproject.toml"));

    assert!(!out.path().join("ghost").exists());
}

#[test]
fn user_override_wins_and_is_reported() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let templates = home.path().join("templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(templates.join("README.md.j2"), "# {{ project_name }} (house style)\n").unwrap();

    viperx(&home)
        .args(["new", "styled", "--template-dir", &template_dir(&home)])
        .arg("-o")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[user]"));

    assert_eq!(
        fs::read_to_string(out.path().join("styled/README.md")).unwrap(),
        "# styled (house style)\n"
    );
}

#[test]
fn broken_override_fails_without_writing() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let templates = home.path().join("templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(templates.join("main.py.j2"), "print({{ no_such_variable }})\n").unwrap();

    viperx(&home)
        .args(["new", "broken", "--template-dir", &template_dir(&home)])
        .arg("-o")
        .arg(out.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("main.py.j2"));

    assert!(!out.path().join("broken").exists());
}

#[test]
fn invalid_project_name_is_user_error() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    viperx(&home)
        .args(["new", "9lives"])
        .arg("-o")
        .arg(out.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("9lives"));
}

#[test]
fn explain_flag_prints_notes() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    viperx(&home)
        .args(["new", "learner", "--explain", "--dry-run"])
        .args(["--template-dir", &template_dir(&home)])
        .arg("-o")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("src_layout"))
        .stdout(predicate::str::contains("pyproject_toml"));
}

#[test]
fn json_report_lists_sources() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let assert = viperx(&home)
        .args(["--output-format", "json", "new", "data", "--dry-run"])
        .args(["--template-dir", &template_dir(&home)])
        .arg("-o")
        .arg(out.path())
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["dry_run"], true);
    let files = report["files"].as_array().unwrap();
    assert_eq!(files.len(), 12);
    assert!(files.iter().all(|f| f["source"] == "bundled"));
}

// ── templates ─────────────────────────────────────────────────────────────────

#[test]
fn templates_list_shows_sources() {
    let home = TempDir::new().unwrap();
    let templates = home.path().join("templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(templates.join("LICENSE.j2"), "custom").unwrap();

    viperx(&home)
        .args(["templates", "list", "--template-dir", &template_dir(&home)])
        .assert()
        .success()
        .stdout(predicate::str::contains("ViperX Templates"))
        .stdout(predicate::str::contains("README.md.j2"))
        .stdout(predicate::str::is_match(r"LICENSE\.j2\s+user").unwrap())
        .stdout(predicate::str::is_match(r"README\.md\.j2\s+bundled").unwrap());
}

#[test]
fn templates_list_as_json() {
    let home = TempDir::new().unwrap();
    let assert = viperx(&home)
        .args(["templates", "list", "--format", "json", "--template-dir", &template_dir(&home)])
        .assert()
        .success();

    let rows: Vec<serde_json::Value> = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(rows.len(), 12);
    let names: Vec<_> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn eject_then_everything_is_user() {
    let home = TempDir::new().unwrap();
    let dir = template_dir(&home);

    viperx(&home)
        .args(["templates", "eject", "--template-dir", &dir])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ejected 12 templates"));

    assert!(Path::new(&dir).join("pyproject.toml.j2").is_file());

    viperx(&home)
        .args(["templates", "list", "--format", "list", "--template-dir", &dir])
        .assert()
        .success()
        .stdout(predicate::str::contains("gitignore.j2"));

    viperx(&home)
        .args(["templates", "list", "--template-dir", &dir])
        .assert()
        .success()
        .stdout(predicate::str::contains("bundled").not());

    // Ejecting again overwrites and says so.
    viperx(&home)
        .args(["templates", "eject", "--template-dir", &dir])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced 12"));
}

#[test]
fn eject_uses_configured_directory() {
    let home = TempDir::new().unwrap();
    let target = home.path().join("from-config");
    let cfg = home.path().join("viperx.toml");
    fs::write(
        &cfg,
        format!("[templates]\nuser_dir = {:?}\n", target.display().to_string()),
    )
    .unwrap();

    viperx(&home)
        .arg("-c")
        .arg(&cfg)
        .args(["templates", "eject"])
        .assert()
        .success();

    assert!(target.join("README.md.j2").is_file());
}

#[test]
fn templates_show_prints_content() {
    let home = TempDir::new().unwrap();
    viperx(&home)
        .args(["templates", "show", "README.md.j2", "--template-dir", &template_dir(&home)])
        .assert()
        .success()
        .stdout(predicate::str::contains("{{ project_name }}"));
}

#[test]
fn templates_show_missing_is_not_found() {
    let home = TempDir::new().unwrap();
    viperx(&home)
        .args(["templates", "show", "Dockerfile.j2", "--template-dir", &template_dir(&home)])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("searched: user, bundled"));
}

#[test]
fn templates_show_rejects_escaping_names() {
    let home = TempDir::new().unwrap();
    viperx(&home)
        .args(["templates", "show", "../secrets.j2", "--template-dir", &template_dir(&home)])
        .assert()
        .code(2);
}

// ── learn / explain ───────────────────────────────────────────────────────────

#[test]
fn learn_lists_and_shows_topics() {
    let home = TempDir::new().unwrap();
    viperx(&home)
        .arg("learn")
        .assert()
        .success()
        .stdout(predicate::str::contains("packaging"))
        .stdout(predicate::str::contains("ml-dl"));

    viperx(&home)
        .args(["learn", "uv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://docs.astral.sh/uv/"));
}

#[test]
fn learn_unknown_topic_lists_available() {
    let home = TempDir::new().unwrap();
    viperx(&home)
        .args(["learn", "cobol"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cobol"))
        .stderr(predicate::str::contains("packaging"));
}

#[test]
fn explain_key_and_unknown_key() {
    let home = TempDir::new().unwrap();
    viperx(&home)
        .args(["explain", "src-layout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/"));

    viperx(&home)
        .args(["explain", "nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("entry_points"));
}

// ── config / completions ─────────────────────────────────────────────────────

#[test]
fn builtin_defaults_without_config_file() {
    let home = TempDir::new().unwrap();
    viperx(&home)
        .args(["config", "get", "defaults.license"])
        .assert()
        .success()
        .stdout("MIT\n");

    viperx(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("python_version = \"3.11\""));
}

#[test]
fn config_get_reads_file_and_env() {
    let home = TempDir::new().unwrap();
    let cfg = home.path().join("viperx.toml");
    fs::write(&cfg, "[defaults]\nauthor = \"Grace\"\n").unwrap();

    viperx(&home)
        .arg("-c")
        .arg(&cfg)
        .args(["config", "get", "defaults.author"])
        .assert()
        .success()
        .stdout("Grace\n");

    viperx(&home)
        .arg("-c")
        .arg(&cfg)
        .env("VIPERX__DEFAULTS__AUTHOR", "Env Wins")
        .args(["config", "get", "defaults.author"])
        .assert()
        .success()
        .stdout("Env Wins\n");
}

#[test]
fn config_errors_exit_four() {
    let home = TempDir::new().unwrap();
    viperx(&home)
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4);

    viperx(&home)
        .arg("-c")
        .arg(home.path().join("missing.toml"))
        .args(["config", "list"])
        .assert()
        .code(4);

    let bad = home.path().join("bad.toml");
    fs::write(&bad, "[defaults]\nproject_type = \"web\"\n").unwrap();
    viperx(&home)
        .arg("-c")
        .arg(&bad)
        .arg("learn")
        .assert()
        .code(4);
}

#[test]
fn config_defaults_feed_new() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let cfg = home.path().join("viperx.toml");
    fs::write(
        &cfg,
        "[defaults]\nproject_type = \"ml\"\nlicense = \"Apache-2.0\"\n",
    )
    .unwrap();

    viperx(&home)
        .arg("-c")
        .arg(&cfg)
        .args(["new", "forest", "--template-dir", &template_dir(&home)])
        .arg("-o")
        .arg(out.path())
        .assert()
        .success();

    let root = out.path().join("forest");
    assert!(root.join("src/forest/data_loader.py").is_file());
    assert!(fs::read_to_string(root.join("LICENSE")).unwrap().contains("Apache"));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    viperx(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("viperx"));
}
