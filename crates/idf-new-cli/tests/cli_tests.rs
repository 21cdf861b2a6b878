//! End-to-end tests for the `idf-new` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A resource root under `res/` and an empty working directory `work/`.
struct Fixture {
    tmp: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let res = tmp.path().join("res");

        let template = res.join("idf-templates/base_project");
        write(
            &template.join("CMakeLists.txt"),
            "cmake_minimum_required(VERSION 3.16)\n\
             include($ENV{IDF_PATH}/tools/cmake/project.cmake)\n\
             project(base_project)\n",
        );
        write(
            &template.join("main/CMakeLists.txt"),
            "idf_component_register(SRCS \"main.c\" \"board_impl.c\" INCLUDE_DIRS \".\")\n",
        );
        write(&template.join("main/main.c"), "void app_main(void) {}\n");

        write(&res.join("boards/devkit/board_impl.c"), "// devkit\n");
        write(&res.join("boards/waveshare/round/board_impl.c"), "// round\n");
        write(
            &res.join("boards/waveshare/round/board.json"),
            r#"{
                "display_name": "Waveshare Round",
                "has_touch": true,
                "screen": {"size_inches": 1.85, "resolution": "360x360", "technology": "IPS", "shape": "round"}
            }"#,
        );

        write(&res.join("features/gps/gps.c"), "// gps\n");
        write(&res.join("features/gps/gps.h"), "#pragma once\n");
        write(
            &res.join("features/gps/Kconfig"),
            "menu \"GPS\"\nendmenu\n",
        );

        fs::create_dir_all(tmp.path().join("work")).unwrap();
        Self { tmp }
    }

    fn res(&self) -> PathBuf {
        self.tmp.path().join("res")
    }

    fn work(&self) -> PathBuf {
        self.tmp.path().join("work")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("idf-new").unwrap();
        cmd.current_dir(self.work())
            .env_remove("IDF_NEW_ROOT")
            .env("NO_COLOR", "1")
            .arg("--root")
            .arg(self.res());
        cmd
    }
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

// ── help / version ────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("idf-new")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("boards"))
        .stdout(predicate::str::contains("features"));
}

#[test]
fn version_flag() {
    Command::cargo_bin("idf-new")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_board_flag_is_usage_error() {
    Command::cargo_bin("idf-new")
        .unwrap()
        .args(["new", "demo"])
        .assert()
        .code(2);
}

#[test]
fn no_color_env_accepts_any_non_empty_value() {
    let fx = Fixture::new();
    for value in ["1", "yes", "true"] {
        fx.cmd()
            .env("NO_COLOR", value)
            .arg("features")
            .assert()
            .success()
            .stdout(predicate::str::contains("gps"));
    }
}

#[test]
fn dotted_board_id_installs_flat_file_name() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["new", "demo", "--board", "./devkit"])
        .assert()
        .success();
    assert!(fx.work().join("demo/main/board_devkit.c").is_file());
}

// ── boards / features ─────────────────────────────────────────────────────

#[test]
fn boards_table_shows_metadata() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("boards")
        .assert()
        .success()
        .stdout(predicate::str::contains("devkit"))
        .stdout(predicate::str::contains("waveshare/round  Waveshare Round"))
        .stdout(predicate::str::contains("1.85\" 360x360 IPS round shape"))
        .stdout(predicate::str::contains("touch, round, ips"));
}

#[test]
fn boards_list_is_sorted_ids() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["boards", "--format", "list"])
        .assert()
        .success()
        .stdout("devkit\nwaveshare/round\n");
}

#[test]
fn boards_json_is_parseable() {
    let fx = Fixture::new();
    let out = fx
        .cmd()
        .args(["boards", "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let boards: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(boards.as_array().unwrap().len(), 2);
    assert_eq!(boards[1]["board_id"], "waveshare/round");
    assert_eq!(boards[1]["has_touch"], true);
}

#[test]
fn boards_reports_empty_directory() {
    let fx = Fixture::new();
    let empty = fx.tmp.path().join("empty-boards");
    fs::create_dir_all(&empty).unwrap();

    fx.cmd()
        .arg("boards")
        .arg("--boards-dir")
        .arg(&empty)
        .assert()
        .success()
        .stdout(predicate::str::contains("No boards found"));
}

#[test]
fn features_lists_gps() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("features")
        .assert()
        .success()
        .stdout("gps\tGPS support\n");
}

#[test]
fn features_output_is_unchanged_by_quiet() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["--quiet", "features"])
        .assert()
        .success()
        .stdout("gps\tGPS support\n");
}

// ── new ───────────────────────────────────────────────────────────────────

#[test]
fn new_generates_project_in_working_directory() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["new", "blinky", "--board", "devkit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project created at"))
        .stdout(predicate::str::contains("idf.py set-target"))
        .stdout(predicate::str::contains("idf.py build flash monitor"));

    let root = fx.work().join("blinky");
    let top = fs::read_to_string(root.join("CMakeLists.txt")).unwrap();
    assert!(top.contains("project(blinky)"));
    assert!(!top.contains("base_project"));

    let main = fs::read_to_string(root.join("main/CMakeLists.txt")).unwrap();
    assert!(main.contains("\"board_devkit.c\""));
    assert_eq!(
        fs::read_to_string(root.join("main/board_devkit.c")).unwrap(),
        "// devkit\n"
    );
}

#[test]
fn new_with_gps_and_destination() {
    let fx = Fixture::new();
    fx.cmd()
        .args([
            "new", "tracker", "-b", "waveshare/round", "-d", "out/tracker", "-F", "gps",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enabled features: gps"));

    let main = fx.work().join("out/tracker/main");
    assert!(main.join("board_waveshare_round.c").is_file());
    assert!(main.join("gps.c").is_file());
    assert!(main.join("gps.h").is_file());
    let kconfig = fs::read_to_string(main.join("Kconfig.projbuild")).unwrap();
    assert!(kconfig.contains("menu \"GPS\""));
}

#[test]
fn unknown_board_exits_not_found() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["new", "demo", "--board", "nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Board 'nope' not found"))
        .stderr(predicate::str::contains("devkit, waveshare/round"));

    assert!(!fx.work().join("demo").exists());
}

#[test]
fn escaping_board_id_is_rejected() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["new", "demo", "--board", "../features/gps"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("escapes boards directory"));
}

#[test]
fn existing_destination_is_conflict() {
    let fx = Fixture::new();
    fs::create_dir_all(fx.work().join("demo")).unwrap();

    fx.cmd()
        .args(["new", "demo", "--board", "devkit"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Destination already exists"));
}

#[test]
fn unknown_feature_is_user_error() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["new", "demo", "--board", "devkit", "--feature", "wifi"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown feature flag: wifi"));
}

#[test]
fn hidden_project_name_is_rejected() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["new", ".demo", "--board", "devkit"])
        .assert()
        .code(2);
}

#[test]
fn missing_template_exits_not_found() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("--templates-dir")
        .arg(fx.tmp.path().join("no-template"))
        .args(["new", "demo", "--board", "devkit"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Template directory not found"));
}

// ── config / completions ──────────────────────────────────────────────────

#[test]
fn config_show_prints_resolved_paths() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[resolved]"))
        .stdout(predicate::str::contains("boards_dir"));
}

#[test]
fn root_from_environment_variable() {
    let fx = Fixture::new();
    Command::cargo_bin("idf-new")
        .unwrap()
        .current_dir(fx.work())
        .env("IDF_NEW_PATHS__ROOT", fx.res())
        .args(["boards", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("devkit"));
}

#[test]
fn explicit_missing_config_file_exits_four() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("--config")
        .arg(fx.tmp.path().join("absent.toml"))
        .arg("boards")
        .assert()
        .code(4);
}

#[test]
fn bash_completions_name_the_binary() {
    Command::cargo_bin("idf-new")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("idf-new"));
}
