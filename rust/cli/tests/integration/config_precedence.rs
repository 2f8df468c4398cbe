use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;
use serde_json::Value;
use serial_test::serial;

fn cfg_json(env: &[(&str, &str)]) -> Value {
    let res = CliRunner::new().run_with_env(&["cfg"], env);
    assert_eq!(res.exit_code, 0, "cfg failed: stderr={}", res.stderr);
    serde_json::from_str(&res.stdout).expect("cfg prints JSON")
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    let json = cfg_json(&[]);
    assert_eq!(json["players"]["value"].as_u64(), Some(2));
    assert_eq!(json["players"]["source"].as_str(), Some("default"));
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["color"]["value"].as_bool(), Some(true));
}

#[test]
#[serial]
fn env_overrides_file_per_key() {
    let tfm = TempFileManager::new().expect("temp dir");
    let file = tfm
        .create_file("showdown.toml", "players = 5\nseed = 10\n")
        .expect("write config");
    let file_str = file.to_string_lossy().into_owned();

    let json = cfg_json(&[
        ("SHOWDOWN_CONFIG", file_str.as_str()),
        ("SHOWDOWN_SEED", "77"),
    ]);
    assert_eq!(json["players"]["value"].as_u64(), Some(5));
    assert_eq!(json["players"]["source"].as_str(), Some("file"));
    assert_eq!(json["seed"]["value"].as_u64(), Some(77));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["color"]["source"].as_str(), Some("default"));
}

#[test]
#[serial]
fn cli_flags_override_env() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(
        &["play", "3", "--seed", "4", "--no-color"],
        &[("SHOWDOWN_PLAYERS", "6"), ("SHOWDOWN_SEED", "99")],
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.starts_with("Dealing Cards for 3 players."));
    assert!(res.stdout.ends_with("Seed: 4\n"));

    let res = cli.run_with_env(&["play", "--no-color"], &[("SHOWDOWN_PLAYERS", "6")]);
    assert!(res.stdout.starts_with("Dealing Cards for 6 players."));
}

#[test]
#[serial]
fn env_color_off_disables_ansi() {
    let res = CliRunner::new().run_with_env(&["play", "--seed", "1"], &[("SHOWDOWN_COLOR", "0")]);
    assert_eq!(res.exit_code, 0);
    assert!(!res.stdout.contains('\x1b'));
}

#[test]
#[serial]
fn invalid_config_is_reported_and_exits_two() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(&["cfg"], &[("SHOWDOWN_PLAYERS", "40")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid configuration"), "stderr={}", res.stderr);

    let res = cli.run_with_env(&["play"], &[("SHOWDOWN_SEED", "-1")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
}

#[test]
#[serial]
fn missing_config_file_is_an_error() {
    let tfm = TempFileManager::new().expect("temp dir");
    let missing = tfm.path("nope.toml");
    let res = CliRunner::new().run_with_env(
        &["cfg"],
        &[("SHOWDOWN_CONFIG", missing.to_string_lossy().as_ref())],
    );
    assert_eq!(res.exit_code, 2);
}
