use crate::helpers::cli_runner::CliRunner;
use serial_test::serial;

#[test]
#[serial]
fn help_lists_all_commands() {
    let res = CliRunner::new().run(&["--help"]);
    assert_eq!(res.exit_code, 0, "--help should exit with code 0");
    for cmd in ["play", "cfg", "bench"] {
        assert!(res.stdout.contains(cmd), "help should list `{}`", cmd);
    }
}

#[test]
#[serial]
fn version_prints_version_and_exits_zero() {
    let res = CliRunner::new().run(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
#[serial]
fn unknown_subcommand_shows_command_list_on_stderr() {
    let res = CliRunner::new().run(&["deal"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(
        res.stderr.contains("Commands:"),
        "stderr should contain the command list\n---stderr---\n{}",
        res.stderr
    );
    for cmd in ["play", "cfg", "bench"] {
        assert!(res.stderr.contains(&format!("  {}", cmd)));
    }
}

#[test]
#[serial]
fn play_rejects_zero_and_too_many_players() {
    let cli = CliRunner::new();
    assert_eq!(cli.run(&["play", "0"]).exit_code, 2);
    assert_eq!(cli.run(&["play", "24"]).exit_code, 2);
    assert_eq!(cli.run(&["play", "many"]).exit_code, 2);
}

#[test]
#[serial]
fn bench_reports_iterations() {
    let res = CliRunner::new().run(&["bench"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.starts_with("Benchmark: 200 iters in "));
}
