use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;
use serial_test::serial;
use showdown_engine::logger::ShowdownRecord;
use std::fs;

#[test]
#[serial]
fn play_prints_a_bordered_table_with_every_seat() {
    let res = CliRunner::new().run(&["play", "5", "--seed", "42", "--no-color"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let lines: Vec<&str> = res.stdout.lines().collect();
    assert_eq!(lines[0], "Dealing Cards for 5 players.");
    assert!(lines[1].starts_with("Board: ["));
    assert!(lines[2].starts_with("+-"));
    assert!(lines[3].starts_with("| Name"));
    for n in 1..=5 {
        assert!(res.stdout.contains(&format!("| Player #{} ", n)));
    }
    // border, header, border, 5 rows, border
    assert!(lines[10].starts_with("+-"));
    assert!(lines[11].starts_with("Winner: ") || lines[11].starts_with("Split pot: "));
}

#[test]
#[serial]
fn same_seed_reproduces_output() {
    let cli = CliRunner::new();
    let a = cli.run(&["play", "4", "--seed", "2024", "--no-color"]);
    let b = cli.run(&["play", "4", "--seed", "2024", "--no-color"]);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
#[serial]
fn single_player_always_wins() {
    let res = CliRunner::new().run(&["play", "1", "--seed", "8", "--no-color"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Winner: Player #1\n"));
}

#[test]
#[serial]
fn output_file_records_match_printed_winner() {
    let tfm = TempFileManager::new().expect("temp dir");
    let path = tfm.path("logs/showdowns.jsonl");
    let path_str = path.to_string_lossy().into_owned();

    let res = CliRunner::new().run(&[
        "play",
        "3",
        "--seed",
        "13",
        "--no-color",
        "--output",
        path_str.as_str(),
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let content = fs::read_to_string(&path).expect("read output");
    assert_eq!(content.lines().count(), 1);
    let record: ShowdownRecord = serde_json::from_str(content.trim_end()).expect("parse record");
    assert_eq!(record.seed, Some(13));
    assert_eq!(record.board.len(), 5);
    assert_eq!(record.seats.len(), 3);
    assert!(record.ts.is_some());

    let names: Vec<String> = record
        .winners
        .iter()
        .map(|id| format!("Player #{}", id + 1))
        .collect();
    let expected = if names.len() > 1 {
        format!("Split pot: {}", names.join(", "))
    } else {
        format!("Winner: {}", names[0])
    };
    assert!(res.stdout.contains(&expected));
}

#[test]
#[serial]
fn colour_highlights_winning_rows() {
    let res = CliRunner::new().run(&["play", "3", "--seed", "5"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("\x1b[34mPlayer #"));
    assert!(res.stdout.contains("\x1b[0m"));
}
