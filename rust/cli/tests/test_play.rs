mod helpers;

use helpers::run_cli;
use holdem_engine::logger::HandRecord;

#[test]
fn small_blind_fold_ends_the_hand() {
    let r = run_cli(&["play", "--seed", "42"], "fold\n");
    assert_eq!(r.code, 0, "stderr: {}", r.stderr);
    assert!(r.stdout.contains("Hand 1"));
    assert!(r.stdout.contains("Dealer: p1"));
    assert!(r.stdout.contains("Action: p2 fold"));
    assert!(r.stdout.contains("Result: p1 wins (opponent folded)"));
    assert!(r.stdout.contains("Hands played: 1"));
    assert!(r.stdout.contains("Final stacks: p1 1010 | p2 990"));
}

#[test]
fn checked_down_hand_reaches_showdown() {
    let input = "call\ncheck\ncheck\ncheck\ncheck\ncheck\ncheck\ncheck\n";
    let r = run_cli(&["play", "--seed", "5"], input);
    assert_eq!(r.code, 0, "stderr: {}", r.stderr);
    assert!(r.stdout.contains("Flop: ["));
    assert!(r.stdout.contains("Turn: ["));
    assert!(r.stdout.contains("River: ["));
    assert!(r.stdout.contains("Showdown p1:"));
    assert!(r.stdout.contains("Showdown p2:"));
    assert!(r.stdout.contains("Result:"));
    assert!(r.stdout.contains("Hands played: 1"));
}

#[test]
fn rejected_input_reprompts_without_changing_the_hand() {
    let r = run_cli(&["play", "--seed", "42"], "check\nraise 30\ndance\nfold\n");
    assert_eq!(r.code, 0);
    assert!(r.stderr.contains("Invalid action: Cannot check while facing a bet of 10"));
    assert!(r.stderr.contains("Raise to 30 is below the minimum of 40"));
    assert!(r.stderr.contains("Unrecognized action 'dance'"));
    assert!(r.stdout.contains("Final stacks: p1 1010 | p2 990"));
}

#[test]
fn quit_and_eof_stop_the_session() {
    let quit = run_cli(&["play", "--hands", "3"], "q\n");
    assert_eq!(quit.code, 0);
    assert!(quit.stdout.contains("Quit requested."));
    assert!(quit.stdout.contains("Hands played: 0"));

    let eof = run_cli(&["play", "--hands", "3", "--seed", "1"], "fold\n");
    assert_eq!(eof.code, 0);
    assert!(eof.stdout.contains("Hands played: 1"));
}

#[test]
fn dealer_alternates_between_hands() {
    let r = run_cli(&["play", "--hands", "2", "--seed", "9"], "fold\nfold\n");
    assert_eq!(r.code, 0, "stderr: {}", r.stderr);
    assert!(r.stdout.contains("Hand 2"));
    assert!(r.stdout.contains("Dealer: p2"));
    assert!(r.stdout.contains("Action: p1 fold"));
    // p1 won 10 then lost 10
    assert!(r.stdout.contains("Final stacks: p1 1000 | p2 1000"));
}

#[test]
fn zero_hands_is_an_error() {
    let r = run_cli(&["play", "--hands", "0"], "");
    assert_eq!(r.code, 2);
    assert!(r.stderr.contains("hands must be >= 1"));
}

#[test]
fn log_file_gets_one_record_per_hand() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands").join("session.jsonl");
    let path_str = path.to_str().unwrap();

    let r = run_cli(
        &["play", "--hands", "2", "--seed", "3", "--log", path_str],
        "fold\nfold\n",
    );
    assert_eq!(r.code, 0, "stderr: {}", r.stderr);

    let text = std::fs::read_to_string(&path).unwrap();
    let records: Vec<HandRecord> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].hand_id, "play-000001");
    assert_eq!(records[1].hand_id, "play-000002");
    assert_eq!(records[0].seed, Some(4));
    assert_eq!(records[0].result.as_deref(), Some("seat 0 wins (opponent folded)"));
    assert!(records.iter().all(|r| r.ts.is_some()));
}
