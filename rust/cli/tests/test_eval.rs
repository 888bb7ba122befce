mod helpers;

use helpers::run_cli;

#[test]
fn eval_reports_the_best_hand() {
    let r = run_cli(&["eval", "9h", "Th", "Jh", "Qc", "Kd", "2h", "4h"], "");
    assert_eq!(r.code, 0, "stderr: {}", r.stderr);
    assert!(r.stdout.contains("Hand: Flush, Jack high"));
    assert!(r.stdout.contains("Category: Flush"));
}

#[test]
fn eval_rejects_bad_card_text() {
    let r = run_cli(&["eval", "As", "Kd", "Qh", "Jc", "1x"], "");
    assert_eq!(r.code, 2);
    assert!(r.stderr.contains("Invalid input"));
}

#[test]
fn eval_rejects_duplicates() {
    let r = run_cli(&["eval", "As", "As", "Qh", "Jc", "Td"], "");
    assert_eq!(r.code, 2);
    assert!(r.stderr.contains("Duplicate card As"));
}

#[test]
fn unknown_command_lists_commands() {
    let r = run_cli(&["shuffle"], "");
    assert_eq!(r.code, 2);
    assert!(r.stderr.contains("Commands:"));
    assert!(r.stderr.contains("  play"));
}

#[test]
fn help_goes_to_stdout() {
    let r = run_cli(&["--help"], "");
    assert_eq!(r.code, 0);
    assert!(r.stdout.contains("eval"));
    assert!(r.stderr.is_empty());
}
