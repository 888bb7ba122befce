mod common;

use std::fs;
use std::path::PathBuf;

use common::{new_game, stacked};
use holdem_engine::errors::GameError;
use holdem_engine::game::Phase;
use holdem_engine::logger::{HandLogger, HandRecord};
use holdem_engine::player::Action;

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

#[test]
fn record_captures_a_showdown_hand() {
    let mut gs = new_game();
    gs.deal_new_hand_with_deck(stacked("Ah Ad", "Kc Kd", "2s 7h 9c Jd 3s"))
        .unwrap();
    assert_eq!(HandRecord::from_state(&gs), Err(GameError::HandInProgress));

    gs.apply_action("bob", Action::Raise(60)).unwrap();
    gs.apply_action("alice", Action::Call).unwrap();
    for _ in 0..3 {
        gs.apply_action("bob", Action::Check).unwrap();
        gs.apply_action("alice", Action::Check).unwrap();
    }

    let rec = HandRecord::from_state(&gs).unwrap();
    assert_eq!(rec.hand_id, "g1-000001");
    assert_eq!(rec.seed, None);
    assert_eq!(rec.actions.len(), 8);
    assert_eq!(rec.actions[0].seat, 1);
    assert_eq!(rec.actions[0].phase, Phase::Preflop);
    assert_eq!(rec.actions[0].action, Action::Raise(60));
    assert_eq!(rec.actions[7].phase, Phase::River);
    assert_eq!(rec.board.len(), 5);
    assert_eq!(rec.result.as_deref(), Some("seat 0 wins (best hand)"));
    assert_eq!(rec.showdown.as_ref().unwrap().winners, vec![0]);
    let meta = rec.meta.as_ref().unwrap();
    assert_eq!(meta["stacks"], serde_json::json!([1060, 940]));
}

#[test]
fn logger_writes_one_line_per_hand_with_timestamp() {
    let path = tmp_path("handlog");
    let mut logger = HandLogger::create(&path).expect("create logger");

    let mut gs = new_game();
    for _ in 0..2 {
        gs.deal_new_hand().unwrap();
        let seat = gs.to_act().unwrap();
        let id = gs.players()[seat].id.clone();
        gs.apply_action(id.as_str(), Action::Fold).unwrap();
        logger.write(&HandRecord::from_state(&gs).unwrap()).unwrap();
    }
    drop(logger);

    let text = fs::read_to_string(&path).expect("read file");
    assert!(!text.contains('\r'));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    let second: HandRecord = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second.hand_id, "g1-000002");
    assert_eq!(second.seed, Some(gs.config().seed.wrapping_add(2)));
    assert!(second.ts.is_some());
    assert_eq!(second.result.as_deref(), Some("seat 1 wins (opponent folded)"));
    let _ = fs::remove_file(&path);
}
