mod common;

use common::new_game;
use holdem_engine::game::{GameState, Phase};
use holdem_engine::player::Action;

fn play_out(gs: &mut GameState) {
    while !gs.is_hand_complete() {
        let seat = gs.to_act().expect("someone to act");
        let id = gs.players()[seat].id.clone();
        let action = if gs.to_call(seat) > 0 {
            Action::Call
        } else {
            Action::Check
        };
        gs.apply_action(id.as_str(), action).unwrap();
    }
}

#[test]
fn mid_hand_state_round_trips_and_continues_identically() {
    let mut gs = new_game();
    gs.deal_new_hand().unwrap();
    gs.apply_action("bob", Action::Raise(60)).unwrap();
    gs.apply_action("alice", Action::Call).unwrap();
    assert_eq!(gs.phase(), Phase::Flop);

    let json = serde_json::to_string(&gs).unwrap();
    let mut restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, gs);

    play_out(&mut gs);
    play_out(&mut restored);
    assert_eq!(restored, gs);
    assert_eq!(restored.community(), gs.community());

    gs.deal_new_hand().unwrap();
    restored.deal_new_hand().unwrap();
    assert_eq!(restored, gs);
}

#[test]
fn chips_are_conserved_over_many_hands() {
    let mut gs = new_game();
    for _ in 0..25 {
        if gs.deal_new_hand().is_err() {
            break;
        }
        play_out(&mut gs);
        assert_eq!(gs.pot(), 0);
        let total: u32 = gs.players().iter().map(|p| p.stack()).sum();
        assert_eq!(total, 2000);
    }
    assert!(gs.hand_number() >= 1);
}
