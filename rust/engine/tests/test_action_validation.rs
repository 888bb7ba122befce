mod common;

use common::new_game;
use holdem_engine::engine::{apply_action, apply_request, deal_new_hand};
use holdem_engine::errors::GameError;
use holdem_engine::player::Action;

#[test]
fn acting_before_any_deal_is_rejected() {
    let gs = new_game();
    assert_eq!(
        apply_action(&gs, "alice", Action::Check),
        Err(GameError::HandNotDealt)
    );
    assert_eq!(
        apply_action(&gs, "carol", Action::Check),
        Err(GameError::UnknownPlayer("carol".into()))
    );
}

#[test]
fn rejected_actions_leave_the_state_untouched() {
    let gs = deal_new_hand(&new_game()).unwrap();
    let snapshot = gs.clone();

    let attempts = [
        ("alice", Action::Check),
        ("bob", Action::Check),
        ("bob", Action::Raise(25)),
        ("nobody", Action::Fold),
    ];
    for (who, action) in attempts {
        let first = apply_action(&gs, who, action);
        let second = apply_action(&gs, who, action);
        assert!(first.is_err(), "{} {}", who, action);
        assert_eq!(first, second, "{} {}", who, action);
    }

    let mut live = gs.clone();
    assert_eq!(
        live.apply_action("alice", Action::Call),
        Err(GameError::NotYourTurn {
            expected: 1,
            actual: 0
        })
    );
    for _ in 0..2 {
        assert_eq!(
            live.apply_action("bob", Action::Check),
            Err(GameError::CannotCheck { to_call: 10 })
        );
    }
    assert_eq!(live, snapshot);
    assert_eq!(gs, snapshot);
}

#[test]
fn finished_hand_rejects_further_actions() {
    let gs = deal_new_hand(&new_game()).unwrap();
    let done = apply_action(&gs, "bob", Action::Fold).unwrap();
    assert_eq!(
        apply_action(&done, "bob", Action::Call),
        Err(GameError::AlreadyFolded)
    );
    assert_eq!(
        apply_action(&done, "alice", Action::Check),
        Err(GameError::HandAlreadyComplete)
    );
}

#[test]
fn loosely_typed_requests_are_parsed_first() {
    let gs = deal_new_hand(&new_game()).unwrap();
    assert_eq!(
        apply_request(&gs, "bob", "raise", None),
        Err(GameError::AmountRequired)
    );
    assert_eq!(
        apply_request(&gs, "bob", "limp", None),
        Err(GameError::UnknownAction("limp".into()))
    );
    let next = apply_request(&gs, "bob", "Call", None).unwrap();
    assert_eq!(next.to_act(), Some(0));
}
