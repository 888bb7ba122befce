use crate::errors::GameError;
use crate::player::Action as A;

/// An action after sizing rules have been applied, carrying the chips it moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips needed to match the current bet
    Call(u32),
    /// Street bet becomes `to`, moving `chips` from the stack
    Raise { to: u32, chips: u32 },
    /// The whole stack goes in; `to` is the resulting street bet
    AllIn { to: u32, chips: u32 },
}

/// Validates a player action according to betting rules and stack size.
///
/// Converts an [`crate::player::Action`] into a [`ValidatedAction`], enforcing the
/// minimum raise and the two automatic caps: a call the stack cannot cover and
/// a raise the stack cannot cover both become all-in instead of failing.
///
/// # Arguments
///
/// * `stack` - Player's remaining chip stack
/// * `street_bet` - Chips the player already put in on this street
/// * `current_bet` - Street bet every player must match
/// * `min_raise` - Minimum raise increment (big blind, or the last full raise if larger)
/// * `action` - The action the player wishes to perform
///
/// # Errors
///
/// - [`GameError::CannotCheck`] - Player tries to check when facing a bet
/// - [`GameError::BelowMinimumRaise`] - Raise target is below `current_bet + min_raise`
///   while the stack could cover the minimum
///
/// # Examples
///
/// ```
/// use holdem_engine::rules::{validate_action, ValidatedAction};
/// use holdem_engine::player::Action;
///
/// // Facing 20 with 10 already in: calling costs 10
/// let result = validate_action(990, 10, 20, 20, Action::Call);
/// assert_eq!(result, Ok(ValidatedAction::Call(10)));
///
/// // A raise the stack cannot cover is capped to all-in
/// let result = validate_action(80, 0, 50, 50, Action::Raise(500));
/// assert_eq!(result, Ok(ValidatedAction::AllIn { to: 80, chips: 80 }));
/// ```
///
/// ```
/// use holdem_engine::rules::validate_action;
/// use holdem_engine::player::Action;
/// use holdem_engine::errors::GameError;
///
/// let result = validate_action(1000, 0, 50, 50, Action::Check);
/// assert!(matches!(result, Err(GameError::CannotCheck { to_call: 50 })));
///
/// let result = validate_action(1000, 0, 50, 50, Action::Raise(70));
/// assert!(matches!(result, Err(GameError::BelowMinimumRaise { amount: 70, minimum: 100 })));
/// ```
pub fn validate_action(
    stack: u32,
    street_bet: u32,
    current_bet: u32,
    min_raise: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    let to_call = current_bet.saturating_sub(street_bet);
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::CannotCheck { to_call })
            }
        }
        A::Call => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else if stack <= to_call {
                Ok(ValidatedAction::AllIn {
                    to: street_bet + stack,
                    chips: stack,
                })
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Raise(to) => {
            let max_to = street_bet + stack;
            let minimum = current_bet + min_raise;
            if to >= max_to || max_to < minimum {
                Ok(ValidatedAction::AllIn {
                    to: max_to,
                    chips: stack,
                })
            } else if to < minimum {
                Err(GameError::BelowMinimumRaise {
                    amount: to,
                    minimum,
                })
            } else {
                Ok(ValidatedAction::Raise {
                    to,
                    chips: to - street_bet,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_with_nothing_owed_is_a_check() {
        assert_eq!(validate_action(500, 20, 20, 20, A::Call), Ok(ValidatedAction::Check));
    }

    #[test]
    fn call_with_insufficient_stack_is_allin_call() {
        let va = validate_action(60, 0, 100, 100, A::Call).unwrap();
        assert_eq!(va, ValidatedAction::AllIn { to: 60, chips: 60 });
    }

    #[test]
    fn short_stack_below_min_raise_goes_allin_without_error() {
        // facing 100, min raise to 200, only 130 behind
        let va = validate_action(130, 0, 100, 100, A::Raise(150)).unwrap();
        assert_eq!(va, ValidatedAction::AllIn { to: 130, chips: 130 });
    }

    #[test]
    fn exact_min_raise_is_accepted() {
        let va = validate_action(1000, 10, 20, 20, A::Raise(40)).unwrap();
        assert_eq!(va, ValidatedAction::Raise { to: 40, chips: 30 });
    }

    #[test]
    fn opening_bet_needs_the_big_blind() {
        let err = validate_action(1000, 0, 0, 20, A::Raise(10)).unwrap_err();
        assert_eq!(
            err,
            GameError::BelowMinimumRaise {
                amount: 10,
                minimum: 20
            }
        );
    }
}
