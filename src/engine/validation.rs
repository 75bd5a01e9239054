use crate::domain::{Chips, SeatIndex, Stage, Table};
use crate::engine::actions::PlayerAction;
use crate::engine::errors::EngineError;

/// Проверка, может ли место выполнить действие при текущем состоянии стола.
///
/// Возвращает, сколько фишек действие положит в банк.
pub fn validate_action(
    table: &Table,
    seat: SeatIndex,
    action: &PlayerAction,
) -> Result<Chips, EngineError> {
    let player = table.seat(seat)?;

    let (stage, betting) = table.status.stage_and_betting();
    if !betting || matches!(stage, Stage::PreDeal | Stage::Over) {
        return Err(EngineError::NoBettingRound);
    }
    if seat != table.action_num || !player.can_act() {
        return Err(EngineError::NotYourTurn(seat));
    }

    let to_call = table.to_call();
    let owed = to_call - player.bet;
    let stack = player.stack;

    match *action {
        PlayerAction::Fold => Ok(Chips::ZERO),

        PlayerAction::Check => {
            if owed.is_zero() {
                Ok(Chips::ZERO)
            } else {
                Err(EngineError::CannotCheck)
            }
        }

        // Call на короткий стек – это all-in call, он разрешён.
        PlayerAction::Call => {
            if owed.is_zero() {
                Err(EngineError::NothingToCall)
            } else {
                Ok(owed.min(stack))
            }
        }

        PlayerAction::AllIn => Ok(stack),

        PlayerAction::Bet(amount) => {
            if amount > stack {
                return Err(EngineError::NotEnoughChips);
            }
            let limit = table.limit();
            if amount > limit || (to_call.is_zero() && !table.can_open(seat)) {
                return Err(EngineError::OverLimit { limit });
            }

            let all_in = amount == stack;
            if amount.is_zero() || (amount < owed && !all_in) {
                return Err(EngineError::BetTooSmall {
                    amount,
                    to_call: owed,
                });
            }

            let raise = (player.bet + amount) - to_call;
            if !raise.is_zero() && raise < table.min_raise && !all_in {
                return Err(EngineError::RaiseTooSmall {
                    raise,
                    min_raise: table.min_raise,
                });
            }

            Ok(amount)
        }
    }
}
