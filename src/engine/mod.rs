//! Покерный движок: позиции, раунды ставок, сайд-поты, шоудаун.
//!
//! Все операции – методы `Table`:
//!   - `deal` – новая раздача или следующая улица (только дилер)
//!   - `apply_action` – действие игрока, чей ход
//!   - `update_round_info` – проверка закрытия раунда после каждого действия
//!   - `reset_for_next_hand` – сброс стола между раздачами

pub mod actions;
pub mod betting;
pub mod errors;
pub mod positions;
pub mod pot;
pub mod showdown;
pub mod side_pots;
pub mod validation;

pub use actions::PlayerAction;
pub use betting::RoundOutcome;
pub use errors::{ConfigError, EngineError};
pub use pot::Pot;
pub use side_pots::carve_pots;
pub use validation::validate_action;

/// Источник случайности для тасовки колоды.
/// Детерминированная реализация – `infra::rng::DeterministicRng`.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
