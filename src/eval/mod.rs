//! Оценка силы покерных рук (Texas Hold'em).
//!
//! Движок стола видит только трейт [`HandRanker`]: лучшая пятёрка из семи карт
//! и числовой `Score`, где меньше – лучше, а равные очки – ничья.
//! [`StandardRanker`] – реализация по умолчанию.

pub mod evaluator;
pub mod hand_rank;

use crate::domain::card::Card;

pub use evaluator::{best_five, evaluate_five};
pub use hand_rank::{describe_score, HandCategory, HandStrength};

/// Очки руки. Меньше – сильнее.
pub type Score = u32;

/// Внешняя способность ранжировать руки.
pub trait HandRanker {
    /// Лучшая пятикарточная рука из двух карманных и пяти общих карт.
    fn best_five_of_seven(&self, hole: [Card; 2], board: [Card; 5]) -> ([Card; 5], Score);
}

/// Перебор всех 21 пятёрок.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRanker;

impl HandRanker for StandardRanker {
    fn best_five_of_seven(&self, hole: [Card; 2], board: [Card; 5]) -> ([Card; 5], Score) {
        let seven = [
            hole[0], hole[1], board[0], board[1], board[2], board[3], board[4],
        ];
        let (hand, strength) = best_five(&seven);
        (hand, strength.to_score())
    }
}
