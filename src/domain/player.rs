use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Stage;

/// Состояние игрока за столом. Индекс места = позиция в `Table::players`.
///
/// Запись принадлежит столу; наружу она попадает только копией внутри `TableView`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    /// Сидит за столом и готов играть (есть фишки, не sit-out).
    pub ready: bool,
    /// Участвует в текущей раздаче (не сфолдил).
    #[serde(rename = "in")]
    pub in_hand: bool,
    /// Дошёл до конца предыдущей раздачи, не сфолдив.
    /// Нужен правилам открытия карт на PreDeal, когда `in_hand` уже сброшен.
    pub in_last_hand: bool,
    /// Уже действовал в текущем раунде ставок.
    pub acted: bool,
    /// Фишки, не поставленные в банк.
    pub stack: Chips,
    /// Ставка в текущем раунде.
    pub bet: Chips,
    /// Всё, что поставлено за раздачу.
    pub total_bet: Chips,
    /// Карманные карты; `None` – карты нет или она скрыта.
    pub cards: [Option<Card>; 2],
}

impl Player {
    /// Свежая запись для только что добавленного места.
    pub fn new() -> Self {
        Self::default()
    }

    /// All-in: в раздаче и стек пуст.
    pub fn is_all_in(&self) -> bool {
        self.in_hand && self.stack.is_zero()
    }

    /// Может ли игрок ещё что-то делать в раздаче.
    pub fn can_act(&self) -> bool {
        self.in_hand && !self.stack.is_zero()
    }

    /// Участие в раздаче с учётом стадии: на PreDeal смотрим на итог прошлой раздачи.
    pub fn is_in_at(&self, stage: Stage) -> bool {
        if stage == Stage::PreDeal {
            self.in_last_hand
        } else {
            self.in_hand
        }
    }

    /// All-in с учётом стадии. На PreDeal раздачи нет, поэтому и all-in нет.
    pub fn is_all_in_at(&self, stage: Stage) -> bool {
        stage != Stage::PreDeal && self.is_all_in()
    }

    /// Поставить фишки в банк. Возвращает реально поставленную сумму
    /// (не больше стека).
    pub fn put_in(&mut self, amount: Chips) -> Chips {
        let real = amount.min(self.stack);
        self.stack -= real;
        self.bet += real;
        self.total_bet += real;
        real
    }

    /// Вернуть непокрытую часть ставки обратно в стек.
    pub fn return_chips(&mut self, amount: Chips) {
        self.stack += amount;
        self.bet -= amount;
        self.total_bet -= amount;
    }

    /// Обе карманные карты, если они есть.
    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        match self.cards {
            [Some(a), Some(b)] => Some([a, b]),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_in_is_capped_by_stack() {
        let mut p = Player {
            in_hand: true,
            stack: Chips(30),
            ..Player::new()
        };
        assert_eq!(p.put_in(Chips(50)), Chips(30));
        assert_eq!(p.bet, Chips(30));
        assert_eq!(p.total_bet, Chips(30));
        assert!(p.is_all_in());

        p.return_chips(Chips(10));
        assert_eq!(p.stack, Chips(10));
        assert_eq!(p.total_bet, Chips(20));
        assert!(!p.is_all_in());
    }

    #[test]
    fn folded_player_with_empty_stack_is_not_all_in() {
        let p = Player {
            in_hand: false,
            stack: Chips::ZERO,
            ..Player::new()
        };
        assert!(!p.is_all_in());
    }
}
