use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::SeatIndex;
use crate::eval::Score;

/// Один банк раздачи: сайд-пот вокруг уровня all-in или финальный банк.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    /// Доля одного места в этом банке: насколько уровень all-in,
    /// вокруг которого вырезан банк, выше предыдущего уровня.
    /// У финального банка – 0.
    pub top_share: Chips,
    pub amt: Chips,
    /// Места, которые могут выиграть этот банк.
    pub eligible_player_nums: Vec<SeatIndex>,
    /// Победители (несколько при ничьей).
    pub winning_player_nums: Vec<SeatIndex>,
    /// Лучшая пятикарточная рука банка (пусто, если шоудауна не было).
    pub winning_hand: Vec<Card>,
    /// Меньше – лучше. `None`, если руки не сравнивались.
    pub winning_score: Option<Score>,
}

impl Pot {
    pub fn new(top_share: Chips) -> Self {
        Self {
            top_share,
            ..Self::default()
        }
    }

    pub fn add(&mut self, amount: Chips) {
        self.amt += amount;
    }

    pub fn is_eligible(&self, seat: SeatIndex) -> bool {
        self.eligible_player_nums.contains(&seat)
    }
}
