use crate::domain::card::Rank;
use crate::eval::Score;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
        }
    }
}

/// Верхняя граница кодировки силы (24 бита).
const STRENGTH_LIMIT: u32 = 1 << 24;

/// Сила руки: больше – сильнее.
///
/// Схема кодирования (u32):
///   [категория:4 бита][r0:4][r1:4][r2:4][r3:4][r4:4]
/// Ранги от значимого к менее значимому; неиспользуемые позиции = 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandStrength(pub u32);

impl HandStrength {
    pub fn new(category: HandCategory, ranks: &[Rank]) -> Self {
        let mut value = (category as u32) << 20;
        for (i, r) in ranks.iter().take(5).enumerate() {
            value |= (r.value() as u32) << (16 - 4 * i);
        }
        HandStrength(value)
    }

    pub fn category(&self) -> HandCategory {
        let id = ((self.0 >> 20) & 0x0F) as usize;
        HandCategory::ALL
            .get(id)
            .copied()
            .unwrap_or(HandCategory::HighCard)
    }

    /// Перевернуть в очки, где меньше – лучше.
    pub fn to_score(self) -> Score {
        STRENGTH_LIMIT - self.0
    }

    pub fn from_score(score: Score) -> Self {
        HandStrength(STRENGTH_LIMIT.saturating_sub(score))
    }
}

/// Человеческое название руки по её очкам.
pub fn describe_score(score: Score) -> &'static str {
    HandStrength::from_score(score).category().name()
}
