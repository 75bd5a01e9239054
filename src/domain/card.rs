use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

/// Ранг карты. Числовое значение = номинал (двойка = 2, туз = 14).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Все ранги от младшего к старшему.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Ранг по номиналу 2..=14.
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.get(value.checked_sub(2)? as usize).copied()
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    fn symbol(self) -> char {
        match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            // 2..=9 всегда однозначная цифра
            r => (b'0' + r.value()) as char,
        }
    }
}

/// Карта стандартной 52-карточной колоды.
///
/// Движок не интерпретирует карты сам: их сравнивает только `eval`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("строка карты должна состоять из двух символов: {0:?}")]
    BadLength(String),

    #[error("неизвестный ранг: {0}")]
    BadRank(char),

    #[error("неизвестная масть: {0}")]
    BadSuit(char),
}

impl fmt::Display for Card {
    /// Формат вида `Ah`, `Td`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let &[r_ch, s_ch] = chars.as_slice() else {
            return Err(ParseCardError::BadLength(s.to_string()));
        };

        let rank = Rank::ALL
            .into_iter()
            .find(|r| r.symbol() == r_ch.to_ascii_uppercase())
            .ok_or(ParseCardError::BadRank(r_ch))?;
        let suit = Suit::ALL
            .into_iter()
            .find(|s| s.symbol() == s_ch.to_ascii_lowercase())
            .ok_or(ParseCardError::BadSuit(s_ch))?;

        Ok(Card { rank, suit })
    }
}

/// Разобрать список карт через пробел: `"Ah Kd 7c"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split_whitespace().map(str::parse).collect()
}
