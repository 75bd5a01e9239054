use crate::domain::card::{Card, Rank};

use super::hand_rank::{HandCategory, HandStrength};

/// Лучшая пятёрка из 5–7 карт и её сила.
///
/// Перебираем все сочетания по 5 (для 7 карт – 21 штука).
pub fn best_five(cards: &[Card]) -> ([Card; 5], HandStrength) {
    assert!(
        (5..=7).contains(&cards.len()),
        "best_five ожидает от 5 до 7 карт"
    );

    let n = cards.len();
    let mut best = ([cards[0], cards[1], cards[2], cards[3], cards[4]], HandStrength(0));
    best.1 = evaluate_five(&best.0);

    // Пропускаем две карты (i, j) из n; для n = 5 остаётся один вариант.
    let skips: Vec<(usize, usize)> = match n {
        5 => Vec::new(),
        6 => (0..n).map(|i| (i, i)).collect(),
        _ => (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .collect(),
    };

    for (i, j) in skips {
        let mut five = [cards[0]; 5];
        let mut k = 0;
        for (idx, card) in cards.iter().enumerate() {
            if idx != i && idx != j {
                five[k] = *card;
                k += 1;
            }
        }
        let strength = evaluate_five(&five);
        if strength > best.1 {
            best = (five, strength);
        }
    }

    best
}

/// Оценка строго пятикарточной комбинации.
pub fn evaluate_five(cards: &[Card; 5]) -> HandStrength {
    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);

    let mut counts = [0u8; 15];
    for card in cards {
        counts[card.rank.value() as usize] += 1;
    }

    // (количество, ранг), сначала по количеству, затем по старшинству.
    let mut groups: Vec<(u8, Rank)> = Rank::ALL
        .into_iter()
        .filter(|r| counts[r.value() as usize] > 0)
        .map(|r| (counts[r.value() as usize], r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));

    let ranks: Vec<Rank> = groups.iter().map(|&(_, r)| r).collect();
    let pattern: Vec<u8> = groups.iter().map(|&(c, _)| c).collect();

    let straight_high = straight_high(&counts);

    if let (true, Some(high)) = (is_flush, straight_high) {
        return HandStrength::new(HandCategory::StraightFlush, &[high]);
    }

    let category = match pattern.as_slice() {
        [4, 1] => HandCategory::FourOfAKind,
        [3, 2] => HandCategory::FullHouse,
        _ if is_flush => HandCategory::Flush,
        _ if straight_high.is_some() => HandCategory::Straight,
        [3, 1, 1] => HandCategory::ThreeOfAKind,
        [2, 2, 1] => HandCategory::TwoPair,
        [2, 1, 1, 1] => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    match (category, straight_high) {
        (HandCategory::Straight, Some(high)) => HandStrength::new(category, &[high]),
        _ => HandStrength::new(category, &ranks),
    }
}

/// Старшая карта стрита, если он есть. Для колеса A2345 – пятёрка.
fn straight_high(counts: &[u8; 15]) -> Option<Rank> {
    let present = |v: u8| counts[v as usize] > 0;

    for high in (6..=14u8).rev() {
        if (high - 4..=high).all(present) {
            return Rank::from_value(high);
        }
    }
    if present(14) && (2..=5).all(present) {
        return Some(Rank::Five);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::parse_cards;

    fn strength(s: &str) -> HandStrength {
        let cards = parse_cards(s).unwrap();
        best_five(&cards).1
    }

    #[test]
    fn categories_are_detected() {
        assert_eq!(strength("Ah Kh Qh Jh Th").category(), HandCategory::StraightFlush);
        assert_eq!(strength("9c 9d 9h 9s 2c").category(), HandCategory::FourOfAKind);
        assert_eq!(strength("9c 9d 9h 2s 2c").category(), HandCategory::FullHouse);
        assert_eq!(strength("Ah 9h 7h 4h 2h").category(), HandCategory::Flush);
        assert_eq!(strength("Ac 2d 3h 4s 5c").category(), HandCategory::Straight);
        assert_eq!(strength("7c 7d 7h Ks 2c").category(), HandCategory::ThreeOfAKind);
        assert_eq!(strength("7c 7d Kh Ks 2c").category(), HandCategory::TwoPair);
        assert_eq!(strength("7c 7d Kh Qs 2c").category(), HandCategory::OnePair);
        assert_eq!(strength("7c 9d Kh Qs 2c").category(), HandCategory::HighCard);
    }

    #[test]
    fn wheel_loses_to_six_high_straight() {
        assert!(strength("Ac 2d 3h 4s 5c") < strength("2d 3h 4s 5c 6d"));
    }

    #[test]
    fn kickers_break_ties() {
        assert!(strength("Ac Ad Kh 7s 2c") > strength("Ac Ad Qh 7s 2c"));
        assert_eq!(strength("Ac Ad Kh 7s 2c"), strength("Ah As Kd 7c 2d"));
    }

    #[test]
    fn best_of_seven_picks_the_flush() {
        let cards = parse_cards("Ah 2h 9h Kc Kd 5h Th").unwrap();
        let (hand, s) = best_five(&cards);
        assert_eq!(s.category(), HandCategory::Flush);
        assert!(hand.iter().all(|c| c.suit == cards[0].suit));
    }
}
