use log::info;

use crate::domain::{Card, Chips, SeatIndex, Table};
use crate::engine::pot::Pot;
use crate::engine::side_pots::carve_pots;
use crate::eval::Score;

impl Table {
    /// Лучшая рука места на текущем борде, если у места есть обе карты,
    /// а на борде все пять.
    pub(crate) fn hand_of(&self, seat: SeatIndex) -> Option<([Card; 5], Score)> {
        let hole = self.players.get(seat as usize)?.hole_cards()?;
        let board: [Card; 5] = self.community_cards.as_slice().try_into().ok()?;
        Some(self.ranker.best_five_of_seven(hole, board))
    }

    /// Шоудаун после ривера: нарезать банки, раздать их, начать новую раздачу.
    pub(crate) fn settle_showdown(&mut self) {
        let before = self.chips_in_play();
        let contributed: Chips = self.players.iter().map(|p| p.total_bet).sum();

        let mut pots = carve_pots(&self.players);
        debug_assert_eq!(
            contributed,
            pots.iter().map(|p| p.amt).sum::<Chips>(),
            "сумма банков не совпадает с вкладами"
        );
        for p in self.players.iter_mut() {
            p.total_bet = Chips::ZERO;
        }
        for pot in pots.iter_mut() {
            self.award_pot(pot);
        }

        debug_assert_eq!(before, self.chips_in_play(), "фишки не сходятся после шоудауна");

        self.pots = pots;
        self.reset_for_next_hand();
    }

    /// Определить победителей банка и раздать его.
    ///
    /// Меньше очки – сильнее рука; равные очки делят банк. Места без
    /// оцениваемой руки проигрывают любой оценённой.
    fn award_pot(&mut self, pot: &mut Pot) {
        let mut best: Option<Score> = None;
        let mut winners: Vec<SeatIndex> = Vec::new();
        let mut winning_hand: Vec<Card> = Vec::new();

        for &seat in &pot.eligible_player_nums {
            match self.hand_of(seat) {
                Some((hand, score)) if best.map_or(true, |b| score < b) => {
                    best = Some(score);
                    winners = vec![seat];
                    winning_hand = hand.to_vec();
                }
                Some((_, score)) if best == Some(score) => winners.push(seat),
                Some(_) => {}
                None if best.is_none() => winners.push(seat),
                None => {}
            }
        }

        pot.winning_score = best;
        pot.winning_hand = winning_hand;
        pot.winning_player_nums = winners;

        if pot.winning_player_nums.is_empty() {
            return;
        }

        let (share, remainder) = pot.amt.split(pot.winning_player_nums.len());
        let odd_chip_order = self.order_after_dealer(&pot.winning_player_nums);

        for (k, &seat) in odd_chip_order.iter().enumerate() {
            let mut prize = share;
            if (k as u64) < remainder.0 {
                prize += Chips(1);
            }
            self.players[seat as usize].stack += prize;
            info!("место {seat} выигрывает {prize} из банка {}", pot.amt);
        }
    }

    /// Упорядочить места по кругу, начиная с первого после дилера.
    fn order_after_dealer(&self, seats: &[SeatIndex]) -> Vec<SeatIndex> {
        let n = self.players.len().max(1);
        let dealer = self.dealer_num as usize;
        let mut ordered = seats.to_vec();
        ordered.sort_by_key(|&s| (s as usize + n - dealer - 1) % n);
        ordered
    }
}
