use log::{debug, info};

use crate::domain::{Chips, Player, SeatIndex, Stage, Table};
use crate::engine::errors::EngineError;
use crate::engine::pot::Pot;

/// Итог проверки раунда после очередного действия.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Раунд продолжается, ход передан дальше.
    Continue,
    /// Улица закрыта, дилер может открывать следующую.
    StreetComplete,
    /// В раздаче остался один игрок, он забрал банк.
    Conceded(SeatIndex),
    /// Ривер закрыт, банки разыграны.
    Showdown,
}

/// Уравнял ли игрок: all-in, либо уже действовал и его ставка равна `to_call`.
fn player_called(p: &Player, to_call: Chips) -> bool {
    p.is_all_in() || (p.acted && p.bet == to_call)
}

impl Table {
    /// Сколько нужно иметь в ставке, чтобы остаться в раунде: максимальная ставка за столом.
    pub fn to_call(&self) -> Chips {
        self.players
            .iter()
            .map(|p| p.bet)
            .max()
            .unwrap_or(Chips::ZERO)
    }

    pub fn is_called(&self, seat: SeatIndex) -> Result<bool, EngineError> {
        Ok(player_called(self.seat(seat)?, self.to_call()))
    }

    /// Лимит ставки. Лимиты не реализованы – ставить можно сколько угодно.
    pub fn limit(&self) -> Chips {
        Chips::MAX
    }

    /// Может ли место открыть торговлю. Пока без ограничений.
    pub fn can_open(&self, _seat: SeatIndex) -> bool {
        true
    }

    /// Проверка завершения раунда, вызывается после каждого действия.
    pub fn update_round_info(&mut self) -> RoundOutcome {
        let to_call = self.to_call();

        let in_seats: Vec<SeatIndex> = (0..self.players.len())
            .filter(|&i| self.players[i].in_hand)
            .map(|i| i as SeatIndex)
            .collect();
        let all_in_count = in_seats
            .iter()
            .filter(|&&s| self.players[s as usize].is_all_in())
            .count();
        let all_called = in_seats
            .iter()
            .all(|&s| player_called(&self.players[s as usize], to_call));

        if in_seats.len() < 2 {
            return match in_seats.first() {
                Some(&winner) => {
                    self.concede(winner);
                    RoundOutcome::Conceded(winner)
                }
                // Раздачи нет: менять нечего.
                None => RoundOutcome::StreetComplete,
            };
        }

        if !all_called {
            if let Some(next) = self.next_seat_where(self.action_num, |p| {
                p.in_hand && !p.is_all_in() && !player_called(p, to_call)
            }) {
                self.action_num = next;
            }
            return RoundOutcome::Continue;
        }

        // Не больше одного игрока может ещё ставить: всё, что он поставил сверх
        // второго по величине вклада, никто не покроет – возвращаем.
        if in_seats.len() - all_in_count < 2 {
            self.refund_overbet(&in_seats);
        }

        if self.status.stage() == Stage::River {
            self.settle_showdown();
            RoundOutcome::Showdown
        } else {
            self.status.set_betting(false);
            debug!("улица {:?} закрыта", self.status.stage());
            RoundOutcome::StreetComplete
        }
    }

    /// Единственный оставшийся игрок забирает все ставки раздачи.
    fn concede(&mut self, winner: SeatIndex) {
        let before = self.chips_in_play();
        let total: Chips = self.players.iter().map(|p| p.total_bet).sum();

        let mut pot = Pot::new(Chips::ZERO);
        pot.add(total);
        pot.eligible_player_nums.push(winner);
        pot.winning_player_nums.push(winner);

        self.players[winner as usize].stack += total;
        for p in self.players.iter_mut() {
            p.total_bet = Chips::ZERO;
        }
        self.pots = vec![pot];
        info!("место {winner} забирает {total} без шоудауна");

        debug_assert_eq!(before, self.chips_in_play(), "фишки не сходятся после сдачи");
        self.reset_for_next_hand();
    }

    fn refund_overbet(&mut self, in_seats: &[SeatIndex]) {
        let mut by_total: Vec<SeatIndex> = in_seats.to_vec();
        by_total.sort_by_key(|&s| std::cmp::Reverse(self.players[s as usize].total_bet));

        let (top, second) = (by_total[0] as usize, by_total[1] as usize);
        let excess = self.players[top].total_bet - self.players[second].total_bet;
        if !excess.is_zero() {
            debug!("место {top}: возврат непокрытой ставки {excess}");
            self.players[top].return_chips(excess);
        }
    }
}
