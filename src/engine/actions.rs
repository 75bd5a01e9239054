use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::domain::{Chips, Deck, SeatIndex, Stage, Table};
use crate::engine::betting::RoundOutcome;
use crate::engine::errors::EngineError;
use crate::engine::validation::validate_action;
use crate::infra::rng::DeterministicRng;

/// Действие игрока в раунде ставок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerAction {
    Fold,
    Check,
    Call,
    /// Добавить столько фишек к своей ставке. Выше `to_call` – это рейз.
    Bet(Chips),
    /// Поставить весь стек.
    AllIn,
}

impl Table {
    /// Применить действие места, которому принадлежит ход.
    pub fn apply_action(
        &mut self,
        seat: SeatIndex,
        action: PlayerAction,
    ) -> Result<RoundOutcome, EngineError> {
        let amount = validate_action(self, seat, &action)?;
        let to_call_before = self.to_call();

        let player = self.seat_mut(seat)?;
        if action == PlayerAction::Fold {
            player.in_hand = false;
        } else {
            player.put_in(amount);
        }
        player.acted = true;
        let new_bet = player.bet;

        if new_bet > to_call_before {
            let raise = new_bet - to_call_before;
            if raise >= self.min_raise {
                self.min_raise = raise;
            }
            self.called_num = seat;
        }

        debug!("место {seat}: {action:?}, ставка {new_bet}");
        Ok(self.update_round_info())
    }

    /// Раздача. Делает её только дилер.
    ///
    /// На PreDeal – новая раздача: блайнды, карманные карты, ход UTG.
    /// Между улицами – флоп, тёрн или ривер и новый раунд ставок.
    pub fn deal(&mut self, seat: SeatIndex) -> Result<RoundOutcome, EngineError> {
        self.seat(seat)?;

        let (stage, betting) = self.status.stage_and_betting();
        if betting {
            return Err(EngineError::BettingInProgress);
        }
        if stage == Stage::PreDeal {
            self.ensure_dealer_ready();
        }
        if seat != self.dealer_num {
            return Err(EngineError::NotDealer {
                dealer: self.dealer_num,
            });
        }

        match stage.next_street() {
            Some(Stage::PreFlop) => self.start_hand(),
            Some(next) => Ok(self.deal_street(next)),
            None => Err(EngineError::NoBettingRound),
        }
    }

    fn start_hand(&mut self) -> Result<RoundOutcome, EngineError> {
        self.update_blind_nums()?;

        self.deck = Deck::shuffled(&mut self.rng);
        self.config.seed = self.rng.next_seed();
        self.rng = DeterministicRng::from_u64(self.config.seed);

        self.community_cards.clear();
        self.pots.clear();

        for p in self.players.iter_mut() {
            p.in_hand = p.ready;
            p.in_last_hand = false;
            p.acted = false;
            p.bet = Chips::ZERO;
            p.total_bet = Chips::ZERO;
            p.cards = [None, None];
        }

        let n = self.players.len();
        let order: Vec<usize> = (1..=n)
            .map(|step| (self.dealer_num as usize + step) % n)
            .filter(|&i| self.players[i].in_hand)
            .collect();
        for round in 0..2 {
            for &i in &order {
                self.players[i].cards[round] = self.deck.draw_one();
            }
        }

        let (sb, bb) = (self.config.small_blind, self.config.big_blind);
        self.players[self.sb_num as usize].put_in(sb);
        self.players[self.bb_num as usize].put_in(bb);

        self.min_raise = bb;
        self.action_num = self.utg_num;
        self.called_num = self.utg_num;
        self.status.set_stage_and_betting(Stage::PreFlop, true);

        info!(
            "новая раздача: дилер {}, игроков {}",
            self.dealer_num,
            order.len()
        );
        Ok(self.close_if_no_action())
    }

    fn deal_street(&mut self, next: Stage) -> RoundOutcome {
        let cards = self.deck.draw_n(next.board_cards_dealt());
        self.community_cards.extend(cards);

        self.init_stage();
        self.status.set_stage_and_betting(next, true);
        debug!("открыта улица {next:?}: {} общих карт", self.community_cards.len());

        self.close_if_no_action()
    }

    /// Если действовать может меньше двух мест, торговли на улице нет.
    fn close_if_no_action(&mut self) -> RoundOutcome {
        let to_call = self.to_call();
        let actors: Vec<usize> = (0..self.players.len())
            .filter(|&i| self.players[i].can_act())
            .collect();

        match actors.as_slice() {
            [] => self.update_round_info(),
            &[only] if self.players[only].bet >= to_call => {
                self.players[only].acted = true;
                self.update_round_info()
            }
            _ => {
                if !self.players[self.action_num as usize].can_act() {
                    if let Some(next) = self.next_seat_where(self.action_num, |p| p.can_act()) {
                        self.action_num = next;
                    }
                }
                RoundOutcome::Continue
            }
        }
    }
}
