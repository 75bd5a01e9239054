use log::{debug, warn};

use crate::domain::{Chips, Player, SeatIndex, Stage, Table, MIN_PLAYERS};
use crate::engine::errors::EngineError;

impl Table {
    /// Найти следующее место по кругу после `from` (не включая его самого
    /// до полного оборота), для которого выполняется условие.
    pub(crate) fn next_seat_where<F>(&self, from: SeatIndex, pred: F) -> Option<SeatIndex>
    where
        F: Fn(&Player) -> bool,
    {
        let n = self.players.len();
        (1..=n)
            .map(|step| (from as usize + step) % n)
            .find(|&idx| pred(&self.players[idx]))
            .map(|idx| idx as SeatIndex)
    }

    /// Следующее готовое место после `from`; если его нет – сам `from`.
    fn next_ready(&self, from: SeatIndex) -> SeatIndex {
        self.next_seat_where(from, |p| p.ready).unwrap_or(from)
    }

    /// Расставить SB/BB/UTG относительно дилера.
    ///
    /// - меньше двух готовых: все спец-места схлопываются на дилера,
    ///   возвращается `NotEnoughPlayers` (стол при этом остаётся валидным);
    /// - heads-up: дилер = SB = UTG, второй готовый – BB;
    /// - 3+: SB, BB и UTG – следующие готовые места по кругу.
    pub fn update_blind_nums(&mut self) -> Result<(), EngineError> {
        let ready = self.ready_count();

        if ready < MIN_PLAYERS {
            self.sb_num = self.dealer_num;
            self.bb_num = self.dealer_num;
            self.utg_num = self.dealer_num;
            warn!("update_blind_nums: готовых мест {ready}, раздача невозможна");
            return Err(EngineError::NotEnoughPlayers);
        }

        if ready == MIN_PLAYERS {
            self.sb_num = self.dealer_num;
            self.utg_num = self.dealer_num;
            self.bb_num = self.next_ready(self.dealer_num);
        } else {
            self.sb_num = self.next_ready(self.dealer_num);
            self.bb_num = self.next_ready(self.sb_num);
            self.utg_num = self.next_ready(self.bb_num);
        }

        debug!(
            "blinds: dealer={} sb={} bb={} utg={}",
            self.dealer_num, self.sb_num, self.bb_num, self.utg_num
        );
        Ok(())
    }

    /// Если дилер сидит на неготовом месте – передвинуть кнопку на ближайшее готовое.
    pub(crate) fn ensure_dealer_ready(&mut self) {
        let dealer_ready = self
            .players
            .get(self.dealer_num as usize)
            .map(|p| p.ready)
            .unwrap_or(false);
        if !dealer_ready {
            self.dealer_num = self.next_ready(self.dealer_num);
        }
    }

    /// Подготовить стол к следующей раздаче.
    ///
    /// Сбрасывает участие и ставки, выбивает игроков с пустым стеком,
    /// двигает кнопку на следующее готовое место.
    pub fn reset_for_next_hand(&mut self) {
        for p in self.players.iter_mut() {
            p.in_last_hand = p.in_hand;
            p.in_hand = false;
            p.acted = false;
            p.bet = Chips::ZERO;
            p.total_bet = Chips::ZERO;

            if p.stack.is_zero() {
                p.ready = false;
            }
        }

        self.dealer_num = self.next_ready(self.dealer_num);
        self.status.set_stage_and_betting(Stage::PreDeal, false);
        debug!("reset_for_next_hand: новый дилер {}", self.dealer_num);
    }

    /// Начало каждой улицы, кроме префлопа (его готовит раздача с блайндами).
    ///
    /// Ход получает первое место после дилера, которое ещё может действовать.
    pub fn init_stage(&mut self) {
        self.action_num = self
            .next_seat_where(self.dealer_num, Player::can_act)
            .or_else(|| self.next_seat_where(self.dealer_num, |p| p.in_hand))
            .unwrap_or(self.dealer_num);

        for p in self.players.iter_mut() {
            p.bet = Chips::ZERO;
            p.acted = false;
        }

        self.min_raise = self.config.big_blind;
        self.called_num = self.action_num;
    }
}
