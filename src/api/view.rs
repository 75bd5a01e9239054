use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{
    Card, Chips, Deck, Player, SeatIndex, Stage, Table, TableConfig, TableStatus, MAX_SEATS,
};
use crate::engine::{EngineError, Pot};
use crate::eval::{HandRanker, StandardRanker};
use crate::infra::rng::DeterministicRng;

/// Снимок стола.
///
/// Полный (omni) снимок идёт в хранилище, урезанный – конкретному игроку.
/// Снимок владеет всеми своими данными и никак не связан с живым столом.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableView {
    pub dealer_num: SeatIndex,
    pub action_num: SeatIndex,
    pub utg_num: SeatIndex,
    pub sb_num: SeatIndex,
    pub bb_num: SeatIndex,
    pub called_num: SeatIndex,
    pub community_cards: Vec<Card>,
    pub stage: Stage,
    pub betting: bool,
    pub config: TableConfig,
    pub players: Vec<Player>,
    pub deck: Deck,
    pub pots: Vec<Pot>,
    pub min_raise: Chips,
    pub ready_count: usize,
}

impl Table {
    fn copy_to_view(&self) -> TableView {
        TableView {
            dealer_num: self.dealer_num,
            action_num: self.action_num,
            utg_num: self.utg_num,
            sb_num: self.sb_num,
            bb_num: self.bb_num,
            called_num: self.called_num,
            community_cards: self.community_cards.clone(),
            stage: self.status.stage(),
            betting: self.status.betting(),
            config: self.config.clone(),
            players: self.players.clone(),
            deck: self.deck.clone(),
            pots: self.pots.clone(),
            min_raise: self.min_raise,
            ready_count: self.ready_count(),
        }
    }

    /// Всё состояние стола, включая колоду и seed.
    pub fn generate_omni_view(&self) -> TableView {
        self.copy_to_view()
    }

    /// Восстановить стол из снимка со стандартной оценкой рук.
    pub fn from_view(view: &TableView) -> Result<Self, EngineError> {
        Self::from_view_with_ranker(view, Arc::new(StandardRanker))
    }

    pub fn from_view_with_ranker(
        view: &TableView,
        ranker: Arc<dyn HandRanker + Send + Sync>,
    ) -> Result<Self, EngineError> {
        let mut table = Table::with_ranker(view.config.clone(), ranker)?;
        table.fill_from_view(view)?;
        Ok(table)
    }

    /// Перезаписать состояние стола снимком. RNG пересоздаётся из `config.seed`.
    ///
    /// При ошибке стол не меняется.
    pub fn fill_from_view(&mut self, view: &TableView) -> Result<(), EngineError> {
        if view.players.len() > MAX_SEATS {
            return Err(EngineError::InvalidView("мест больше, чем помещается за стол"));
        }
        view.config.validate()?;

        let seats = view.players.len();
        let special = [
            view.dealer_num,
            view.action_num,
            view.utg_num,
            view.sb_num,
            view.bb_num,
            view.called_num,
        ];
        // На пустом столе все спец-места – 0.
        if let Some(&bad) = special
            .iter()
            .find(|&&s| (s as usize) >= seats.max(1))
        {
            return Err(EngineError::BadSeat(bad));
        }
        if let Some(&bad) = view
            .pots
            .iter()
            .flat_map(|pot| pot.eligible_player_nums.iter().chain(&pot.winning_player_nums))
            .find(|&&s| (s as usize) >= seats)
        {
            return Err(EngineError::BadSeat(bad));
        }

        self.dealer_num = view.dealer_num;
        self.action_num = view.action_num;
        self.utg_num = view.utg_num;
        self.sb_num = view.sb_num;
        self.bb_num = view.bb_num;
        self.called_num = view.called_num;
        self.community_cards = view.community_cards.clone();
        self.status = TableStatus::new(view.stage, view.betting);
        self.config = view.config.clone();
        self.players = view.players.clone();
        self.deck = view.deck.clone();
        self.pots = view.pots.clone();
        self.min_raise = view.min_raise;
        self.rng = DeterministicRng::from_u64(self.config.seed);
        Ok(())
    }

    /// Снимок для одного места: без колоды и seed, чужие карты скрыты,
    /// кроме тех, что открываются по правилам стола.
    pub fn generate_player_view(&self, seat: SeatIndex) -> Result<TableView, EngineError> {
        self.seat(seat)?;

        let mut view = self.copy_to_view();
        view.deck = Deck::default();
        view.config.seed = 0;

        let stage = self.status.stage();
        let mut in_count = 0;
        let mut all_in_count = 0;
        let mut bet_count = 0;

        for (i, p) in self.players.iter().enumerate() {
            if i != seat as usize {
                view.players[i].cards = [None, None];
            }
            if p.is_all_in_at(stage) {
                all_in_count += 1;
            }
            if p.is_in_at(stage) {
                in_count += 1;
                if !p.bet.is_zero() {
                    bet_count += 1;
                }
            }
        }

        let reveal = |view: &mut TableView, s: usize| {
            view.players[s].cards = self.players[s].cards;
        };

        if stage != Stage::PreDeal && in_count >= 2 {
            let show_all = all_in_count == in_count
                || (bet_count == 0 && all_in_count + 1 == in_count);
            if show_all {
                for (i, p) in self.players.iter().enumerate() {
                    if p.in_hand {
                        reveal(&mut view, i);
                    }
                }
            }
        }

        if stage == Stage::PreDeal && in_count > 1 {
            let n = self.players.len();
            let first = self.called_num as usize;
            reveal(&mut view, first);

            // Открываются руки не хуже лучшей из уже показанных.
            let mut to_beat = self.hand_of(self.called_num).map(|(_, score)| score);
            for step in 0..n {
                let i = (first + step) % n;
                if !self.players[i].in_last_hand {
                    continue;
                }
                let Some((_, score)) = self.hand_of(i as SeatIndex) else {
                    continue;
                };
                if to_beat.map_or(true, |best| score <= best) {
                    reveal(&mut view, i);
                    to_beat = Some(score);
                }
            }

            for pot in &self.pots {
                for &w in &pot.winning_player_nums {
                    reveal(&mut view, w as usize);
                }
            }
        }

        Ok(view)
    }
}
