use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::{Stage, TableStatus};
use crate::domain::player::Player;
use crate::engine::errors::{ConfigError, EngineError};
use crate::engine::pot::Pot;
use crate::eval::{HandRanker, StandardRanker};
use crate::infra::rng::DeterministicRng;

/// Индекс места за столом = позиция в `Table::players`.
pub type SeatIndex = u8;

/// Больше мест в холдеме просто не хватит карт.
pub const MAX_SEATS: usize = 23;

/// Heads-up.
pub const MIN_PLAYERS: usize = 2;

/// Конфиг стола.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Максимальный стек, до которого можно докупиться.
    pub max_buy: Chips,
    pub big_blind: Chips,
    pub small_blind: Chips,
    /// Seed для перемешивания следующей колоды.
    pub seed: u64,
}

impl TableConfig {
    pub fn new(max_buy: Chips, small_blind: Chips, big_blind: Chips, seed: u64) -> Self {
        Self {
            max_buy,
            big_blind,
            small_blind,
            seed,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.big_blind.is_zero() {
            return Err(ConfigError::ZeroBigBlind);
        }
        if self.small_blind > self.big_blind {
            return Err(ConfigError::SmallBlindAboveBig {
                small: self.small_blind,
                big: self.big_blind,
            });
        }
        if self.max_buy < self.big_blind {
            return Err(ConfigError::MaxBuyBelowBigBlind {
                max_buy: self.max_buy,
                big: self.big_blind,
            });
        }
        Ok(())
    }

    /// Разобрать конфиг из JSON и сразу проверить его.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Стол – корневой агрегат движка.
///
/// Все места живут в плотном векторе `players`; места никогда не удаляются,
/// а только помечаются как не готовые. Специальные места (дилер, блайнды,
/// UTG, ход) – индексы в этот вектор.
pub struct Table {
    pub(crate) dealer_num: SeatIndex,
    pub(crate) action_num: SeatIndex,
    pub(crate) utg_num: SeatIndex,
    pub(crate) sb_num: SeatIndex,
    pub(crate) bb_num: SeatIndex,
    pub(crate) called_num: SeatIndex,
    pub(crate) community_cards: Vec<Card>,
    pub(crate) status: TableStatus,
    pub(crate) config: TableConfig,
    pub(crate) players: Vec<Player>,
    pub(crate) deck: Deck,
    /// Банки последнего шоудауна (или отданного без шоудауна банка).
    pub(crate) pots: Vec<Pot>,
    pub(crate) min_raise: Chips,
    pub(crate) rng: DeterministicRng,
    pub(crate) ranker: Arc<dyn HandRanker + Send + Sync>,
}

impl Table {
    /// Пустой стол со стандартной оценкой рук.
    pub fn new(config: TableConfig) -> Result<Self, EngineError> {
        Self::with_ranker(config, Arc::new(StandardRanker))
    }

    /// Пустой стол с собственной реализацией оценки рук.
    pub fn with_ranker(
        config: TableConfig,
        ranker: Arc<dyn HandRanker + Send + Sync>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            dealer_num: 0,
            action_num: 0,
            utg_num: 0,
            sb_num: 0,
            bb_num: 0,
            called_num: 0,
            community_cards: Vec::new(),
            status: TableStatus::new(Stage::PreDeal, false),
            min_raise: config.big_blind,
            rng: DeterministicRng::from_u64(config.seed),
            config,
            players: Vec::new(),
            deck: Deck::default(),
            pots: Vec::new(),
            ranker,
        })
    }

    /// Добавить место. Возвращает его индекс; индексы не переиспользуются.
    pub fn add_seat(&mut self) -> Result<SeatIndex, EngineError> {
        if self.players.len() >= MAX_SEATS {
            return Err(EngineError::TableFull);
        }
        self.players.push(Player::new());
        Ok((self.players.len() - 1) as SeatIndex)
    }

    pub fn seat(&self, seat: SeatIndex) -> Result<&Player, EngineError> {
        self.players
            .get(seat as usize)
            .ok_or(EngineError::BadSeat(seat))
    }

    pub(crate) fn seat_mut(&mut self, seat: SeatIndex) -> Result<&mut Player, EngineError> {
        self.players
            .get_mut(seat as usize)
            .ok_or(EngineError::BadSeat(seat))
    }

    /// Докупить фишки. Только между раздачами и не выше `max_buy`.
    pub fn buy_in(&mut self, seat: SeatIndex, amount: Chips) -> Result<(), EngineError> {
        let max_buy = self.config.max_buy;
        let hand_running = self.status.stage() != Stage::PreDeal;
        let player = self.seat_mut(seat)?;
        if player.in_hand || hand_running {
            return Err(EngineError::HandInProgress);
        }
        if amount.is_zero() || player.stack.0.saturating_add(amount.0) > max_buy.0 {
            return Err(EngineError::BadBuyIn { amount, max_buy });
        }
        player.stack += amount;
        Ok(())
    }

    /// Переключить готовность места. Возвращает новое значение.
    pub fn toggle_ready(&mut self, seat: SeatIndex) -> Result<bool, EngineError> {
        let player = self.seat_mut(seat)?;
        if !player.ready && player.stack.is_zero() {
            return Err(EngineError::NoChips(seat));
        }
        player.ready = !player.ready;
        Ok(player.ready)
    }

    pub fn seat_count(&self) -> usize {
        self.players.len()
    }

    pub fn ready_count(&self) -> usize {
        self.players.iter().filter(|p| p.ready).count()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }

    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn min_raise(&self) -> Chips {
        self.min_raise
    }

    pub fn stage(&self) -> Stage {
        self.status.stage()
    }

    pub fn betting(&self) -> bool {
        self.status.betting()
    }

    pub fn dealer_num(&self) -> SeatIndex {
        self.dealer_num
    }

    pub fn action_num(&self) -> SeatIndex {
        self.action_num
    }

    pub fn utg_num(&self) -> SeatIndex {
        self.utg_num
    }

    pub fn sb_num(&self) -> SeatIndex {
        self.sb_num
    }

    pub fn bb_num(&self) -> SeatIndex {
        self.bb_num
    }

    pub fn called_num(&self) -> SeatIndex {
        self.called_num
    }

    /// Все фишки стола: стеки + всё, что сейчас в игре.
    pub fn chips_in_play(&self) -> Chips {
        self.players.iter().map(|p| p.stack + p.total_bet).sum()
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("dealer_num", &self.dealer_num)
            .field("action_num", &self.action_num)
            .field("status", &self.status)
            .field("community_cards", &self.community_cards)
            .field("players", &self.players)
            .field("pots", &self.pots)
            .field("min_raise", &self.min_raise)
            .finish_non_exhaustive()
    }
}
