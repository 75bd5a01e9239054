use thiserror::Error;

use crate::domain::{Chips, SeatIndex};

/// Ошибки движка стола.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Места {0} нет за столом")]
    BadSeat(SeatIndex),

    #[error("Недостаточно готовых игроков для раздачи")]
    NotEnoughPlayers,

    #[error("За столом нет свободных мест")]
    TableFull,

    #[error("Сейчас не ход места {0}")]
    NotYourTurn(SeatIndex),

    #[error("Раздавать может только дилер (место {dealer})")]
    NotDealer { dealer: SeatIndex },

    #[error("Раунд ставок ещё не завершён")]
    BettingInProgress,

    #[error("Сейчас нет раунда ставок")]
    NoBettingRound,

    #[error("Невозможно выполнить check – нужно хотя бы уравнять ставку")]
    CannotCheck,

    #[error("Невозможно выполнить call – нет ставки для уравнивания")]
    NothingToCall,

    #[error("Ставка {amount} меньше, чем нужно для call ({to_call})")]
    BetTooSmall { amount: Chips, to_call: Chips },

    #[error("Рейз {raise} меньше минимального ({min_raise})")]
    RaiseTooSmall { raise: Chips, min_raise: Chips },

    #[error("Недостаточно фишек для этой ставки")]
    NotEnoughChips,

    #[error("Ставка превышает лимит стола ({limit})")]
    OverLimit { limit: Chips },

    #[error("Недопустимая докупка {amount} (максимум стека {max_buy})")]
    BadBuyIn { amount: Chips, max_buy: Chips },

    #[error("У места {0} нет фишек")]
    NoChips(SeatIndex),

    #[error("Место участвует в текущей раздаче")]
    HandInProgress,

    #[error("Некорректный конфиг стола: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Некорректный снапшот стола: {0}")]
    InvalidView(&'static str),

    #[error("Блокировка стола отравлена паникой")]
    LockPoisoned,
}

/// Ошибки конфигурации стола.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("big_blind = 0")]
    ZeroBigBlind,

    #[error("small_blind ({small}) > big_blind ({big})")]
    SmallBlindAboveBig { small: Chips, big: Chips },

    #[error("max_buy ({max_buy}) < big_blind ({big})")]
    MaxBuyBelowBigBlind { max_buy: Chips, big: Chips },

    #[error("битый JSON конфига: {0}")]
    Json(#[from] serde_json::Error),
}
