//! Движок стола Texas Hold'em.
//!
//! Хранит состояние одного стола, ротирует кнопку и блайнды, ведёт раунды
//! ставок, режет сайд-поты и разыгрывает их на шоудауне. Состояние стола
//! наружу отдаётся снимками: полным для хранилища и урезанным для игрока.
//!
//! Оценка рук подключается через [`eval::HandRanker`].

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use api::TableView;
pub use domain::{Card, Chips, Player, SeatIndex, Stage, Table, TableConfig};
pub use engine::{EngineError, PlayerAction, Pot, RoundOutcome};
