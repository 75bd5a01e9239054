use std::sync::{Arc, Mutex};

use crate::api::TableView;
use crate::domain::{SeatIndex, Table};
use crate::engine::{EngineError, PlayerAction, RoundOutcome};

/// Стол под одной блокировкой.
///
/// Любое изменение и любой снимок проходят через один и тот же `Mutex`:
/// внутри стола операции строго последовательны, разные столы независимы.
#[derive(Clone, Debug)]
pub struct SharedTable {
    inner: Arc<Mutex<Table>>,
}

impl SharedTable {
    pub fn new(table: Table) -> Self {
        Self {
            inner: Arc::new(Mutex::new(table)),
        }
    }

    /// Выполнить `f` под блокировкой стола.
    pub fn with<R>(&self, f: impl FnOnce(&mut Table) -> R) -> Result<R, EngineError> {
        let mut guard = self.inner.lock().map_err(|_| EngineError::LockPoisoned)?;
        Ok(f(&mut guard))
    }

    pub fn deal(&self, seat: SeatIndex) -> Result<RoundOutcome, EngineError> {
        self.with(|t| t.deal(seat))?
    }

    pub fn apply_action(
        &self,
        seat: SeatIndex,
        action: PlayerAction,
    ) -> Result<RoundOutcome, EngineError> {
        self.with(|t| t.apply_action(seat, action))?
    }

    pub fn omni_view(&self) -> Result<TableView, EngineError> {
        self.with(|t| t.generate_omni_view())
    }

    pub fn player_view(&self, seat: SeatIndex) -> Result<TableView, EngineError> {
        self.with(|t| t.generate_player_view(seat))?
    }
}
