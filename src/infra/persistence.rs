use std::collections::HashMap;

use thiserror::Error;

use crate::api::TableView;
use crate::domain::{Table, TableId};
use crate::engine::EngineError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("ошибка сериализации снапшота: {0}")]
    Json(#[from] serde_json::Error),

    #[error("снапшот не восстанавливается: {0}")]
    Restore(#[from] EngineError),
}

/// Абстракция хранилища столов.
///
/// Хранится полный снимок (`generate_omni_view`), поэтому восстановленный
/// стол продолжает раздавать те же карты, что раздал бы исходный.
pub trait TableStore {
    fn save(&mut self, id: TableId, table: &Table) -> Result<(), StoreError>;

    /// `None`, если такого стола нет.
    fn load(&self, id: TableId) -> Result<Option<Table>, StoreError>;
}

/// Простая in-memory реализация для тестов и локального запуска.
/// Снимки лежат JSON-строками, как легли бы в БД.
#[derive(Debug, Default)]
pub struct InMemoryTableStore {
    tables: HashMap<TableId, String>,
}

impl InMemoryTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl TableStore for InMemoryTableStore {
    fn save(&mut self, id: TableId, table: &Table) -> Result<(), StoreError> {
        let json = serde_json::to_string(&table.generate_omni_view())?;
        self.tables.insert(id, json);
        Ok(())
    }

    fn load(&self, id: TableId) -> Result<Option<Table>, StoreError> {
        let Some(json) = self.tables.get(&id) else {
            return Ok(None);
        };
        let view: TableView = serde_json::from_str(json)?;
        Ok(Some(Table::from_view(&view)?))
    }
}
