//! Инфраструктурный слой вокруг покерного движка:
//! - детерминированный RNG для тасовки;
//! - стол под одной блокировкой для конкурентного доступа;
//! - хранилище снимков столов.

pub mod persistence;
pub mod rng;
pub mod shared;

pub use persistence::{InMemoryTableStore, StoreError, TableStore};
pub use rng::DeterministicRng;
pub use shared::SharedTable;
