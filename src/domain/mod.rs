//! Доменная модель стола: карты, фишки, игроки, статус раздачи, сам стол.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod player;
pub mod table;

/// Идентификатор стола для внешнего хранилища.
pub type TableId = u64;

pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use table::*;
