//! Внешнее представление стола.
//!
//! - полный снимок (omni) – для хранилища и администрирования;
//! - снимок для игрока – без колоды, seed и чужих карт;
//! - восстановление стола из снимка.

pub mod view;

pub use view::TableView;
