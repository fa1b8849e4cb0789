pub mod action;
pub mod config;
pub mod item;
pub mod selection;
pub mod undo_record;

pub use action::*;
pub use config::*;
pub use item::*;
pub use selection::*;
pub use undo_record::*;
