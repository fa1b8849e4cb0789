pub mod action_session;
pub mod list_session;
pub mod script;
pub mod search;
pub mod undo;

pub use action_session::{ActionSessionController, SessionEffect};
pub use list_session::{ListEvent, ListSession, Notice};
pub use undo::{PendingUndoQueue, Reinsert};
