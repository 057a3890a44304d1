//! Session state for the article reader.
//!
//! [`SessionController`] owns the only mutable copy of the session and
//! exposes it through named transitions. Views read it through the
//! snapshots in [`view`].

pub mod chat;
pub mod controller;
pub mod selection;
pub mod state;
pub mod view;

pub use chat::{ChatSession, ChatTicket};
pub use controller::{AnalysisTicket, Completion, SessionController};
pub use selection::{Anchor, SelectionRect, TextSelection};
pub use state::{Notification, NotificationLevel, SessionState};

pub mod prelude {
    pub use super::controller::{Completion, SessionController};
    pub use super::view::{ChatView, HistoryView, ResultView, SessionSnapshot, WordDetailView};
    pub use ar_core::{Error, InputKind, Result, ResultTab, View};
}
