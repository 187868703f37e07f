//! Chat surface components.
//!
//! Each module owns its own `STYLES` block. Class names are prefixed by the
//! component (`chat-`, `stream-`, `dock-`, `citation-`) so no rule reaches
//! into another component's markup. Geometry comes from [`crate::layout`].

pub mod citation;
pub mod dock;
pub mod shell;
pub mod stream;
pub mod theme;

pub use citation::{CitationPanel, ResultList};
pub use dock::InputDock;
pub use shell::ChatSurface;
pub use stream::{EmptyState, MessageBubble, MessageStream};

use dioxus::prelude::Callback;
use shared_types::ChatSignal;

/// Forward an interaction upward. The layer never acts on it.
pub(crate) fn emit(on_signal: Callback<ChatSignal>, signal: ChatSignal) {
    dioxus_logger::tracing::debug!(?signal, "chat signal emitted");
    on_signal.call(signal);
}
