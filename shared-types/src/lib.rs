//! Shared types between the hosting chat application and the presentation layer
//!
//! These types are used by both:
//! - The hosting application (message generation, persistence, networking)
//! - Dioxus components (WASM) that render the conversation
//!
//! Serializable with serde for JSON over HTTP and exported to TypeScript with ts-rs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// View State
// ============================================================================

/// Presentation state supplied by the hosting application on every render.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../chat-ui/src/types/generated.ts")]
pub struct ConversationViewState {
    /// True when the conversation has no messages. Only the empty-state
    /// block renders while this is set.
    pub is_empty: bool,

    /// True while a response is streaming.
    pub is_generating: bool,

    /// True while the citation panel is mounted.
    pub citation_panel_open: bool,

    /// Viewport width in CSS pixels.
    pub viewport_width: f64,

    /// Viewport height in CSS pixels.
    pub viewport_height: f64,
}

impl ConversationViewState {
    /// Derive a state whose `is_empty` flag agrees with `messages`.
    pub fn for_messages(messages: &[Message], viewport: (f64, f64)) -> Self {
        Self {
            is_empty: messages.is_empty(),
            is_generating: false,
            citation_panel_open: false,
            viewport_width: viewport.0,
            viewport_height: viewport.1,
        }
    }

    pub fn generating(mut self, is_generating: bool) -> Self {
        self.is_generating = is_generating;
        self
    }

    pub fn with_citation_panel(mut self, open: bool) -> Self {
        self.citation_panel_open = open;
        self
    }
}

impl Default for ConversationViewState {
    fn default() -> Self {
        Self {
            is_empty: true,
            is_generating: false,
            citation_panel_open: false,
            viewport_width: 1280.0,
            viewport_height: 800.0,
        }
    }
}

// ============================================================================
// Conversation Content
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../chat-ui/src/types/generated.ts")]
pub enum MessageRole {
    User,
    Assistant,
    Error,
}

/// One conversation turn as rendered in the message stream
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../chat-ui/src/types/generated.ts")]
pub struct Message {
    pub id: String,
    pub role: MessageRole,
    pub content: String,

    /// Image URL or data URI shown inside a user bubble
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attached_image: Option<String>,

    /// Sources attached by the hosting application to an assistant answer
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<CitationEntry>,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            attached_image: None,
            citations: Vec::new(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Error, content)
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.attached_image = Some(image.into());
        self
    }

    pub fn with_citations(mut self, citations: Vec<CitationEntry>) -> Self {
        self.citations = citations;
        self
    }

    pub fn has_citations(&self) -> bool {
        !self.citations.is_empty()
    }
}

/// A label/value pair in a structured tool-result citation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../chat-ui/src/types/generated.ts")]
pub struct ResultRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../chat-ui/src/types/generated.ts")]
pub struct CitationEntry {
    pub title: String,
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_link: Option<String>,

    /// Execution results laid out as a label/value list under the content
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub result_rows: Vec<ResultRow>,
}

impl CitationEntry {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            source_link: None,
            result_rows: Vec::new(),
        }
    }

    pub fn with_source(mut self, url: impl Into<String>) -> Self {
        self.source_link = Some(url.into());
        self
    }

    pub fn with_result_rows(mut self, rows: Vec<ResultRow>) -> Self {
        self.result_rows = rows;
        self
    }
}

// ============================================================================
// Affordances and Signals
// ============================================================================

/// Transient overlay controls floating above the input dock
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[ts(export, export_to = "../../chat-ui/src/types/generated.ts")]
pub enum ActionAffordance {
    ClearConversation,
    NewConversation,
    StopGenerating,
}

/// Vertical slot of the clear-conversation control.
///
/// `NoCosmos` moves the control below the slot used by the sibling control
/// present in that configuration. Which one applies is decided by the host.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../../chat-ui/src/types/generated.ts")]
pub enum ClearButtonVariant {
    #[default]
    Standard,
    NoCosmos,
}

/// Interaction signals emitted upward. The layer never performs the action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export, export_to = "../../chat-ui/src/types/generated.ts")]
pub enum ChatSignal {
    DismissCitationPanel,
    OpenCitationSource { url: String },
    StopGenerating,
    StartNewConversation,
    ClearConversation,
    SubmitQuestion { text: String },
    ShowCitations { message_id: String },
}

impl ChatSignal {
    /// Affordance that produced this signal, if it came from a dock control.
    pub fn affordance(&self) -> Option<ActionAffordance> {
        match self {
            ChatSignal::StopGenerating => Some(ActionAffordance::StopGenerating),
            ChatSignal::StartNewConversation => Some(ActionAffordance::NewConversation),
            ChatSignal::ClearConversation => Some(ActionAffordance::ClearConversation),
            _ => None,
        }
    }
}

// ============================================================================
// Frontend Settings
// ============================================================================

/// Payload of the backend's `GET /frontend_settings`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[serde(default)]
#[ts(export, export_to = "../../chat-ui/src/types/generated.ts")]
pub struct FrontendSettings {
    pub auth_enabled: bool,
    pub feedback_enabled: bool,
    pub ui: FrontendUiSettings,
    pub sanitize_answer: bool,
    /// Configured datasource type; present when "on your data" is enabled
    pub oyd_enabled: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[serde(default)]
#[ts(export, export_to = "../../chat-ui/src/types/generated.ts")]
pub struct FrontendUiSettings {
    pub title: Option<String>,
    pub logo: Option<String>,
    pub chat_logo: Option<String>,
    pub chat_title: Option<String>,
    pub chat_description: Option<String>,
    pub show_share_button: bool,
    pub show_chat_history_button: bool,
}

impl FrontendUiSettings {
    /// Logo for the empty state; the chat logo wins over the app logo.
    pub fn effective_chat_logo(&self) -> Option<&str> {
        self.chat_logo.as_deref().or(self.logo.as_deref())
    }
}

// ============================================================================
// Tests
// ============================================================================
