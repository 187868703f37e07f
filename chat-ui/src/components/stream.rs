use dioxus::prelude::*;
use shared_types::{ChatSignal, ConversationViewState, Message, MessageRole};

use super::emit;
use crate::config::ChatUiConfig;

/// What the stream shows for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StreamContent<'a> {
    Empty,
    /// Messages in exactly the order the host supplied them.
    Messages(&'a [Message]),
}

/// The empty state and message bubbles are mutually exclusive.
pub fn stream_content<'a>(state: &ConversationViewState, messages: &'a [Message]) -> StreamContent<'a> {
    if state.is_empty {
        StreamContent::Empty
    } else {
        StreamContent::Messages(messages)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BubbleClasses {
    pub row: &'static str,
    pub bubble: &'static str,
}

pub fn bubble_classes(role: MessageRole) -> BubbleClasses {
    match role {
        MessageRole::User => BubbleClasses {
            row: "stream-row stream-row-user",
            bubble: "stream-bubble stream-bubble-user",
        },
        MessageRole::Assistant => BubbleClasses {
            row: "stream-row stream-row-assistant",
            bubble: "stream-bubble stream-bubble-assistant",
        },
        MessageRole::Error => BubbleClasses {
            row: "stream-row stream-row-error",
            bubble: "stream-bubble-error",
        },
    }
}

/// Duplicates are rendered as supplied, so the key carries the position too.
fn bubble_key(index: usize, message: &Message) -> String {
    format!("{}-{index}", message.id)
}

fn reference_label(count: usize) -> String {
    if count == 1 {
        "1 reference".to_string()
    } else {
        format!("{count} references")
    }
}

#[component]
pub fn MessageStream(
    state: ConversationViewState,
    messages: Vec<Message>,
    config: ChatUiConfig,
    empty_title_style: String,
    on_signal: Callback<ChatSignal>,
) -> Element {
    let body = match stream_content(&state, &messages) {
        StreamContent::Empty => rsx! {
            EmptyState {
                logo: config.chat_logo.clone(),
                title: config.chat_title.clone(),
                subtitle: config.chat_description.clone(),
                title_style: empty_title_style,
            }
        },
        StreamContent::Messages(list) => {
            let keyed: Vec<(String, Message)> = list
                .iter()
                .enumerate()
                .map(|(index, message)| (bubble_key(index, message), message.clone()))
                .collect();
            rsx! {
                for (key, message) in keyed {
                    MessageBubble { key: "{key}", message, on_signal }
                }
            }
        }
    };

    rsx! {
        style { {STREAM_STYLES} }

        div {
            class: "stream-region",
            role: "log",
            "aria-live": "polite",
            {body}
        }
    }
}

#[component]
pub fn EmptyState(
    logo: Option<String>,
    title: String,
    subtitle: String,
    title_style: String,
) -> Element {
    rsx! {
        div {
            class: "stream-empty-state",
            if let Some(src) = logo {
                img { class: "stream-empty-icon", src: "{src}", alt: "", "aria-hidden": "true" }
            } else {
                div { class: "stream-empty-icon stream-empty-icon-default", "aria-hidden": "true", "💬" }
            }
            h1 { class: "stream-empty-title", style: "{title_style}", "{title}" }
            h2 { class: "stream-empty-subtitle", "{subtitle}" }
        }
    }
}

#[component]
pub fn MessageBubble(message: Message, on_signal: Callback<ChatSignal>) -> Element {
    let classes = bubble_classes(message.role);

    match message.role {
        MessageRole::User => rsx! {
            div {
                class: classes.row,
                div {
                    class: classes.bubble,
                    if let Some(src) = message.attached_image.as_ref() {
                        img { class: "stream-attached-image", src: "{src}", alt: "Uploaded image" }
                    }
                    "{message.content}"
                }
            }
        },
        MessageRole::Assistant => {
            let citation_count = message.citations.len();
            let message_id = message.id.clone();
            rsx! {
                div {
                    class: classes.row,
                    div {
                        class: classes.bubble,
                        div { class: "stream-answer-text", "{message.content}" }
                        if citation_count > 0 {
                            button {
                                class: "stream-reference-toggle",
                                onclick: move |_| {
                                    emit(on_signal, ChatSignal::ShowCitations {
                                        message_id: message_id.clone(),
                                    })
                                },
                                "{reference_label(citation_count)}"
                            }
                        }
                    }
                }
            }
        }
        MessageRole::Error => rsx! {
            div {
                class: classes.row,
                div {
                    class: classes.bubble,
                    role: "alert",
                    div {
                        class: "stream-error-header",
                        span { class: "stream-error-icon", "aria-hidden": "true", "⚠" }
                        span { class: "stream-error-title", "Error" }
                    }
                    div { class: "stream-error-text", "{message.content}" }
                }
            }
        },
    }
}

const STREAM_STYLES: &str = r#"
/* Message Stream */
.stream-region {
    flex-grow: 1;
    max-width: 1028px;
    width: 100%;
    box-sizing: border-box;
    overflow-y: auto;
    overflow-x: hidden;
    padding: 0 24px 24px 24px;
    margin-top: 24px;
    display: flex;
    flex-direction: column;
}

/* Empty State */
.stream-empty-state {
    flex-grow: 1;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
}

.stream-empty-icon {
    width: 36px;
    height: 36px;
}

.stream-empty-icon-default {
    font-size: 36px;
    line-height: 36px;
    text-align: center;
}

.stream-empty-title {
    font-style: normal;
    font-weight: 700;
    font-size: 36px;
    display: flex;
    align-items: flex-end;
    text-align: center;
    margin-top: 36px;
    margin-bottom: 0;
}

.stream-empty-subtitle {
    margin-top: 20px;
    font-style: normal;
    font-weight: 400;
    font-size: 16px;
    line-height: 150%;
    display: flex;
    align-items: flex-end;
    text-align: center;
    letter-spacing: -0.01em;
    color: var(--chat-text-secondary);
}

/* Message Rows */
.stream-row {
    display: flex;
    margin-bottom: 12px;
}

.stream-row-user {
    justify-content: flex-end;
}

.stream-row-assistant {
    justify-content: flex-start;
}

.stream-row-error {
    justify-content: flex-start;
}

/* Bubbles */
.stream-bubble {
    max-width: 80%;
    padding: 20px;
    border-radius: var(--chat-radius-md);
    font-size: 14px;
    line-height: 22px;
    box-sizing: border-box;
}

.stream-bubble-user {
    background: var(--chat-user-bubble-bg);
    color: var(--chat-text-primary);
    white-space: pre-wrap;
    overflow-wrap: break-word;
    word-wrap: break-word;
}

.stream-bubble-assistant {
    background: var(--chat-surface-bg);
    color: var(--chat-text-primary);
    box-shadow: var(--chat-shadow-sm);
}

.stream-attached-image {
    display: block;
    max-width: 100%;
    max-height: 200px;
    margin-bottom: 8px;
    border-radius: var(--chat-radius-sm);
}

.stream-answer-text {
    white-space: pre-wrap;
    overflow-wrap: break-word;
}

.stream-reference-toggle {
    margin-top: 12px;
    padding: 2px 8px;
    font-size: 12px;
    color: var(--chat-link-text);
    background: transparent;
    border: 1px solid var(--chat-border);
    border-radius: var(--chat-radius-sm);
    cursor: pointer;
}

.stream-reference-toggle:hover {
    text-decoration: underline;
}

/* Error Frame */
.stream-bubble-error {
    width: 100%;
    max-width: 800px;
    padding: 20px;
    box-sizing: border-box;
    border-radius: var(--chat-radius-md);
    border: 1px solid var(--chat-error);
    box-shadow: var(--chat-error) 1px 1px 2px, var(--chat-error) 0px 0px 1px;
    color: var(--chat-text-primary);
    font-size: 14px;
    line-height: 22px;
    white-space: pre-wrap;
    overflow-wrap: break-word;
    word-wrap: break-word;
}

.stream-error-header {
    display: flex;
    align-items: center;
    gap: 8px;
    margin-bottom: 8px;
    font-weight: 600;
    color: var(--chat-error);
}
"#;
