use dioxus::prelude::*;
use shared_types::{ActionAffordance, ChatSignal};

use super::emit;
use crate::layout::{ChatLayout, DockGeometry, FloatingBox};

/// Text to submit for the current input, if any.
fn submission(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Take the pending question out of the input, leaving it empty.
fn take_submission(mut input_text: Signal<String>, disabled: bool) -> Option<String> {
    if disabled {
        return None;
    }
    let pending = submission(&input_text.peek());
    if pending.is_some() {
        input_text.set(String::new());
    }
    pending
}

/// Sticky input region. Transient controls are anchored to this box.
#[component]
pub fn InputDock(
    geometry: DockGeometry,
    layout: ChatLayout,
    affordances: Vec<ActionAffordance>,
    is_generating: bool,
    placeholder: String,
    on_signal: Callback<ChatSignal>,
) -> Element {
    rsx! {
        style { {DOCK_STYLES} }

        div {
            class: "dock-root",
            style: "{geometry.style()}",

            for affordance in affordances {
                DockControl {
                    affordance,
                    layout,
                    is_generating,
                    on_signal,
                }
            }

            QuestionInput {
                disabled: is_generating,
                placeholder,
                on_signal,
            }
        }
    }
}

#[component]
fn DockControl(
    affordance: ActionAffordance,
    layout: ChatLayout,
    is_generating: bool,
    on_signal: Callback<ChatSignal>,
) -> Element {
    match affordance {
        ActionAffordance::ClearConversation => rsx! {
            ClearConversationButton {
                placement: layout.clear_button,
                disabled: is_generating,
                on_signal,
            }
        },
        ActionAffordance::StopGenerating => rsx! {
            StopGeneratingButton { placement: layout.stop_generating, on_signal }
        },
        ActionAffordance::NewConversation => rsx! {
            NewConversationButton { placement: layout.new_conversation, on_signal }
        },
    }
}

#[component]
pub fn ClearConversationButton(
    placement: FloatingBox,
    disabled: bool,
    on_signal: Callback<ChatSignal>,
) -> Element {
    rsx! {
        button {
            class: "dock-clear-button",
            style: "{placement.style()}",
            title: "Clear chat",
            "aria-label": "Clear conversation",
            disabled,
            onclick: move |_| emit(on_signal, ChatSignal::ClearConversation),
            "🧹"
        }
    }
}

#[component]
pub fn StopGeneratingButton(placement: FloatingBox, on_signal: Callback<ChatSignal>) -> Element {
    rsx! {
        div {
            class: "dock-stop-pill",
            style: "{placement.style()}",
            role: "button",
            tabindex: "0",
            "aria-label": "Stop generating",
            onclick: move |_| emit(on_signal, ChatSignal::StopGenerating),
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Enter || e.key() == Key::Character(" ".to_string()) {
                    e.prevent_default();
                    emit(on_signal, ChatSignal::StopGenerating);
                }
            },
            span { class: "dock-stop-icon", "aria-hidden": "true", "■" }
            span { class: "dock-stop-text", "Stop generating" }
        }
    }
}

#[component]
pub fn NewConversationButton(placement: FloatingBox, on_signal: Callback<ChatSignal>) -> Element {
    rsx! {
        button {
            class: "dock-new-chat-pill",
            style: "{placement.style()}",
            "aria-label": "Start a new conversation",
            onclick: move |_| emit(on_signal, ChatSignal::StartNewConversation),
            span { "aria-hidden": "true", "＋" }
            span { "New chat" }
        }
    }
}

#[component]
fn QuestionInput(disabled: bool, placeholder: String, on_signal: Callback<ChatSignal>) -> Element {
    let mut input_text = use_signal(String::new);

    let send = use_callback(move |_| {
        if let Some(text) = take_submission(input_text, disabled) {
            emit(on_signal, ChatSignal::SubmitQuestion { text });
        }
    });

    let onkeydown = move |e: KeyboardEvent| {
        if e.key() == Key::Enter && !e.modifiers().shift() {
            e.prevent_default();
            send.call(());
        }
    };

    rsx! {
        div {
            class: "dock-question",
            textarea {
                class: "dock-question-textarea",
                placeholder: "{placeholder}",
                value: "{input_text}",
                rows: "2",
                "aria-label": "Question input",
                oninput: move |e: FormEvent| input_text.set(e.value()),
                onkeydown,
            }
            button {
                class: "dock-send-button",
                "aria-label": "Ask question button",
                disabled: disabled || submission(&input_text.read()).is_none(),
                onclick: move |_| send.call(()),
                "➤"
            }
        }
    }
}

const DOCK_STYLES: &str = r#"
/* Input Dock */
.dock-root {
    position: sticky;
    bottom: 0;
    flex: 0 0 auto;
    box-sizing: border-box;
    padding: 12px 24px 24px 24px;
    margin-top: 8px;
}

/* Question Input */
.dock-question {
    display: flex;
    align-items: flex-end;
    gap: 8px;
    height: 100%;
    min-height: 76px;
    padding: 12px 12px 12px 60px;
    box-sizing: border-box;
    background: var(--chat-surface-bg);
    border-radius: var(--chat-radius-md);
    box-shadow: var(--chat-shadow-sm);
}

.dock-question-textarea {
    flex: 1;
    min-width: 0;
    border: none;
    outline: none;
    resize: none;
    font-family: inherit;
    font-size: 14px;
    line-height: 22px;
    color: var(--chat-text-primary);
    background: transparent;
}

.dock-send-button {
    width: 32px;
    height: 32px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: transparent;
    color: var(--chat-accent-text);
    border: none;
    cursor: pointer;
    font-size: 18px;
}

.dock-send-button:disabled {
    color: var(--chat-border);
    cursor: not-allowed;
}

/* Clear Conversation */
.dock-clear-button {
    box-sizing: border-box;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 0;
    z-index: 1;
    font-size: 20px;
    color: #ffffff;
    background: radial-gradient(109.81% 107.82% at 100.1% 90.19%, #0f6cbd 33.63%, #2d87c3 70.31%, #8dddd8 100%);
    border: none;
    border-radius: var(--chat-radius-sm);
    cursor: pointer;
}

.dock-clear-button:disabled {
    background: #bdbdbd;
    cursor: not-allowed;
}

/* Stop Generating */
.dock-stop-pill {
    box-sizing: border-box;
    display: flex;
    flex-direction: row;
    justify-content: center;
    align-items: center;
    gap: 4px;
    padding: 5px 16px;
    background: var(--chat-surface-bg);
    border: 1px solid var(--chat-border);
    border-radius: var(--chat-radius-pill);
    box-shadow: var(--chat-shadow-sm);
    cursor: pointer;
    z-index: 1;
}

.dock-stop-icon {
    font-size: 10px;
    color: var(--chat-text-primary);
}

.dock-stop-text {
    font-size: 14px;
    line-height: 20px;
    color: var(--chat-text-primary);
    white-space: nowrap;
}

/* New Conversation */
.dock-new-chat-pill {
    box-sizing: border-box;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 6px;
    padding: 5px 16px;
    font-size: 14px;
    font-weight: 600;
    color: var(--chat-accent-text);
    background: var(--chat-accent-bg);
    border: none;
    border-radius: var(--chat-radius-pill);
    cursor: pointer;
    z-index: 1;
}

.dock-new-chat-pill:hover {
    background: var(--chat-accent-bg-hover);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Props, Clone, PartialEq)]
    struct SendFixture {
        typed: String,
        disabled: bool,
    }

    /// Runs one send against a live input signal and renders what happened.
    #[allow(non_snake_case)]
    fn SendHarness(fixture: SendFixture) -> Element {
        let input_text = use_signal(|| fixture.typed.clone());
        let sent = use_hook(|| take_submission(input_text, fixture.disabled));
        let sent = sent.unwrap_or_else(|| "none".to_string());
        let left = input_text.peek().clone();

        rsx! { span { "sent:{sent}|left:{left}" } }
    }

    fn run_send(typed: &str, disabled: bool) -> String {
        let mut dom = VirtualDom::new_with_props(
            SendHarness,
            SendFixture {
                typed: typed.to_string(),
                disabled,
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn send_submits_trimmed_text_and_clears_input() {
        let html = run_send("  what is the deductible? \n", false);
        assert!(html.contains("sent:what is the deductible?|left:"), "{html}");
        assert!(!html.contains("left:  what"));
    }

    #[test]
    fn send_keeps_blank_input_unsubmitted() {
        let html = run_send("   ", false);
        assert!(html.contains("sent:none|left:   "), "{html}");
    }

    #[test]
    fn send_is_ignored_while_generating() {
        let html = run_send("hello", true);
        assert!(html.contains("sent:none|left:hello"), "{html}");
    }

    #[test]
    fn blank_input_is_not_submitted() {
        assert_eq!(submission(""), None);
        assert_eq!(submission("   \n\t"), None);
    }

    #[test]
    fn submission_is_trimmed() {
        assert_eq!(submission("  hi there \n"), Some("hi there".to_string()));
    }

    #[test]
    fn selectors_carry_dock_prefix() {
        for line in DOCK_STYLES.lines().filter(|l| l.starts_with('.')) {
            assert!(line.starts_with(".dock-"), "unprefixed selector {line}");
        }
    }

    #[test]
    fn dock_is_sticky() {
        assert!(DOCK_STYLES.contains("position: sticky;"));
    }

    #[test]
    fn new_chat_pill_uses_accent_tokens() {
        let start = DOCK_STYLES.find(".dock-new-chat-pill {").unwrap();
        let pill = &DOCK_STYLES[start..];
        assert!(pill.contains("background: var(--chat-accent-bg);"));
        assert!(DOCK_STYLES.contains(".dock-new-chat-pill:hover {\n    background: var(--chat-accent-bg-hover);"));
    }
}
