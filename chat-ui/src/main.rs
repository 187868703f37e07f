use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use gloo_timers::future::TimeoutFuture;

use chat_ui::{
    fetch_frontend_settings, open_in_new_tab, viewport_size, watch_viewport, ChatSurface,
    ChatUiConfig,
};
use shared_types::{ChatSignal, CitationEntry, ConversationViewState, Message, ResultRow};

const FALLBACK_VIEWPORT: (f64, f64) = (1280.0, 800.0);
const REPLY_DELAY_MS: u32 = 1500;

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

/// Demo host: owns the conversation and answers every signal the surface raises.
#[component]
fn App() -> Element {
    let mut messages = use_signal(Vec::<Message>::new);
    let mut generating = use_signal(|| false);
    let mut selected = use_signal(|| None::<String>);
    let mut turn = use_signal(|| 0u64);
    let mut viewport = use_signal(|| viewport_size().unwrap_or(FALLBACK_VIEWPORT));
    let mut config = use_signal(ChatUiConfig::default);

    let on_resize = use_callback(move |size: (f64, f64)| viewport.set(size));
    use_hook(move || watch_viewport(on_resize));

    // Load empty-state copy on mount
    use_effect(move || {
        spawn(async move {
            match fetch_frontend_settings().await {
                Ok(settings) => config.set(ChatUiConfig::from_settings(&settings)),
                Err(e) => {
                    dioxus_logger::tracing::warn!("Using default chat settings: {}", e);
                }
            }
        });
    });

    let on_signal = use_callback(move |signal: ChatSignal| match signal {
        ChatSignal::SubmitQuestion { text } => {
            if generating() {
                return;
            }
            messages.write().push(Message::user(text.clone()));
            generating.set(true);
            *turn.write() += 1;
            let current = turn();

            spawn(async move {
                TimeoutFuture::new(REPLY_DELAY_MS).await;
                // Stopped or reset while waiting
                if turn() != current || !generating() {
                    return;
                }
                messages.write().push(demo_reply(&text));
                generating.set(false);
            });
        }
        ChatSignal::StopGenerating => {
            *turn.write() += 1;
            generating.set(false);
        }
        ChatSignal::StartNewConversation | ChatSignal::ClearConversation => {
            *turn.write() += 1;
            generating.set(false);
            selected.set(None);
            messages.write().clear();
        }
        ChatSignal::ShowCitations { message_id } => selected.set(Some(message_id)),
        ChatSignal::DismissCitationPanel => selected.set(None),
        ChatSignal::OpenCitationSource { url } => {
            info!("Opening citation source {}", url);
            open_in_new_tab(&url);
        }
    });

    let list = messages.read().clone();
    let citations = selected
        .read()
        .as_ref()
        .and_then(|id| list.iter().find(|m| &m.id == id))
        .filter(|m| m.has_citations())
        .map(|m| m.citations.clone());
    let state = ConversationViewState::for_messages(&list, viewport())
        .generating(generating())
        .with_citation_panel(citations.is_some());

    rsx! {
        div {
            style: "height: 100vh; display: flex; flex-direction: column; background: #f2f2f2;",
            ChatSurface {
                state,
                messages: list,
                citations,
                config: config(),
                on_signal,
            }
        }
    }
}

fn demo_reply(question: &str) -> Message {
    if question.to_lowercase().contains("fail") {
        return Message::error("The assistant could not answer. Please try again later.");
    }

    Message::assistant(format!(
        "Here is what the knowledge base says about \"{question}\"."
    ))
    .with_citations(vec![
        CitationEntry::new(
            "Employee handbook",
            "Benefits are reviewed annually and communicated in January.",
        )
        .with_source("https://example.com/handbook.pdf"),
        CitationEntry::new("Plan lookup", "Results of the benefits plan query.").with_result_rows(
            vec![
                ResultRow {
                    label: "Plan".to_string(),
                    value: "Northwind Health Plus".to_string(),
                },
                ResultRow {
                    label: "Deductible".to_string(),
                    value: "$1,500".to_string(),
                },
            ],
        ),
    ])
}
