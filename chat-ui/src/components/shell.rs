use dioxus::prelude::*;
use shared_types::{ChatSignal, CitationEntry, ConversationViewState, Message};

use super::citation::CitationPanel;
use super::dock::InputDock;
use super::stream::MessageStream;
use super::theme::TOKENS;
use crate::config::ChatUiConfig;
use crate::layout::{mounted_affordances, resolve_layout};

/// Whole chat surface: message stream and input dock beside the citation panel.
///
/// Renders purely from its props. `citations` is the entry list of the
/// selected message; the panel mounts only when the state says it is open
/// and a list is present. On narrow viewports the panel takes the stream's
/// place above the dock, so the dock controls stay reachable.
#[component]
pub fn ChatSurface(
    state: ConversationViewState,
    messages: Vec<Message>,
    citations: Option<Vec<CitationEntry>>,
    config: ChatUiConfig,
    on_signal: Callback<ChatSignal>,
) -> Element {
    let state = effective_state(state, citations.is_some());
    let layout = resolve_layout(&state, config.clear_button);
    let affordances = mounted_affordances(&state, config.clear_button);

    let panel = layout.citation_panel.zip(citations).map(|(geometry, entries)| {
        rsx! {
            CitationPanel {
                geometry,
                title: config.citation_panel_title.clone(),
                entries,
                on_signal,
            }
        }
    });
    let (panel_in_column, panel_beside) = if layout.panel_replaces_stream() {
        (panel, None)
    } else {
        (None, panel)
    };

    rsx! {
        style { {TOKENS} }
        style { {SHELL_STYLES} }

        div {
            class: "chat-shell",

            div {
                class: "chat-root",

                div {
                    class: "chat-column",

                    if !layout.panel_replaces_stream() {
                        MessageStream {
                            state,
                            messages,
                            config: config.clone(),
                            empty_title_style: layout.empty_title_style(),
                            on_signal,
                        }
                    }
                    {panel_in_column}

                    InputDock {
                        geometry: layout.column.dock,
                        layout,
                        affordances,
                        is_generating: state.is_generating,
                        placeholder: config.input_placeholder.clone(),
                        on_signal,
                    }
                }

                {panel_beside}
            }
        }
    }
}

/// The panel only counts as open when there is something to show in it.
fn effective_state(state: ConversationViewState, has_citations: bool) -> ConversationViewState {
    ConversationViewState {
        citation_panel_open: state.citation_panel_open && has_citations,
        ..state
    }
}

const SHELL_STYLES: &str = r#"
.chat-shell {
    display: flex;
    flex-direction: column;
    flex: 1;
    gap: 0;
    height: 100%;
    min-height: 0;
}

.chat-root {
    display: flex;
    flex-direction: row;
    flex: 1;
    gap: 0;
    min-height: 0;
}

.chat-column {
    flex: 1 1 0;
    min-width: 0;
    display: flex;
    flex-direction: column;
    align-items: center;
    position: relative;
    overflow: hidden;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::resolve_layout;
    use shared_types::ClearButtonVariant;

    #[derive(Props, Clone, PartialEq)]
    struct SurfaceFixture {
        state: ConversationViewState,
        messages: Vec<Message>,
        citations: Option<Vec<CitationEntry>>,
    }

    #[allow(non_snake_case)]
    fn SurfaceHarness(fixture: SurfaceFixture) -> Element {
        rsx! {
            ChatSurface {
                state: fixture.state,
                messages: fixture.messages,
                citations: fixture.citations,
                config: ChatUiConfig::default(),
                on_signal: move |_: ChatSignal| {},
            }
        }
    }

    fn render(
        state: ConversationViewState,
        messages: Vec<Message>,
        citations: Option<Vec<CitationEntry>>,
    ) -> String {
        let mut dom = VirtualDom::new_with_props(
            SurfaceHarness,
            SurfaceFixture {
                state,
                messages,
                citations,
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Every `class` attribute value in document order.
    fn classes(html: &str) -> Vec<&str> {
        html.split("class=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    fn has_class(html: &str, class: &str) -> bool {
        classes(html)
            .iter()
            .any(|value| value.split_whitespace().any(|c| c == class))
    }

    fn conversation() -> Vec<Message> {
        vec![
            Message::user("first question"),
            Message::assistant("second answer"),
            Message::error("network failure"),
        ]
    }

    fn position(html: &str, text: &str) -> usize {
        html.find(text)
            .unwrap_or_else(|| panic!("{text:?} not rendered"))
    }

    #[test]
    fn panel_without_entries_reserves_no_space() {
        let requested = ConversationViewState::default().with_citation_panel(true);
        let state = effective_state(requested, false);
        assert!(!state.citation_panel_open);

        let layout = resolve_layout(&state, ClearButtonVariant::Standard);
        assert!(layout.citation_panel.is_none());
        assert_eq!(layout.column.width, requested.viewport_width);
    }

    #[test]
    fn panel_with_entries_stays_open() {
        let requested = ConversationViewState::default().with_citation_panel(true);
        assert!(effective_state(requested, true).citation_panel_open);
    }

    #[test]
    fn empty_conversation_renders_only_empty_state() {
        let html = render(ConversationViewState::default(), vec![], None);

        assert!(has_class(&html, "stream-empty-state"));
        assert!(html.contains("Start chatting"));
        assert!(!has_class(&html, "stream-row"));
        assert!(has_class(&html, "dock-question"));
        assert!(!has_class(&html, "dock-clear-button"));
        assert!(!has_class(&html, "dock-stop-pill"));
        assert!(!has_class(&html, "dock-new-chat-pill"));
        assert!(!has_class(&html, "citation-panel"));
    }

    #[test]
    fn conversation_renders_bubbles_in_order() {
        let messages = conversation();
        let state = ConversationViewState::for_messages(&messages, (1280.0, 800.0));
        let html = render(state, messages, None);

        assert!(!has_class(&html, "stream-empty-state"));
        let user = position(&html, "first question");
        let assistant = position(&html, "second answer");
        let error = position(&html, "network failure");
        assert!(user < assistant && assistant < error);

        let bubbles: Vec<_> = classes(&html)
            .into_iter()
            .filter(|c| c.starts_with("stream-bubble"))
            .collect();
        assert_eq!(
            bubbles,
            vec![
                "stream-bubble stream-bubble-user",
                "stream-bubble stream-bubble-assistant",
                "stream-bubble-error",
            ]
        );
    }

    #[test]
    fn two_citations_render_one_separator() {
        let messages = vec![Message::user("q"), Message::assistant("a")];
        let state = ConversationViewState::for_messages(&messages, (1280.0, 800.0))
            .with_citation_panel(true);
        let citations = vec![
            CitationEntry::new("Doc A", "alpha"),
            CitationEntry::new("Doc B", "beta"),
        ];
        let html = render(state, messages, Some(citations));

        assert!(has_class(&html, "citation-panel"));
        let entries: Vec<_> = classes(&html)
            .into_iter()
            .filter(|c| c.split_whitespace().next() == Some("citation-entry"))
            .collect();
        assert_eq!(entries.len(), 2);
        let separated = entries
            .iter()
            .filter(|c| !c.contains("citation-entry-last"))
            .count();
        assert_eq!(separated, 1);
        assert!(position(&html, "Doc A") < position(&html, "Doc B"));
    }

    #[test]
    fn stop_pill_rendered_iff_generating_at_every_breakpoint() {
        for width in [375.0, 480.0, 1280.0] {
            for panel_open in [false, true] {
                for generating in [false, true] {
                    let messages = conversation();
                    let state = ConversationViewState::for_messages(&messages, (width, 800.0))
                        .generating(generating)
                        .with_citation_panel(panel_open);
                    let citations = panel_open.then(|| vec![CitationEntry::new("Doc A", "alpha")]);
                    let html = render(state, messages, citations);

                    assert_eq!(
                        has_class(&html, "dock-stop-pill"),
                        generating,
                        "width {width}, panel {panel_open}, generating {generating}"
                    );
                    assert_eq!(has_class(&html, "dock-new-chat-pill"), !generating);
                }
            }
        }
    }

    #[test]
    fn narrow_panel_replaces_stream_but_keeps_dock() {
        let messages = conversation();
        let state = ConversationViewState::for_messages(&messages, (400.0, 800.0))
            .generating(true)
            .with_citation_panel(true);
        let html = render(state, messages, Some(vec![CitationEntry::new("Doc A", "alpha")]));

        assert!(has_class(&html, "citation-panel"));
        assert!(!has_class(&html, "stream-region"));
        assert!(has_class(&html, "dock-root"));
        assert!(has_class(&html, "dock-stop-pill"));
    }
}
