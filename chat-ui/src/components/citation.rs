use dioxus::prelude::*;
use shared_types::{ChatSignal, CitationEntry, ResultRow};

use super::emit;
use crate::layout::PanelGeometry;

/// Edge treatment of one item in a separated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryBoundary {
    pub leading_margin: bool,
    pub trailing_separator: bool,
}

/// Separators exist only strictly between adjacent items.
pub fn entry_boundaries(count: usize) -> Vec<EntryBoundary> {
    (0..count)
        .map(|index| EntryBoundary {
            leading_margin: index > 0,
            trailing_separator: index + 1 < count,
        })
        .collect()
}

fn boundary_class(base: &str, boundary: EntryBoundary) -> String {
    let mut class = base.to_string();
    if !boundary.leading_margin {
        class.push_str(&format!(" {base}-first"));
    }
    if !boundary.trailing_separator {
        class.push_str(&format!(" {base}-last"));
    }
    class
}

#[component]
pub fn CitationPanel(
    geometry: PanelGeometry,
    title: String,
    entries: Vec<CitationEntry>,
    on_signal: Callback<ChatSignal>,
) -> Element {
    let boundaries = entry_boundaries(entries.len());

    rsx! {
        style { {CITATION_STYLES} }

        section {
            class: "citation-panel",
            style: "{geometry.style()}",
            "aria-label": "Citations panel",

            div {
                class: "citation-panel-header",
                span { class: "citation-panel-title", "{title}" }
                button {
                    class: "citation-panel-dismiss",
                    "aria-label": "Close citations panel",
                    onclick: move |_| emit(on_signal, ChatSignal::DismissCitationPanel),
                    "✕"
                }
            }

            div {
                class: "citation-panel-body",
                for (entry, boundary) in entries.into_iter().zip(boundaries) {
                    CitationEntryView { entry, boundary, on_signal }
                }
            }
        }
    }
}

#[component]
fn CitationEntryView(
    entry: CitationEntry,
    boundary: EntryBoundary,
    on_signal: Callback<ChatSignal>,
) -> Element {
    let title_link = entry.source_link.clone();

    rsx! {
        div {
            class: boundary_class("citation-entry", boundary),

            if let Some(url) = title_link {
                span {
                    class: "citation-entry-title citation-entry-title-link",
                    role: "link",
                    tabindex: "0",
                    onclick: move |_| emit(on_signal, ChatSignal::OpenCitationSource { url: url.clone() }),
                    "{entry.title}"
                }
            } else {
                span { class: "citation-entry-title", "{entry.title}" }
            }

            div { class: "citation-entry-content", "{entry.content}" }

            if !entry.result_rows.is_empty() {
                ResultList { rows: entry.result_rows.clone() }
            }

            if let Some(url) = entry.source_link.clone() {
                ViewSourceButton { url, on_signal }
            }
        }
    }
}

/// Label/value rows of a structured tool-result citation.
#[component]
pub fn ResultList(rows: Vec<ResultRow>) -> Element {
    let boundaries = entry_boundaries(rows.len());

    rsx! {
        div {
            class: "citation-result-list",
            for (row, boundary) in rows.into_iter().zip(boundaries) {
                div {
                    class: boundary_class("citation-result-row", boundary),
                    span { class: "citation-result-label", "{row.label}" }
                    span { class: "citation-result-value", "{row.value}" }
                }
            }
        }
    }
}

#[component]
fn ViewSourceButton(url: String, on_signal: Callback<ChatSignal>) -> Element {
    let tooltip = url.clone();

    rsx! {
        button {
            class: "citation-view-source",
            title: "{tooltip}",
            onclick: move |_| emit(on_signal, ChatSignal::OpenCitationSource { url: url.clone() }),
            "View source"
        }
    }
}

const CITATION_STYLES: &str = r#"
/* Citation Panel */
.citation-panel {
    display: flex;
    flex-direction: column;
    align-items: flex-start;
    align-self: stretch;
    gap: 8px;
    min-width: 0;
    overflow-y: auto;
    background: var(--chat-surface-bg);
    border-radius: var(--chat-radius-md);
    box-shadow: var(--chat-shadow-sm);
}

.citation-panel-header {
    display: flex;
    flex-direction: row;
    justify-content: space-between;
    align-items: center;
    align-self: stretch;
    width: 100%;
}

.citation-panel-title {
    font-weight: 600;
    font-size: 18px;
    line-height: 24px;
    color: var(--chat-text-primary);
}

.citation-panel-dismiss {
    width: 28px;
    height: 28px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: transparent;
    color: var(--chat-text-primary);
    border: none;
    border-radius: var(--chat-radius-sm);
    cursor: pointer;
}

.citation-panel-dismiss:hover {
    background: var(--chat-text-primary);
    color: var(--chat-surface-bg);
}

.citation-panel-body {
    display: flex;
    flex-direction: column;
    width: 100%;
}

/* Citation Entries */
.citation-entry {
    display: flex;
    flex-direction: column;
    gap: 4px;
    margin-top: 12px;
    padding-bottom: 12px;
    border-bottom: 1px solid var(--chat-border);
    font-size: 14px;
    line-height: 20px;
    color: var(--chat-text-primary);
    overflow-wrap: break-word;
}

.citation-entry-first {
    margin-top: 0;
}

.citation-entry-last {
    padding-bottom: 0;
    border-bottom: none;
}

.citation-entry-title {
    font-weight: 600;
    color: var(--chat-link-text);
}

.citation-entry-title-link {
    cursor: pointer;
}

.citation-entry-title-link:hover {
    text-decoration: underline;
}

.citation-entry-content {
    white-space: pre-wrap;
}

/* Result List */
.citation-result-list {
    display: flex;
    flex-direction: column;
    width: 100%;
}

.citation-result-row {
    display: flex;
    flex-direction: row;
    gap: 8px;
    margin-top: 6px;
    padding-bottom: 6px;
    border-bottom: 1px solid var(--chat-border);
}

.citation-result-row-first {
    margin-top: 0;
}

.citation-result-row-last {
    padding-bottom: 0;
    border-bottom: none;
}

.citation-result-label {
    font-weight: 600;
    flex-shrink: 0;
}

.citation-result-value {
    min-width: 0;
    overflow-wrap: anywhere;
}

/* View Source */
.citation-view-source {
    align-self: flex-start;
    padding: 2px 10px;
    font-size: 12px;
    line-height: 16px;
    color: var(--chat-link-text);
    background: transparent;
    border: 1px solid var(--chat-border);
    border-radius: var(--chat-radius-pill);
    cursor: pointer;
}

.citation-view-source:hover {
    text-decoration: underline;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn separators(boundaries: &[EntryBoundary]) -> usize {
        boundaries.iter().filter(|b| b.trailing_separator).count()
    }

    #[test]
    fn two_entries_get_one_separator_between_them() {
        let boundaries = entry_boundaries(2);
        assert_eq!(separators(&boundaries), 1);
        assert!(!boundaries[0].leading_margin);
        assert!(boundaries[0].trailing_separator);
        assert!(boundaries[1].leading_margin);
        assert!(!boundaries[1].trailing_separator);
    }

    #[test]
    fn single_entry_has_no_separators() {
        assert_eq!(
            entry_boundaries(1),
            vec![EntryBoundary {
                leading_margin: false,
                trailing_separator: false,
            }]
        );
        assert!(entry_boundaries(0).is_empty());
    }

    #[test]
    fn separators_only_between_adjacent_entries() {
        for count in 2..8 {
            let boundaries = entry_boundaries(count);
            assert_eq!(separators(&boundaries), count - 1);
            assert!(!boundaries[0].leading_margin);
            assert!(!boundaries[count - 1].trailing_separator);
            assert!(boundaries[1..count - 1]
                .iter()
                .all(|b| b.leading_margin && b.trailing_separator));
        }
    }

    #[test]
    fn boundary_classes_suppress_edges() {
        let boundaries = entry_boundaries(3);
        assert_eq!(
            boundary_class("citation-entry", boundaries[0]),
            "citation-entry citation-entry-first"
        );
        assert_eq!(boundary_class("citation-entry", boundaries[1]), "citation-entry");
        assert_eq!(
            boundary_class("citation-entry", boundaries[2]),
            "citation-entry citation-entry-last"
        );
        assert_eq!(
            boundary_class("citation-result-row", entry_boundaries(1)[0]),
            "citation-result-row citation-result-row-first citation-result-row-last"
        );
    }

    #[test]
    fn edge_classes_remove_margin_and_border() {
        assert!(CITATION_STYLES.contains(".citation-entry-first {\n    margin-top: 0;"));
        assert!(CITATION_STYLES.contains("border-bottom: none;"));
        assert!(CITATION_STYLES.contains(".citation-result-row {\n    display: flex;\n    flex-direction: row;\n    gap: 8px;"));
    }
}
