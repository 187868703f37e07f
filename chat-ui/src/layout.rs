//! Layout contract for the chat surface.
//!
//! `resolve_layout` maps a [`ConversationViewState`] to the geometry every
//! component renders with. Components never compute sizes themselves; they
//! read the resolved [`ChatLayout`] and apply its style fragments, so the same
//! state always produces the same arrangement.
//!
//! Floating controls are positioned through explicit [`Anchor`]s against the
//! input dock's box instead of relying on whichever ancestor happens to be
//! positioned.

use shared_types::{ActionAffordance, ClearButtonVariant, ConversationViewState};

/// Widest viewport that still gets the narrow layout.
pub const NARROW_MAX_WIDTH: f64 = 480.0;

pub const STREAM_MAX_WIDTH: f64 = 1028.0;
pub const STREAM_PADDING_X: f64 = 24.0;
pub const BUBBLE_MAX_WIDTH_PERCENT: f64 = 80.0;
pub const ERROR_MAX_WIDTH: f64 = 800.0;

pub const CITATION_FLEX_GROW: f64 = 0.3;
pub const CITATION_MAX_WIDTH_PERCENT: f64 = 30.0;
/// Inner padding of the citation panel, counted inside its width.
pub const CITATION_PADDING: f64 = 16.0;
/// Height kept free above and below the citation panel.
pub const CITATION_VERTICAL_RESERVE: f64 = 100.0;

pub const DOCK_MIN_HEIGHT: f64 = 100.0;
pub const DOCK_BOTTOM_MARGIN: f64 = 50.0;
/// Horizontal space the dock leaves free inside the stream column.
const DOCK_SIDE_RESERVE: f64 = 100.0;
const DOCK_NARROW_FRACTION: f64 = 0.9;

pub const CLEAR_BUTTON_SIZE: f64 = 40.0;
const CLEAR_BUTTON_LEFT: f64 = 7.0;
const CLEAR_BUTTON_TOP_STANDARD: f64 = 18.0;
const CLEAR_BUTTON_TOP_NO_COSMOS: f64 = 66.0;

pub const PILL_WIDTH: f64 = 161.0;
pub const PILL_HEIGHT: f64 = 32.0;
/// Gap between the dock's top edge and the floating pills.
const PILL_GAP_ABOVE_DOCK: f64 = 16.0;
const STOP_PILL_OFFSET_X: f64 = 25.8;

const EMPTY_TITLE_LINE_HEIGHT: f64 = 24.0;
const EMPTY_TITLE_LINE_HEIGHT_NARROW: f64 = 36.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Default,
    Narrow,
}

impl Breakpoint {
    pub fn for_width(viewport_width: f64) -> Self {
        if viewport_width <= NARROW_MAX_WIDTH {
            Breakpoint::Narrow
        } else {
            Breakpoint::Default
        }
    }

    pub fn is_narrow(self) -> bool {
        self == Breakpoint::Narrow
    }
}

// ============================================================================
// Anchors
// ============================================================================

/// Box a floating control is positioned against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorTarget {
    InputDock,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HorizontalAnchor {
    /// Fixed distance from the target's left edge.
    Left(f64),
    /// Centered on the target, then shifted right by `offset`.
    Center { offset: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VerticalAnchor {
    /// Fixed distance below the target's top edge.
    Top(f64),
    /// Bottom edge sits `gap` above the target's top edge.
    Above(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub target: AnchorTarget,
    pub horizontal: HorizontalAnchor,
    pub vertical: VerticalAnchor,
}

impl Anchor {
    fn style(&self) -> String {
        let horizontal = match self.horizontal {
            HorizontalAnchor::Left(x) => format!("left: {x}px;"),
            HorizontalAnchor::Center { offset } if offset == 0.0 => {
                "left: 50%; transform: translateX(-50%);".to_string()
            }
            HorizontalAnchor::Center { offset } => {
                format!("left: calc(50% + {offset}px); transform: translateX(-50%);")
            }
        };
        let vertical = match self.vertical {
            VerticalAnchor::Top(y) => format!("top: {y}px;"),
            VerticalAnchor::Above(gap) => format!("bottom: calc(100% + {gap}px);"),
        };
        format!("position: absolute; {horizontal} {vertical}")
    }
}

/// A fixed-size control placed through an [`Anchor`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingBox {
    pub anchor: Anchor,
    pub width: f64,
    pub height: f64,
}

impl FloatingBox {
    /// Left edge relative to the anchor target of the given width.
    pub fn left_in(&self, target_width: f64) -> f64 {
        match self.anchor.horizontal {
            HorizontalAnchor::Left(x) => x,
            HorizontalAnchor::Center { offset } => target_width / 2.0 - self.width / 2.0 + offset,
        }
    }

    /// Vertical extent `(top, bottom)` relative to the target's top edge.
    /// Negative values lie above the target.
    pub fn vertical_span(&self) -> (f64, f64) {
        match self.anchor.vertical {
            VerticalAnchor::Top(y) => (y, y + self.height),
            VerticalAnchor::Above(gap) => (-gap - self.height, -gap),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "{} width: {}px; height: {}px;",
            self.anchor.style(),
            self.width,
            self.height
        )
    }
}

/// Placement of the clear-conversation control for a variant.
pub fn clear_button_box(variant: ClearButtonVariant, breakpoint: Breakpoint) -> FloatingBox {
    let left = if breakpoint.is_narrow() {
        0.0
    } else {
        CLEAR_BUTTON_LEFT
    };
    let top = match variant {
        ClearButtonVariant::Standard => CLEAR_BUTTON_TOP_STANDARD,
        ClearButtonVariant::NoCosmos => CLEAR_BUTTON_TOP_NO_COSMOS,
    };

    FloatingBox {
        anchor: Anchor {
            target: AnchorTarget::InputDock,
            horizontal: HorizontalAnchor::Left(left),
            vertical: VerticalAnchor::Top(top),
        },
        width: CLEAR_BUTTON_SIZE,
        height: CLEAR_BUTTON_SIZE,
    }
}

fn pill_box(offset: f64) -> FloatingBox {
    FloatingBox {
        anchor: Anchor {
            target: AnchorTarget::InputDock,
            horizontal: HorizontalAnchor::Center { offset },
            vertical: VerticalAnchor::Above(PILL_GAP_ABOVE_DOCK),
        },
        width: PILL_WIDTH,
        height: PILL_HEIGHT,
    }
}

// ============================================================================
// Resolved Geometry
// ============================================================================

/// Conversation column: message stream with the input dock below it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnGeometry {
    pub width: f64,
    /// `None` while the narrow layout shows the citation panel in the
    /// stream's place. The dock stays mounted either way.
    pub stream_width: Option<f64>,
    pub dock: DockGeometry,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DockGeometry {
    pub width: f64,
    pub min_height: f64,
    pub bottom_margin: f64,
    narrow: bool,
}

impl DockGeometry {
    pub fn style(&self) -> String {
        let width = if self.narrow {
            "width: 90%; max-width: 90%;".to_string()
        } else {
            format!("width: calc(100% - {DOCK_SIDE_RESERVE}px); max-width: {STREAM_MAX_WIDTH}px;")
        };
        format!(
            "{width} min-height: {}px; margin-bottom: {}px;",
            self.min_height, self.bottom_margin
        )
    }
}

/// Citation panel box. `width` is the border box, padding included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelGeometry {
    pub width: f64,
    pub content_width: f64,
    pub max_height: f64,
    narrow: bool,
}

impl PanelGeometry {
    pub fn style(&self) -> String {
        // Content-based basis: the panel grows into its cap instead of
        // splitting the row by grow factors alone.
        let sizing = if self.narrow {
            "flex: 1 1 auto; width: 100%; max-width: 100%;".to_string()
        } else {
            format!(
                "flex: auto; flex-grow: {CITATION_FLEX_GROW}; max-width: {CITATION_MAX_WIDTH_PERCENT}%;"
            )
        };
        format!(
            "{sizing} box-sizing: border-box; padding: {CITATION_PADDING}px; \
             max-height: calc(100vh - {CITATION_VERTICAL_RESERVE}px);"
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChatLayout {
    pub breakpoint: Breakpoint,
    pub root_width: f64,
    pub column: ColumnGeometry,
    /// `None` when the panel is closed; it then reserves no space.
    pub citation_panel: Option<PanelGeometry>,
    pub clear_button: FloatingBox,
    pub stop_generating: FloatingBox,
    pub new_conversation: FloatingBox,
    pub empty_title_line_height: f64,
}

impl ChatLayout {
    pub fn empty_title_style(&self) -> String {
        format!("line-height: {}px;", self.empty_title_line_height)
    }

    /// True when the panel is rendered inside the column instead of beside it.
    pub fn panel_replaces_stream(&self) -> bool {
        self.column.stream_width.is_none()
    }
}

/// Resolve the geometry for one render.
pub fn resolve_layout(state: &ConversationViewState, clear_variant: ClearButtonVariant) -> ChatLayout {
    let breakpoint = Breakpoint::for_width(state.viewport_width);
    let narrow = breakpoint.is_narrow();
    let root_width = state.viewport_width.max(0.0);
    let panel_max_height = (state.viewport_height - CITATION_VERTICAL_RESERVE).max(0.0);

    let citation_panel = state.citation_panel_open.then(|| {
        let width = if narrow {
            root_width
        } else {
            root_width * CITATION_MAX_WIDTH_PERCENT / 100.0
        };
        PanelGeometry {
            width,
            content_width: (width - 2.0 * CITATION_PADDING).max(0.0),
            max_height: panel_max_height,
            narrow,
        }
    });

    let (width, stream_width) = match citation_panel {
        Some(_) if narrow => (root_width, None),
        _ => {
            let width = root_width - citation_panel.map_or(0.0, |panel| panel.width);
            (width, Some(width.min(STREAM_MAX_WIDTH)))
        }
    };
    let dock_width = if narrow {
        state.viewport_width * DOCK_NARROW_FRACTION
    } else {
        (width - DOCK_SIDE_RESERVE).clamp(0.0, STREAM_MAX_WIDTH)
    };
    let column = ColumnGeometry {
        width,
        stream_width,
        dock: DockGeometry {
            width: dock_width,
            min_height: DOCK_MIN_HEIGHT,
            bottom_margin: DOCK_BOTTOM_MARGIN,
            narrow,
        },
    };

    let layout = ChatLayout {
        breakpoint,
        root_width,
        column,
        citation_panel,
        clear_button: clear_button_box(clear_variant, breakpoint),
        stop_generating: pill_box(STOP_PILL_OFFSET_X),
        new_conversation: pill_box(0.0),
        empty_title_line_height: if narrow {
            EMPTY_TITLE_LINE_HEIGHT_NARROW
        } else {
            EMPTY_TITLE_LINE_HEIGHT
        },
    };

    dioxus_logger::tracing::trace!(
        viewport_width = state.viewport_width,
        narrow,
        panel_open = state.citation_panel_open,
        "chat layout resolved"
    );

    layout
}

/// Dock controls to mount for the current state.
///
/// `StopGenerating` is mounted iff a response is streaming. The clear control
/// is hidden for an empty conversation in the standard placement and stays
/// mounted in the `NoCosmos` placement.
pub fn mounted_affordances(
    state: &ConversationViewState,
    clear_variant: ClearButtonVariant,
) -> Vec<ActionAffordance> {
    let mut mounted = Vec::with_capacity(2);

    if !state.is_empty || clear_variant == ClearButtonVariant::NoCosmos {
        mounted.push(ActionAffordance::ClearConversation);
    }
    if state.is_generating {
        mounted.push(ActionAffordance::StopGenerating);
    } else if !state.is_empty {
        mounted.push(ActionAffordance::NewConversation);
    }

    mounted
}
