use shared_types::{ClearButtonVariant, FrontendSettings};

pub const DEFAULT_CHAT_TITLE: &str = "Start chatting";
pub const DEFAULT_CHAT_DESCRIPTION: &str = "This chatbot is configured to answer your questions";
pub const DEFAULT_INPUT_PLACEHOLDER: &str = "Type a new question...";
pub const DEFAULT_CITATION_PANEL_TITLE: &str = "Citations";

/// Presentation configuration that does not change between renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatUiConfig {
    /// Vertical slot of the clear control. Chosen by the host; never inferred.
    pub clear_button: ClearButtonVariant,
    pub chat_title: String,
    pub chat_description: String,
    /// Empty-state image; a built-in icon is used when unset.
    pub chat_logo: Option<String>,
    pub input_placeholder: String,
    pub citation_panel_title: String,
}

impl Default for ChatUiConfig {
    fn default() -> Self {
        Self {
            clear_button: ClearButtonVariant::default(),
            chat_title: DEFAULT_CHAT_TITLE.to_string(),
            chat_description: DEFAULT_CHAT_DESCRIPTION.to_string(),
            chat_logo: None,
            input_placeholder: DEFAULT_INPUT_PLACEHOLDER.to_string(),
            citation_panel_title: DEFAULT_CITATION_PANEL_TITLE.to_string(),
        }
    }
}

impl ChatUiConfig {
    /// Empty-state copy and logo from the backend's frontend settings.
    /// Blank strings count as unset.
    pub fn from_settings(settings: &FrontendSettings) -> Self {
        let defaults = Self::default();
        let ui = &settings.ui;

        Self {
            chat_title: non_blank(ui.chat_title.as_deref()).unwrap_or(defaults.chat_title),
            chat_description: non_blank(ui.chat_description.as_deref())
                .unwrap_or(defaults.chat_description),
            chat_logo: non_blank(ui.effective_chat_logo()),
            ..defaults
        }
    }

    pub fn with_clear_button(mut self, variant: ClearButtonVariant) -> Self {
        self.clear_button = variant;
        self
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::FrontendUiSettings;

    #[test]
    fn defaults_use_builtin_copy() {
        let config = ChatUiConfig::default();
        assert_eq!(config.chat_title, DEFAULT_CHAT_TITLE);
        assert_eq!(config.clear_button, ClearButtonVariant::Standard);
        assert!(config.chat_logo.is_none());
    }

    #[test]
    fn settings_override_empty_state_copy() {
        let settings = FrontendSettings {
            ui: FrontendUiSettings {
                logo: Some("/assets/contoso.svg".to_string()),
                chat_title: Some("Ask Contoso".to_string()),
                chat_description: Some("  ".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let config = ChatUiConfig::from_settings(&settings);
        assert_eq!(config.chat_title, "Ask Contoso");
        assert_eq!(config.chat_description, DEFAULT_CHAT_DESCRIPTION);
        assert_eq!(config.chat_logo.as_deref(), Some("/assets/contoso.svg"));
    }

    #[test]
    fn clear_button_variant_is_explicit() {
        let settings = FrontendSettings::default();
        let config = ChatUiConfig::from_settings(&settings);
        assert_eq!(config.clear_button, ClearButtonVariant::Standard);

        let config = config.with_clear_button(ClearButtonVariant::NoCosmos);
        assert_eq!(config.clear_button, ClearButtonVariant::NoCosmos);
    }
}
