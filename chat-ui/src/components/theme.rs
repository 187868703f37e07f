/// Design tokens, scoped to the chat shell so they never leak into the host page.
pub const TOKENS: &str = r#"
.chat-shell {
    /* Accent */
    --chat-accent-text: #5b6dfe;
    --chat-accent-bg: #dfe9fd;
    --chat-accent-bg-hover: #c1e2fc;

    /* Text */
    --chat-text-primary: #242424;
    --chat-text-secondary: #616161;
    --chat-link-text: #115ea3;

    /* Surfaces */
    --chat-user-bubble-bg: #f0f6ff;
    --chat-surface-bg: #ffffff;
    --chat-border: #d1d1d1;
    --chat-error: rgba(182, 52, 67, 1);

    /* Radius & Shadows */
    --chat-radius-sm: 4px;
    --chat-radius-md: 8px;
    --chat-radius-pill: 16px;
    --chat-shadow-sm: 0px 2px 4px rgba(0, 0, 0, 0.14), 0px 0px 2px rgba(0, 0, 0, 0.12);

    font-family: "Segoe UI", -apple-system, BlinkMacSystemFont, Roboto, "Helvetica Neue", sans-serif;
    color: var(--chat-text-primary);
}
"#;
