//! Button component.
//!
//! Buttons render as `type="button"` with no handler, link, or form
//! attachment, so they are inert unless a page wires behaviour around them.

/// Visual style of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled primary button.
    #[default]
    Default,
    /// Transparent with a border.
    Outline,
    /// Muted filled button.
    Secondary,
    /// No border or background until hovered.
    Ghost,
}

impl ButtonVariant {
    /// Name used in the `btn-*` class and the `data-variant` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
        }
    }
}

/// Render a single `<button>` element.
pub fn render_button(label: &str, variant: ButtonVariant) -> String {
    let variant = variant.as_str();
    let mut html = String::with_capacity(96 + label.len());
    html.push_str("<button type=\"button\" class=\"btn btn-");
    html.push_str(variant);
    html.push_str("\" data-variant=\"");
    html.push_str(variant);
    html.push_str("\">");
    html.push_str(&escape_html(label));
    html.push_str("</button>");
    html
}

/// Escape text for use in HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
