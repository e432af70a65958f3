//! Admin / model-ops page.
//!
//! Placeholder for feature flags, model rollouts, and quality metrics. The
//! "Create Feature Flag" button is rendered but not bound to anything.

use super::button::{ButtonVariant, render_button};

/// Page heading.
pub const ADMIN_TITLE: &str = "Admin / Model Ops";

/// Paragraph under the heading.
pub const ADMIN_DESCRIPTION: &str = "Feature flags, model rollouts, and quality metrics.";

/// Label of the (inert) action button.
pub const CREATE_FLAG_LABEL: &str = "Create Feature Flag";

/// Render the admin page body (without the document shell).
pub fn render() -> String {
    let button = render_button(CREATE_FLAG_LABEL, ButtonVariant::Outline);

    let mut html = String::with_capacity(384);
    html.push_str("<main class=\"mx-auto max-w-5xl px-6 py-10\">\n");
    html.push_str("  <h1 class=\"text-2xl font-semibold\">");
    html.push_str(ADMIN_TITLE);
    html.push_str("</h1>\n");
    html.push_str("  <p class=\"mt-2 text-slate-300\">");
    html.push_str(ADMIN_DESCRIPTION);
    html.push_str("</p>\n");
    html.push_str("  <div class=\"mt-6\">\n    ");
    html.push_str(&button);
    html.push_str("\n  </div>\n</main>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_exactly_one_outline_button() {
        let html = render();
        assert_eq!(html.matches("<button").count(), 1);
        assert!(html.contains(
            "<button type=\"button\" class=\"btn btn-outline\" data-variant=\"outline\">Create Feature Flag</button>"
        ));
    }

    #[test]
    fn button_has_no_action_attached() {
        let html = render();
        assert!(!html.contains("<form"));
        assert!(!html.contains("<a "));
        assert!(!html.contains("onclick"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn heading_and_description() {
        let html = render();
        assert!(html.contains("<h1 class=\"text-2xl font-semibold\">Admin / Model Ops</h1>"));
        assert_eq!(html.matches(ADMIN_DESCRIPTION).count(), 1);
    }

    #[test]
    fn render_is_idempotent() {
        assert_eq!(render(), render());
    }
}
