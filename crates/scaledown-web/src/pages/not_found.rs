//! Fallback page for unknown paths and server errors.

/// Render the 404 page body.
pub fn render() -> String {
    status_panel("Page not found", "The page you requested does not exist.")
}

/// Render the 500 page body. The underlying error is never shown.
pub fn render_internal_error() -> String {
    status_panel("Something went wrong", "Please try again in a moment.")
}

fn status_panel(heading: &str, message: &str) -> String {
    let mut html = String::with_capacity(320);
    html.push_str("<main class=\"mx-auto max-w-5xl px-6 py-10\">\n");
    html.push_str("  <h1 class=\"text-2xl font-semibold\">");
    html.push_str(heading);
    html.push_str("</h1>\n");
    html.push_str("  <p class=\"mt-2 text-slate-300\">");
    html.push_str(message);
    html.push_str("</p>\n");
    html.push_str("  <p class=\"mt-6\"><a class=\"underline\" href=\"/\">Back to home</a></p>\n</main>");
    html
}
