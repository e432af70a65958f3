//! Home page: a single hero panel describing the product.

/// Hero heading.
pub const HOME_TITLE: &str = "ScaleDown Commerce AI";

/// Hero paragraph.
pub const HOME_DESCRIPTION: &str =
    "Production-grade RAG and recommendation engine with ScaleDown API integration.";

/// Render the home page body (without the document shell).
pub fn render() -> String {
    let mut html = String::with_capacity(384);
    html.push_str("<main class=\"mx-auto max-w-6xl px-6 py-10\">\n");
    html.push_str("  <div class=\"rounded-xl border border-slate-800 bg-slate-900/60 p-8\">\n");
    html.push_str("    <h1 class=\"text-3xl font-semibold\">");
    html.push_str(HOME_TITLE);
    html.push_str("</h1>\n");
    html.push_str("    <p class=\"mt-3 text-slate-300\">");
    html.push_str(HOME_DESCRIPTION);
    html.push_str("</p>\n  </div>\n</main>");
    html
}
