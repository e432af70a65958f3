//! Root document shell shared by every page.
//!
//! Owns the `<head>` (title, description, stylesheet) and the dark color
//! scheme on `<body>`. Page content is inserted verbatim.

/// Document metadata rendered into `<head>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    /// Contents of `<title>`.
    pub title: &'static str,
    /// Contents of `<meta name="description">`.
    pub description: &'static str,
}

/// Metadata used by every page of the site.
pub const SITE_METADATA: Metadata = Metadata {
    title: "ScaleDown Commerce AI",
    description: "Production-grade AI recommendation platform",
};

/// Path the global stylesheet is served from.
pub const STYLESHEET_PATH: &str = "/globals.css";

/// Classes applied to `<body>`: full-height, dark background, light text.
const BODY_CLASS: &str = "min-h-screen bg-slate-950 text-slate-50";

/// Wrap `children` in the full HTML document.
pub fn root_layout(children: &str) -> String {
    let meta = SITE_METADATA;

    let mut html = String::with_capacity(512 + children.len());
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\"/>\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\"/>\n");
    html.push_str("<title>");
    html.push_str(meta.title);
    html.push_str("</title>\n");
    html.push_str("<meta name=\"description\" content=\"");
    html.push_str(meta.description);
    html.push_str("\"/>\n");
    html.push_str("<link rel=\"stylesheet\" href=\"");
    html.push_str(STYLESHEET_PATH);
    html.push_str("\"/>\n</head>\n");
    html.push_str("<body class=\"");
    html.push_str(BODY_CLASS);
    html.push_str("\">\n");
    html.push_str(children);
    html.push_str("\n</body>\n</html>\n");
    html
}
