//! marsdash-views — Render the dashboard store to HTML strings
//!
//! Pure functions from the [`Store`] to HTML fragments, plus the full
//! document shell for SSR first-paint. Interactive elements carry
//! `data-a_click` / `data-a_change` attributes naming the action they
//! dispatch; the client bootstrap delegates DOM events from them.

mod chrome;
mod home;
mod rover;

pub use chrome::{error_page, loading};

use marsdash_core::Store;

/// Render the app body (everything inside the mount node) for the store.
///
/// Dispatches on the router: an empty selected rover means the home page.
pub fn render_app(store: &Store) -> String {
    let current_page = if store.is_home() {
        home::home_page(store)
    } else {
        rover::rover_page(store)
    };

    let mut buf = String::with_capacity(4096);
    buf.push_str(&chrome::header(store));
    buf.push_str("<main class=\"layout\">");
    buf.push_str(&chrome::greeting(&store.user));
    buf.push_str("<section>");
    buf.push_str(&current_page);
    buf.push_str("</section>");
    buf.push_str("</main>");
    buf.push_str(&chrome::footer(store));
    buf
}

/// Options for rendering a full HTML page.
pub struct PageOptions {
    /// Pre-rendered app body placed inside the mount node.
    pub body: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub inline_css: Option<String>,
    /// Inline script blocks appended at the end of the body.
    pub inline_scripts: Vec<String>,
    pub mount_selector: Option<String>,
}

/// Render a full HTML document with SSR content, styles and scripts.
pub fn render_page(opts: &PageOptions) -> String {
    let mut html = String::with_capacity(opts.body.len() + 2048);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\" />\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");

    if let Some(title) = &opts.title {
        html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    }
    if let Some(desc) = &opts.description {
        html.push_str(&format!(
            "<meta name=\"description\" content=\"{}\" />\n",
            escape_attr(desc)
        ));
    }
    if let Some(css) = &opts.inline_css {
        html.push_str(&format!("<style>{}</style>", css));
    }

    html.push_str("\n</head>\n<body>\n");

    // Mount point with SSR content
    let mount = opts.mount_selector.as_deref().unwrap_or("#app");
    let id = mount.trim_start_matches('#');
    html.push_str(&format!("<div id=\"{}\">{}</div>\n", id, opts.body));

    for script in &opts.inline_scripts {
        html.push_str("<script>\n");
        html.push_str(script);
        html.push_str("\n</script>\n");
    }

    html.push_str("</body>\n</html>");
    html
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub(crate) fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
