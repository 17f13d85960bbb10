use marsdash_core::Store;

use crate::{escape_attr, escape_html};

/// Sticky header: brand link plus one nav entry per rover.
pub fn header(store: &Store) -> String {
    let mut items = String::new();
    for rover in &store.rovers {
        items.push_str(&format!(
            "<li><a class=\"nav-link\" data-a_click=\"rover:{}\">{}</a></li>",
            escape_attr(rover),
            escape_html(rover)
        ));
    }

    format!(
        "<header class=\"topbar\">\
            <nav class=\"layout\">\
                <div class=\"brand\"><a data-a_click=\"home\">{}</a></div>\
                <ul class=\"nav\">{}</ul>\
            </nav>\
        </header>",
        escape_html(&store.project.name),
        items
    )
}

pub fn footer(store: &Store) -> String {
    format!(
        "<footer class=\"footer\"><p>{} - Created by {} - {}</p></footer>",
        escape_html(&store.project.name),
        escape_html(&store.project.author),
        escape_html(&store.project.year)
    )
}

pub fn greeting(name: &str) -> String {
    if name.is_empty() {
        return "<h1 class=\"greeting\">Hello!</h1>".into();
    }
    format!("<h1 class=\"greeting\">Welcome, {}!</h1>", escape_html(name))
}

pub fn loading() -> String {
    "<section><div class=\"loading\"><p>Loading...</p></div></section>".into()
}

/// Shown when the rover fetch failed upstream.
pub fn error_page() -> String {
    "<section><div class=\"error-panel\">\
        <h1>API Error: Unable to fetch data from the server</h1>\
     </div></section>"
        .into()
}
