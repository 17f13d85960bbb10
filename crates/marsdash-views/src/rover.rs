use marsdash_core::{page_window, total_pages, RouteParams, RoverSlot, Store};
use marsdash_types::{Photo, RoverData};

use crate::chrome::{error_page, loading};
use crate::{escape_attr, escape_html};

/// Rover page: info block, filter bar, photo grid and pagination.
///
/// Branches: upstream failure → error panel; no data yet → loading; loaded
/// with an empty photo list → loading fragment in place of the grid.
pub fn rover_page(store: &Store) -> String {
    let rover = match &store.rover_data {
        RoverSlot::Failed => return error_page(),
        RoverSlot::Loading => return loading(),
        RoverSlot::Loaded(rover) => rover,
    };

    let gallery = if store.photos.is_empty() {
        loading()
    } else {
        rover_photos(&store.photos)
    };

    format!(
        "<section>{}{}{}{}</section>",
        rover_info(rover),
        filter_bar(rover, &store.router.params),
        gallery,
        pagination(rover, &store.router.params)
    )
}

fn rover_info(rover: &RoverData) -> String {
    format!(
        "<div class=\"rover-info\">\
            <h2>{}</h2>\
            <div class=\"rover-details\">\
                <p class=\"muted\">Launch Date: {}</p>\
                <p class=\"muted\">Landing Date: {}</p>\
                <p class=\"muted\">Status: {}</p>\
                <p class=\"muted\">Total Photos: {}</p>\
            </div>\
        </div>",
        escape_html(&rover.name),
        escape_html(&rover.launch_date),
        escape_html(&rover.landing_date),
        escape_html(&rover.status),
        rover.total_photos
    )
}

/// Camera select and earth-date input. The active filter values are baked
/// into the markup so a full re-render restores the controls.
fn filter_bar(rover: &RoverData, params: &RouteParams) -> String {
    let mut options = String::from("<option value=\"\">Select Camera</option>");
    for camera in &rover.cameras {
        let selected = params.camera.as_deref() == Some(camera.name.as_str());
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            escape_attr(&camera.name),
            if selected { " selected" } else { "" },
            escape_html(&camera.full_name)
        ));
    }

    let date = params.earth_date.as_deref().unwrap_or("");

    format!(
        "<div class=\"filter-bar\">\
            <div class=\"select-camera\">\
                <label for=\"camera\">Camera:</label>\
                <select id=\"camera\" name=\"camera\" data-a_change=\"camera\">{}</select>\
            </div>\
            <div class=\"select-date\">\
                <label for=\"earth-date\">Earth Date:</label>\
                <input type=\"date\" id=\"earth-date\" name=\"earth-date\" value=\"{}\" data-a_change=\"earth_date\">\
            </div>\
        </div>",
        options,
        escape_attr(date)
    )
}

fn rover_photos(photos: &[Photo]) -> String {
    if photos.is_empty() {
        return "<div class=\"empty\">No photos found</div>".into();
    }

    let mut cards = String::with_capacity(photos.len() * 256);
    for photo in photos {
        cards.push_str(&format!(
            "<div class=\"photo-card\">\
                <img src=\"{}\" alt=\"{}\" loading=\"lazy\" />\
                <div class=\"photo-info\">\
                    <h3>{}</h3>\
                    <p class=\"muted\">Earth Date: {}</p>\
                </div>\
            </div>",
            escape_attr(&photo.img_src),
            escape_attr(&photo.camera.full_name),
            escape_html(&photo.camera.full_name),
            escape_html(&photo.earth_date)
        ));
    }

    format!("<div class=\"photo-grid\">{}</div>", cards)
}

fn pagination(rover: &RoverData, params: &RouteParams) -> String {
    let last = total_pages(rover.total_photos);
    let page = params.page_number;
    let at_start = page == 1;
    let at_end = page >= last;

    let mut buttons = String::new();
    buttons.push_str(&page_button("page:start", "&lt;&lt;", at_start, false));
    buttons.push_str(&page_button("page:prev", "&lt;", at_start, false));
    for i in page_window(page, last) {
        let n = i + 1;
        buttons.push_str(&page_button(&format!("page:{}", n), &n.to_string(), false, n == page));
    }
    buttons.push_str(&page_button("page:next", "&gt;", at_end, false));
    buttons.push_str(&page_button("page:end", "&gt;&gt;", at_end, false));

    format!(
        "<div class=\"pagination\">\
            <span class=\"muted\">25 images per page</span>\
            <div class=\"pagination-buttons\">{}</div>\
            <span class=\"muted\">Page {} of {}</span>\
        </div>",
        buttons, page, last
    )
}

fn page_button(action: &str, label: &str, disabled: bool, current: bool) -> String {
    format!(
        "<button class=\"page-btn{}\" data-a_click=\"{}\"{}>{}</button>",
        if current { " current" } else { "" },
        escape_attr(action),
        if disabled { " disabled" } else { "" },
        label
    )
}
