use marsdash_core::Store;
use marsdash_types::Apod;

use crate::chrome::loading;
use crate::{escape_attr, escape_html};

/// Home page: the Astronomy Picture of the Day.
///
/// While the payload has not arrived yet the loading fragment is shown; the
/// server fetches APOD before rendering the home route.
pub fn home_page(store: &Store) -> String {
    let apod = match &store.apod {
        Some(apod) => apod,
        None => return loading(),
    };

    format!(
        "<section class=\"apod\">\
            <h2>Astronomy Picture of the Day</h2>\
            <div>{}</div>\
        </section>",
        image_of_the_day(apod)
    )
}

fn image_of_the_day(apod: &Apod) -> String {
    if apod.is_video() {
        return format!(
            "<p>See today's featured video <a href=\"{}\">here</a></p>\
             <p>{}</p>\
             <p>{}</p>",
            escape_attr(&apod.url),
            escape_html(&apod.title),
            escape_html(&apod.explanation)
        );
    }

    format!(
        "<img class=\"apod-image\" src=\"{}\" alt=\"{}\" />\
         <p>{}</p>",
        escape_attr(&apod.url),
        escape_attr(&apod.title),
        escape_html(&apod.explanation)
    )
}
