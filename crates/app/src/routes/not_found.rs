use dioxus::prelude::*;
use shared_ui::Card;

use crate::routes::Route;

/// Catch-all page for unknown paths.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }
        div { class: "not-found-page",
            Card { class: "not-found-card",
                h1 { class: "not-found-code", "404" }
                p { class: "not-found-message", "Nothing lives at {path}." }
                Link { class: "not-found-link", to: Route::Home {}, "Back to search" }
            }
        }
    }
}
