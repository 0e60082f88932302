use dioxus::prelude::*;

/// Title block at the top of a dashboard page.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] description: Option<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            h1 { class: "page-title", "{title}" }
            if let Some(description) = description {
                p { class: "page-description", "{description}" }
            }
        }
    }
}
