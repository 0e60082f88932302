use dioxus::prelude::*;

/// A surface with an optional title and description above its content.
#[component]
pub fn Card(
    #[props(default)] title: Option<String>,
    #[props(default)] description: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_header = title.is_some() || description.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            if has_header {
                div { class: "card-header",
                    if let Some(title) = title {
                        h3 { class: "card-title", "{title}" }
                    }
                    if let Some(description) = description {
                        p { class: "card-description", "{description}" }
                    }
                }
            }
            div { class: "card-content", {children} }
        }
    }
}

/// Footer row placed after a Card's content.
#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer", {children} }
    }
}
