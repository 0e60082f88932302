use dioxus::prelude::*;
use dioxus_primitives::label::Label;

/// A form wrapper that prevents the browser's default submission.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "form", None, false),
        Attribute::new("novalidate", true, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// A labelled form control with its validation message underneath.
#[component]
pub fn FormField(
    label: String,
    html_for: String,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "form-field", None, false),
        Attribute::new(
            "data-invalid",
            if error.is_some() { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            Label { class: "form-label", html_for: html_for, "{label}" }
            {children}
            if let Some(message) = error {
                FormMessage { "{message}" }
            }
        }
    }
}

/// Field-level validation message.
#[component]
pub fn FormMessage(children: Element) -> Element {
    rsx! {
        p { class: "form-message", role: "alert", {children} }
    }
}
