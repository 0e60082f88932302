use dioxus::prelude::*;

/// A single-line text or number input.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    /// Lower bound hint for number inputs.
    #[props(default)]
    min: Option<String>,
    #[props(default = false)] invalid: bool,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "input", None, false),
        Attribute::new(
            "aria-invalid",
            if invalid { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "{input_type}",
            value: value,
            placeholder: placeholder,
            min: min,
            disabled: disabled,
            oninput: move |evt| on_input.call(evt),
            ..merged,
        }
    }
}
