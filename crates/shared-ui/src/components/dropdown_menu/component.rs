use dioxus::prelude::*;
use dioxus_primitives::dropdown_menu as prim;

#[component]
pub fn DropdownMenu(mut props: prim::DropdownMenuProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "servy-dropdown-menu", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DropdownMenu { ..props }
    }
}

#[component]
pub fn DropdownMenuTrigger(mut props: prim::DropdownMenuTriggerProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "servy-dropdown-menu-trigger",
        None,
        false,
    ));

    rsx! {
        prim::DropdownMenuTrigger { ..props }
    }
}

#[component]
pub fn DropdownMenuContent(mut props: prim::DropdownMenuContentProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "servy-dropdown-menu-content",
        None,
        false,
    ));

    rsx! {
        prim::DropdownMenuContent { ..props }
    }
}

/// Non-interactive heading inside the menu content.
#[component]
pub fn DropdownMenuLabel(children: Element) -> Element {
    rsx! {
        div { class: "servy-dropdown-menu-label", role: "presentation", {children} }
    }
}

/// A menu entry made of an icon and a text label.
///
/// `index` is the entry's position for keyboard navigation.
#[component]
pub fn DropdownMenuAction(
    value: String,
    index: usize,
    label: String,
    on_select: EventHandler<String>,
    icon: Element,
) -> Element {
    rsx! {
        prim::DropdownMenuItem::<String> {
            class: "servy-dropdown-menu-item",
            value: value,
            index: index,
            on_select: move |selected: String| on_select.call(selected),
            span { class: "servy-dropdown-menu-icon", {icon} }
            span { "{label}" }
        }
    }
}
