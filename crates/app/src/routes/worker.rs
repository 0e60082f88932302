use dioxus::prelude::*;
use shared_ui::{Card, PageHeader};

/// Tasks assigned to the signed-in worker.
#[component]
pub fn MyTasks() -> Element {
    rsx! {
        div { class: "page",
            PageHeader { title: "My Tasks", description: "Work assigned to you today".to_string() }
            Card {
                p { class: "empty-state", "Nothing assigned. Enjoy the quiet." }
            }
        }
    }
}
