use dioxus::prelude::*;
use shared_ui::{Card, PageHeader};

/// Past bookings of the signed-in customer.
#[component]
pub fn Orders() -> Element {
    rsx! {
        div { class: "page",
            PageHeader {
                title: "Orders",
                description: "Your bookings and payments".to_string(),
            }
            Card {
                p { class: "empty-state", "No orders yet. Search for a stay to get started." }
            }
        }
    }
}
