use dioxus::prelude::*;
use shared_ui::{Card, PageHeader};

use crate::routes::Route;

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        div { class: "page",
            PageHeader { title: "Dashboard", description: "Overview of bookings and staff".to_string() }
            div { class: "card-grid",
                Card { title: "Open tasks".to_string(), p { class: "stat", "0" } }
                Card { title: "Active workers".to_string(), p { class: "stat", "0" } }
            }
        }
    }
}

#[component]
pub fn TaskList() -> Element {
    rsx! {
        div { class: "page",
            PageHeader { title: "Tasks", description: "Housekeeping and guest requests".to_string() }
            Card {
                p { class: "empty-state", "No tasks have been created." }
            }
        }
    }
}

/// A single task. Its nav entry stays highlighted on this page.
#[component]
pub fn TaskDetail(id: String) -> Element {
    rsx! {
        div { class: "page",
            PageHeader { title: "Task #{id}" }
            Card {
                p { class: "empty-state", "Task details are not available yet." }
                Link { to: Route::TaskList {}, "Back to tasks" }
            }
        }
    }
}

#[component]
pub fn UserList() -> Element {
    rsx! {
        div { class: "page",
            PageHeader { title: "Users", description: "Administrators and workers".to_string() }
            Card {
                p { class: "empty-state", "No users to show." }
            }
        }
    }
}
