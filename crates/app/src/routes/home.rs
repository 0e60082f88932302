use dioxus::prelude::*;
use shared_types::{AppConfig, StayRequest};
use shared_ui::{use_toast, ToastOptions};

use crate::components::StaySearchForm;

/// Landing page with the stay search.
#[component]
pub fn Home() -> Element {
    let config: AppConfig = use_context();
    let toast = use_toast();

    let on_search = move |request: StayRequest| {
        let nights = request.nights();
        toast.success(
            format!(
                "Searching {nights} night{} for {} guest{}",
                if nights == 1 { "" } else { "s" },
                request.guests,
                if request.guests == 1 { "" } else { "s" },
            ),
            ToastOptions::new(),
        );
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }
        section { class: "home-hero",
            StaySearchForm { headline: config.search.headline.clone(), on_search }
        }
    }
}
