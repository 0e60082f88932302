use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutDashboard, LdListChecks, LdShoppingBag, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::NavIcon;

/// Lucide glyph for a navigation entry.
#[component]
pub fn NavGlyph(icon: NavIcon, #[props(default = 18)] size: u32) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: size, height: size }
        },
        NavIcon::Tasks => rsx! {
            Icon::<LdListChecks> { icon: LdListChecks, width: size, height: size }
        },
        NavIcon::Users => rsx! {
            Icon::<LdUsers> { icon: LdUsers, width: size, height: size }
        },
        NavIcon::Orders => rsx! {
            Icon::<LdShoppingBag> { icon: LdShoppingBag, width: size, height: size }
        },
    }
}
