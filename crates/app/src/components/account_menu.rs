use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCreditCard, LdLogOut};
use dioxus_free_icons::Icon;
use shared_types::account_destination;
use shared_ui::{
    DropdownMenu, DropdownMenuAction, DropdownMenuContent, DropdownMenuLabel, DropdownMenuTrigger,
    UserAvatar,
};

use crate::auth::Session;
use crate::routes::route_for_path;

const LOG_OUT: &str = "log-out";

/// Single uppercase letter shown when the avatar image cannot be displayed.
pub fn avatar_fallback(name: Option<&str>) -> String {
    name.and_then(|n| n.trim().chars().next())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "U".to_string())
}

/// Avatar button opening the account dropdown.
///
/// The menu offers one role-dependent destination plus "Log out".
#[component]
pub fn AccountMenu(session: Session, default_avatar: String) -> Element {
    let user = session.user.read().clone();
    let role = user.as_ref().map(|u| u.role).unwrap_or_default();
    let destination = account_destination(role);
    let image = user.as_ref().and_then(|u| u.image.clone());
    let fallback = avatar_fallback(user.as_ref().and_then(|u| u.name.as_deref()));

    rsx! {
        DropdownMenu {
            DropdownMenuTrigger { "aria-label": "Open account menu",
                UserAvatar { image, default_image: default_avatar, fallback }
            }
            DropdownMenuContent {
                DropdownMenuLabel { "Menu" }
                DropdownMenuAction {
                    value: destination.path.to_string(),
                    index: 0usize,
                    label: destination.label.to_string(),
                    on_select: move |path: String| {
                        navigator().push(route_for_path(&path));
                    },
                    icon: rsx! {
                        Icon::<LdCreditCard> { icon: LdCreditCard, width: 16, height: 16 }
                    },
                }
                DropdownMenuAction {
                    value: LOG_OUT.to_string(),
                    index: 1usize,
                    label: "Log out".to_string(),
                    on_select: move |_: String| session.sign_out.call(()),
                    icon: rsx! {
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    },
                }
            }
        }
    }
}
