use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdMenu};
use dioxus_free_icons::Icon;
use shared_types::{active_link, links_for_role};
use shared_ui::{
    use_sidebar, Sidebar, SidebarContent, SidebarHeader, SidebarLabel, SidebarMenu,
    SidebarMenuButton, SidebarMenuItem, SidebarTrigger,
};

use crate::auth::Session;
use crate::components::NavGlyph;
use crate::routes::{route_for_path, Route};

/// Collapsible dashboard navigation.
///
/// Entries follow the session's role. While the role is unknown the menu
/// is empty; the logout row is always present.
#[component]
pub fn DashboardSidebar(session: Session, brand: String) -> Element {
    let sidebar = use_sidebar();
    let route: Route = use_route();
    let role = use_memo(move || {
        session
            .user
            .read()
            .as_ref()
            .map(|u| u.role)
            .unwrap_or_default()
    });

    use_effect(move || {
        tracing::debug!(role = role().as_str(), "sidebar links updated");
    });

    let links = links_for_role(role());
    let location = route.to_string();
    let current = active_link(links, &location).map(|link| link.path);

    rsx! {
        Sidebar {
            SidebarHeader {
                if sidebar.expanded() {
                    h1 { class: "sidebar-brand", "{brand}" }
                }
                SidebarTrigger {
                    Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                }
            }
            SidebarContent {
                SidebarMenu {
                    for link in links.iter() {
                        SidebarMenuItem { key: "{link.path}",
                            Link { to: route_for_path(link.path),
                                SidebarMenuButton { active: current == Some(link.path),
                                    NavGlyph { icon: link.icon }
                                    SidebarLabel { "{link.label}" }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "sidebar-footer",
                SidebarMenuButton {
                    onclick: move |_| session.sign_out.call(()),
                    Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                    SidebarLabel { "Logout" }
                }
            }
        }
    }
}
