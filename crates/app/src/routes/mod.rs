pub mod account;
pub mod admin;
pub mod home;
pub mod login;
pub mod not_found;
pub mod worker;

use dioxus::prelude::*;
use shared_types::AppConfig;
use shared_ui::{SidebarInset, SidebarProvider};

use crate::auth::{use_auth, use_session};
use crate::components::{AccountMenu, DashboardSidebar};

use account::Orders;
use admin::{AdminDashboard, TaskDetail, TaskList, UserList};
use home::Home;
use login::Login;
use not_found::NotFound;
use worker::MyTasks;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[layout(AuthGuard)]
            #[route("/account/orders")]
            Orders {},
        #[end_layout]
    #[end_layout]
    #[layout(AuthGuard)]
    #[layout(DashboardLayout)]
        #[route("/admin/dashboard")]
        AdminDashboard {},
        #[route("/admin/tasks")]
        TaskList {},
        #[route("/admin/tasks/:id")]
        TaskDetail { id: String },
        #[route("/admin/users")]
        UserList {},
        #[route("/worker/my-tasks")]
        MyTasks {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Resolve a navigation path to its route. Paths the router cannot parse
/// go home.
pub fn route_for_path(path: &str) -> Route {
    path.parse().unwrap_or(Route::Home {})
}

/// Redirects to /login, remembering where the user was headed.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();

    if auth.is_authenticated() {
        return rsx! { Outlet::<Route> {} };
    }

    navigator().replace(Route::Login {
        redirect: Some(route.to_string()),
    });
    rsx! {
        div { class: "auth-guard-loading",
            p { "Redirecting to sign in..." }
        }
    }
}

/// Public pages: a top bar with the brand and account menu.
#[component]
fn SiteLayout() -> Element {
    let config: AppConfig = use_context();
    let session = use_session();
    let signed_in = session.user.read().is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        header { class: "site-header",
            Link { class: "site-brand", to: Route::Home {}, "{config.branding.name}" }
            if signed_in {
                AccountMenu { session, default_avatar: config.session.default_avatar.clone() }
            } else {
                Link { class: "site-sign-in", to: Route::Login { redirect: None }, "Sign in" }
            }
        }
        main { class: "site-main",
            Outlet::<Route> {}
        }
    }
}

/// Dashboard pages: collapsible sidebar beside the page content.
#[component]
fn DashboardLayout() -> Element {
    let config: AppConfig = use_context();
    let session = use_session();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        SidebarProvider {
            DashboardSidebar { session, brand: config.branding.name.clone() }
            SidebarInset {
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{links_for_role, ALL_ROLES};

    #[test]
    fn every_navigation_link_resolves_to_a_page() {
        for role in ALL_ROLES {
            for link in links_for_role(*role) {
                let route = route_for_path(link.path);
                assert_ne!(route, Route::Home {}, "{} has no page", link.path);
                assert_eq!(route.to_string(), link.path);
            }
        }
    }

    #[test]
    fn task_detail_path_parses_id() {
        assert_eq!(
            route_for_path("/admin/tasks/7"),
            Route::TaskDetail { id: "7".to_string() }
        );
    }

    #[test]
    fn orders_and_dashboard_destinations_resolve() {
        assert_eq!(route_for_path("/account/orders"), Route::Orders {});
        assert_eq!(route_for_path("/admin/dashboard"), Route::AdminDashboard {});
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert_eq!(
            route_for_path("/nope/here"),
            Route::NotFound {
                route: vec!["nope".to_string(), "here".to_string()]
            }
        );
    }
}
