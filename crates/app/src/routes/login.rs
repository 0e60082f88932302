use dioxus::prelude::*;
use shared_types::{links_for_role, AppError, SignInRequest, UserRole, ALL_ROLES};
use shared_ui::{Button, ButtonVariant, Card, CardFooter, Form, FormField, Input};

use crate::auth::use_auth;
use crate::routes::{route_for_path, Route};

/// Where to land after signing in without a redirect: the role's first
/// navigation entry, or home.
fn landing_route(role: UserRole) -> Route {
    links_for_role(role)
        .first()
        .map(|link| route_for_path(link.path))
        .unwrap_or(Route::Home {})
}

/// Sign-in page standing in for the identity provider.
///
/// `redirect` is the page the auth guard bounced the user from.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let mut auth = use_auth();
    let mut form = use_signal(SignInRequest::default);
    let mut rejection = use_signal(|| None::<AppError>);
    let redirect_target = use_signal(move || redirect);

    let go_to_destination = move |role: UserRole| {
        let target = match redirect_target.peek().as_deref() {
            Some(path) => route_for_path(path),
            None => landing_route(role),
        };
        navigator().replace(target);
    };

    if let Some(user) = auth.current_user.peek().as_ref() {
        go_to_destination(user.role);
    }

    let handle_sign_in = move |_: FormEvent| {
        let request = form.peek().clone();
        match request.validate() {
            Ok(user) => {
                tracing::info!(user = user.display_name(), role = user.role.as_str(), "signed in");
                let role = user.role;
                rejection.set(None);
                auth.set_user(user);
                go_to_destination(role);
            }
            Err(err) => {
                tracing::warn!(error = %err, "sign-in rejected");
                rejection.set(Some(err));
            }
        }
    };

    let error_for = move |key: &str| {
        rejection
            .read()
            .as_ref()
            .and_then(|err| err.field(key))
            .map(str::to_string)
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }
        div { class: "auth-page",
            Card {
                class: "auth-card",
                title: "Sign In".to_string(),
                description: "Choose how you appear and what you can manage".to_string(),
                Form { onsubmit: handle_sign_in,
                    FormField {
                        label: "Display name",
                        html_for: "name",
                        error: error_for("name"),
                        Input {
                            id: "name",
                            value: form.read().name.clone(),
                            placeholder: "Wayan",
                            invalid: error_for("name").is_some(),
                            on_input: move |evt: FormEvent| form.write().name = evt.value(),
                        }
                    }
                    FormField {
                        label: "Avatar URL",
                        html_for: "image",
                        error: error_for("image"),
                        Input {
                            id: "image",
                            value: form.read().image.clone(),
                            placeholder: "https://example.com/me.png",
                            invalid: error_for("image").is_some(),
                            on_input: move |evt: FormEvent| form.write().image = evt.value(),
                        }
                    }
                    FormField { label: "Role", html_for: "role",
                        select {
                            id: "role",
                            class: "auth-select",
                            value: form.read().role.as_str(),
                            onchange: move |evt: FormEvent| {
                                form.write().role = UserRole::from_str_or_default(&evt.value());
                            },
                            for role in ALL_ROLES.iter() {
                                option { key: "{role.as_str()}", value: role.as_str(), "{role.display_name()}" }
                            }
                        }
                    }
                    CardFooter {
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            full_width: true,
                            "Sign In"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            full_width: true,
                            onclick: move |_| {
                                navigator().push(Route::Home {});
                            },
                            "Browse without signing in"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admins_land_on_the_dashboard() {
        assert_eq!(landing_route(UserRole::Admin), Route::AdminDashboard {});
    }

    #[test]
    fn workers_land_on_their_tasks() {
        assert_eq!(landing_route(UserRole::Worker), Route::MyTasks {});
    }

    #[test]
    fn roleless_users_land_home() {
        assert_eq!(landing_route(UserRole::None), Route::Home {});
    }
}
