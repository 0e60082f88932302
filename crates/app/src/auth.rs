use dioxus::prelude::*;
use shared_types::SessionUser;

use crate::routes::Route;

/// Identity provider state owned by the app root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<SessionUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: SessionUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// What session-aware components are given: a read-only view of the user
/// and the provider's sign-out operation.
#[derive(Clone, Copy, PartialEq)]
pub struct Session {
    pub user: Memo<Option<SessionUser>>,
    pub sign_out: EventHandler<()>,
}

/// Build the [`Session`] handed down to the account menu and sidebar.
///
/// Signing out clears the user and returns to the sign-in page.
pub fn use_session() -> Session {
    let mut auth = use_auth();
    let user = use_memo(move || auth.current_user.read().clone());
    let sign_out = use_callback(move |_: ()| {
        let name = auth
            .current_user
            .peek()
            .as_ref()
            .map(|u| u.display_name().to_string());
        auth.clear_auth();
        tracing::info!(user = name.as_deref().unwrap_or("-"), "signed out");
        navigator().push(Route::Login { redirect: None });
    });

    Session { user, sign_out }
}
