//! In-memory session of the signed-in user. Nothing is persisted.

use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub job_title: Option<String>,
}

impl Session {
    pub fn welcome(&self) -> String {
        format!("Login successful! Welcome, {}.", self.user_id)
    }
}

#[derive(Clone, Copy)]
pub struct AuthState {
    session: RwSignal<Option<Session>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(None),
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    pub fn job_title(&self) -> Option<String> {
        self.session.with(|s| s.as_ref().and_then(|s| s.job_title.clone()))
    }

    pub fn sign_in(&self, session: Session) {
        self.session.set(Some(session));
    }

    pub fn sign_out(&self) {
        log::info!("signed out");
        self.session.set(None);
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_auth() -> AuthState {
    let auth = AuthState::new();
    provide_context(auth);
    auth
}

pub fn use_auth() -> AuthState {
    use_context::<AuthState>().expect("AuthState context not found")
}
