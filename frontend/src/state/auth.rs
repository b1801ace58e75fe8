use crate::{
    api::{ApiClient, ApiError, Role},
    pages::{login::repository::AuthRepository, portal::repository::DashboardsRepository},
    state::{
        dashboards::{self, use_dashboard_directory, DashboardDirectory},
        notice::{use_notice, Notice, NoticeCenter},
        session::SessionStore,
    },
};
use leptos::*;
use std::rc::Rc;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Unauthenticated,
    /// Startup check of a persisted token.
    Verifying,
    Authenticated,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub token: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl AuthState {
    pub fn authenticated(token: String, email: Option<String>, role: Role) -> Self {
        Self {
            phase: AuthPhase::Authenticated,
            token: Some(token),
            email,
            role: Some(role),
        }
    }

    pub fn verifying() -> Self {
        Self {
            phase: AuthPhase::Verifying,
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }

    pub fn is_verifying(&self) -> bool {
        self.phase == AuthPhase::Verifying
    }

    /// Display-only gate; the backend authorizes every admin call on its own.
    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role.map(Role::is_admin).unwrap_or(false)
    }

    /// Token to attach to the next outgoing call, read at dispatch time.
    pub fn bearer_token(&self) -> Option<String> {
        if self.is_authenticated() {
            self.token.clone()
        } else {
            None
        }
    }
}

pub fn initial_auth_state(session: &SessionStore) -> AuthState {
    if session.load().is_some() {
        AuthState::verifying()
    } else {
        AuthState::default()
    }
}

/// Checks the persisted token; any failure demotes to signed-out and drops the token.
pub async fn verify_stored_token(
    repo: &AuthRepository,
    session: &SessionStore,
    set_auth_state: WriteSignal<AuthState>,
) -> Option<String> {
    let Some(token) = session.load() else {
        set_auth_state.set(AuthState::default());
        return None;
    };
    set_auth_state.set(AuthState::verifying());

    match repo.verify_token(&token).await {
        Ok(verification) if verification.valid => {
            set_auth_state.set(AuthState::authenticated(
                token.clone(),
                verification.email,
                verification.role.unwrap_or(Role::User),
            ));
            Some(token)
        }
        Ok(_) => {
            log::info!("Stored session token was rejected");
            session.clear();
            set_auth_state.set(AuthState::default());
            None
        }
        Err(err) => {
            log::warn!("Error verifying token: {}", err);
            session.clear();
            set_auth_state.set(AuthState::default());
            None
        }
    }
}

pub async fn verify_otp_login(
    email: &str,
    otp: &str,
    repo: &AuthRepository,
    session: &SessionStore,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<String, ApiError> {
    let email = email.trim();
    let response = repo.verify_otp(email, otp.trim()).await?;
    let token = match response.session_token() {
        Some(token) => token.to_string(),
        None => {
            return Err(ApiError::unauthorized(
                response.message.clone().unwrap_or_else(|| "Invalid OTP".into()),
            ))
        }
    };

    if let Err(err) = session.save(&token) {
        log::warn!("Session token not persisted, it will not survive a reload: {}", err);
    }
    set_auth_state.set(AuthState::authenticated(
        token.clone(),
        Some(email.to_string()),
        response.role.unwrap_or(Role::User),
    ));
    Ok(token)
}

/// Local sign-out always happens; the returned result only reflects the server call.
pub async fn logout(
    token: Option<String>,
    repo: &AuthRepository,
    session: &SessionStore,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = match token {
        Some(token) => repo.logout(&token).await,
        None => Ok(()),
    };
    if let Err(err) = &result {
        log::warn!("Error logging out: {}", err);
    }

    session.clear();
    set_auth_state.set(AuthState::default());
    result
}

/// Startup path: verify a persisted token and, when valid, load the dashboard list.
pub async fn restore_session(
    repo: &AuthRepository,
    dashboards_repo: &DashboardsRepository,
    session: &SessionStore,
    set_auth_state: WriteSignal<AuthState>,
    directory: DashboardDirectory,
    notices: NoticeCenter,
) {
    if let Some(token) = verify_stored_token(repo, session, set_auth_state).await {
        if let Err(err) = dashboards::refresh(directory, dashboards_repo, &token).await {
            notices.show(Notice::error("Failed", format!("Error fetching dashboards: {}", err)));
        }
    }
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = use_session_store();
    let (auth_state, set_auth_state) = create_signal(initial_auth_state(&session));
    provide_context::<AuthContext>((auth_state, set_auth_state));

    let directory = use_dashboard_directory();
    let notices = use_notice();
    let api = Rc::new(use_context::<ApiClient>().unwrap_or_default());
    let repo = AuthRepository::new_with_client(api.clone());
    let dashboards_repo = DashboardsRepository::new_with_client(api);

    create_effect(move |_| {
        let repo = repo.clone();
        let dashboards_repo = dashboards_repo.clone();
        let session = session.clone();
        spawn_local(async move {
            restore_session(
                &repo,
                &dashboards_repo,
                &session,
                set_auth_state,
                directory,
                notices,
            )
            .await;
        });
    });

    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn use_session_store() -> SessionStore {
    match use_context::<SessionStore>() {
        Some(store) => store,
        None => {
            let store = SessionStore::default();
            provide_context(store.clone());
            store
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_gate_requires_authenticated_admin() {
        let admin = AuthState::authenticated("t".into(), None, Role::Admin);
        assert!(admin.is_admin());

        let user = AuthState::authenticated("t".into(), None, Role::User);
        assert!(!user.is_admin());

        let stale = AuthState {
            phase: AuthPhase::Unauthenticated,
            role: Some(Role::Admin),
            ..AuthState::default()
        };
        assert!(!stale.is_admin());
    }

    #[test]
    fn bearer_token_only_while_authenticated() {
        let state = AuthState {
            phase: AuthPhase::Verifying,
            token: Some("t".into()),
            ..AuthState::default()
        };
        assert!(state.bearer_token().is_none());
        let state = AuthState::authenticated("t".into(), None, Role::User);
        assert_eq!(state.bearer_token().as_deref(), Some("t"));
    }

    #[test]
    fn initial_state_depends_on_stored_token() {
        let session = SessionStore::in_memory();
        assert_eq!(initial_auth_state(&session).phase, AuthPhase::Unauthenticated);
        session.save("t1").unwrap();
        assert_eq!(initial_auth_state(&session).phase, AuthPhase::Verifying);
    }
}
