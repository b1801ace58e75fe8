use super::utils::{reconcile_selection, resolve_selection};
use crate::{
    api::{ApiClient, ApiError, Dashboard},
    pages::login::repository::AuthRepository,
    state::{
        auth::{self, use_auth, use_session_store, AuthPhase, AuthState},
        dashboards::{use_dashboard_directory, DashboardDirectory},
        notice::{use_notice, Notice, NoticeCenter},
        session::SessionStore,
    },
};
use leptos::*;
use std::rc::Rc;

/// Signs out and drops every piece of session-scoped client state.
pub async fn sign_out(
    token: Option<String>,
    repo: &AuthRepository,
    session: &SessionStore,
    set_auth_state: WriteSignal<AuthState>,
    directory: DashboardDirectory,
    selection: RwSignal<Option<i64>>,
) -> Result<(), ApiError> {
    let result = auth::logout(token, repo, session, set_auth_state).await;
    directory.clear();
    selection.set(None);
    result
}

/// Local state is gone either way; only a confirmed server logout is announced.
pub fn logout_notice(result: &Result<(), ApiError>) -> Option<Notice> {
    result
        .is_ok()
        .then(|| Notice::success("Logout Successful", ""))
}

#[derive(Clone, Copy)]
pub struct PortalViewModel {
    pub auth: ReadSignal<AuthState>,
    pub phase: Memo<AuthPhase>,
    pub directory: DashboardDirectory,
    pub notices: NoticeCenter,
    /// What the user last picked in the selector.
    pub requested: RwSignal<Option<i64>>,
    /// The active selection: `requested` while signed in and still listed, else `None`.
    pub selection: Memo<Option<i64>>,
    pub logout_action: Action<(), Result<(), ApiError>>,
}

impl PortalViewModel {
    pub fn is_authenticated(&self) -> Signal<bool> {
        let phase = self.phase;
        Signal::derive(move || phase.get() == AuthPhase::Authenticated)
    }

    pub fn is_admin(&self) -> Signal<bool> {
        let auth = self.auth;
        Signal::derive(move || auth.with(AuthState::is_admin))
    }

    pub fn email(&self) -> Signal<Option<String>> {
        let auth = self.auth;
        Signal::derive(move || auth.with(|state| state.email.clone()))
    }

    pub fn selected_dashboard(&self) -> Signal<Option<Dashboard>> {
        let items = self.directory.items;
        let selection = self.selection;
        Signal::derive(move || items.with(|items| resolve_selection(items, selection.get())))
    }

    pub fn select(&self, selection: Option<i64>) {
        self.requested.set(selection);
    }

    pub fn logout(&self) {
        if self.logout_action.pending().get_untracked() {
            return;
        }
        self.logout_action.dispatch(());
    }
}

pub fn use_portal_view_model() -> PortalViewModel {
    let (auth_state, set_auth) = use_auth();
    let session = use_session_store();
    let directory = use_dashboard_directory();
    let notices = use_notice();
    let repo = AuthRepository::new_with_client(Rc::new(
        use_context::<ApiClient>().unwrap_or_default(),
    ));

    let phase = create_memo(move |_| auth_state.with(|state| state.phase));
    let requested = create_rw_signal(None::<i64>);
    // A deleted or no-longer-visible entry is never the active selection.
    let selection = create_memo(move |_| {
        if phase.get() != AuthPhase::Authenticated {
            return None;
        }
        directory
            .items
            .with(|items| reconcile_selection(items, requested.get()))
    });

    let logout_action = create_action(move |_: &()| {
        let repo = repo.clone();
        let session = session.clone();
        let token = auth_state.get_untracked().bearer_token();
        async move { sign_out(token, &repo, &session, set_auth, directory, requested).await }
    });

    create_effect(move |_| {
        if let Some(notice) = logout_action.value().with(|result| {
            result.as_ref().and_then(logout_notice)
        }) {
            notices.show(notice);
        }
    });

    PortalViewModel {
        auth: auth_state,
        phase,
        directory,
        notices,
        requested,
        selection,
        logout_action,
    }
}
