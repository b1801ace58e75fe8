use super::utils::DashboardFormState;
use crate::{
    api::{ApiClient, ApiError, Dashboard},
    pages::portal::repository::DashboardsRepository,
    state::{
        auth::use_auth,
        dashboards::{
            self, use_dashboard_directory, Applied, DashboardDirectory, DashboardMutation,
        },
        notice::{use_notice, Notice},
    },
};
use leptos::*;
use std::rc::Rc;

/// Creates or updates depending on the form mode. An absent token reaches the
/// client as blank and is refused there without a request.
pub async fn save_dashboard(
    directory: DashboardDirectory,
    repo: &DashboardsRepository,
    token: Option<String>,
    form: &DashboardFormState,
) -> Result<Applied, ApiError> {
    let mutation = form.to_mutation()?;
    dashboards::apply_mutation(directory, repo, token.as_deref().unwrap_or_default(), mutation)
        .await
}

pub async fn delete_dashboard(
    directory: DashboardDirectory,
    repo: &DashboardsRepository,
    token: Option<String>,
    id: i64,
) -> Result<(i64, Applied), ApiError> {
    dashboards::apply_mutation(
        directory,
        repo,
        token.as_deref().unwrap_or_default(),
        DashboardMutation::Delete(id),
    )
    .await
    .map(|applied| (id, applied))
}

fn stale_list_notice(action: &str, err: &ApiError) -> Notice {
    Notice::error(
        "Failed",
        format!("{}, but the dashboard list could not be reloaded: {}", action, err),
    )
}

pub fn save_notice(result: &Result<Applied, ApiError>) -> Notice {
    match result {
        Ok(Applied::Refreshed) => Notice::success("Dashboard Saved", ""),
        Ok(Applied::ListStale(err)) => stale_list_notice("Dashboard saved", err),
        Err(err) if err.code == ApiError::VALIDATION_ERROR => {
            Notice::error("Missing details", err.error.clone())
        }
        Err(err) => Notice::error("Error saving dashboard", err.error.clone()),
    }
}

pub fn delete_notice(result: &Result<(i64, Applied), ApiError>) -> Notice {
    match result {
        Ok((_, Applied::Refreshed)) => Notice::success("Dashboard Deleted", ""),
        Ok((_, Applied::ListStale(err))) => stale_list_notice("Dashboard deleted", err),
        Err(err) => Notice::error("Error deleting dashboard", err.error.clone()),
    }
}

#[derive(Clone, Copy)]
pub struct DashboardManagerViewModel {
    pub form: RwSignal<DashboardFormState>,
    pub directory: DashboardDirectory,
    pub pending_delete: RwSignal<Option<Dashboard>>,
    pub save_action: Action<DashboardFormState, Result<Applied, ApiError>>,
    pub delete_action: Action<i64, Result<(i64, Applied), ApiError>>,
    pub refresh_action: Action<(), Result<(), ApiError>>,
}

impl DashboardManagerViewModel {
    pub fn submit(&self) {
        self.save_action.dispatch(self.form.get_untracked());
    }

    pub fn edit(&self, dashboard: &Dashboard) {
        self.form.set(DashboardFormState::edit_from(dashboard));
    }

    pub fn cancel_edit(&self) {
        self.form.update(DashboardFormState::reset);
    }

    pub fn toggle_role(&self, role: &str) {
        self.form.update(|form| form.toggle_role(role));
    }

    pub fn request_delete(&self, dashboard: Dashboard) {
        self.pending_delete.set(Some(dashboard));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(dashboard) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(dashboard.id);
        }
    }
}

pub fn use_dashboard_manager_view_model() -> DashboardManagerViewModel {
    let (auth, _set_auth) = use_auth();
    let directory = use_dashboard_directory();
    let notices = use_notice();
    let repo = DashboardsRepository::new_with_client(Rc::new(
        use_context::<ApiClient>().unwrap_or_default(),
    ));

    let form = create_rw_signal(DashboardFormState::default());
    let pending_delete = create_rw_signal(None::<Dashboard>);

    let repo_for_save = repo.clone();
    let save_action = create_action(move |state: &DashboardFormState| {
        let repo = repo_for_save.clone();
        let state = state.clone();
        let token = auth.get_untracked().bearer_token();
        async move { save_dashboard(directory, &repo, token, &state).await }
    });

    let repo_for_delete = repo.clone();
    let delete_action = create_action(move |id: &i64| {
        let repo = repo_for_delete.clone();
        let id = *id;
        let token = auth.get_untracked().bearer_token();
        async move { delete_dashboard(directory, &repo, token, id).await }
    });

    let refresh_action = create_action(move |_: &()| {
        let repo = repo.clone();
        let token = auth.get_untracked().bearer_token().unwrap_or_default();
        async move { dashboards::refresh(directory, &repo, &token).await }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match &result {
                Ok(_) => form.update(DashboardFormState::reset),
                Err(err) => log::error!("Error saving dashboard: {}", err),
            }
            notices.show(save_notice(&result));
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            match &result {
                Ok((id, _)) => {
                    if form.with_untracked(|state| state.editing_id() == Some(*id)) {
                        form.update(DashboardFormState::reset);
                    }
                }
                Err(err) => log::error!("Error deleting dashboard: {}", err),
            }
            notices.show(delete_notice(&result));
        }
    });

    create_effect(move |_| {
        if let Some(Err(err)) = refresh_action.value().get() {
            notices.show(Notice::error(
                "Failed",
                format!("Error fetching dashboards: {}", err),
            ));
        }
    });

    // Mount-time refresh of the shared list.
    create_effect(move |_| untrack(|| refresh_action.dispatch(())));

    DashboardManagerViewModel {
        form,
        directory,
        pending_delete,
        save_action,
        delete_action,
        refresh_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Role;
    use crate::pages::dashboard_manager::utils::FormMode;
    use crate::state::auth::AuthState;
    use crate::state::notice::NoticeKind;
    use crate::test_support::{helpers, ssr::with_runtime};
    use httpmock::prelude::*;
    use serde_json::json;

    fn repo(server: &MockServer) -> DashboardsRepository {
        DashboardsRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn edit_submits_put_with_current_roles() {
        let server = MockServer::start_async().await;
        let update = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/dashboards/2")
                .header("authorization", "Bearer t1")
                .json_body(json!({
                    "title": "Ops",
                    "url": "https://x/2",
                    "allowedRoles": ["user1", "user2"]
                }));
            then.status(200).json_body(json!({ "message": "updated" }));
        });
        let list = server.mock(|when, then| {
            when.method(GET).path("/api/dashboards");
            then.status(200).json_body(json!([
                { "id": 2, "title": "Ops", "url": "https://x/2", "allowed_roles": "[\"user1\",\"user2\"]" }
            ]));
        });

        let runtime = create_runtime();
        let directory = DashboardDirectory::new();
        let mut form = DashboardFormState::edit_from(&helpers::sample_dashboards()[1]);
        form.toggle_role("user2");

        let applied = save_dashboard(directory, &repo(&server), Some("t1".into()), &form)
            .await
            .unwrap();
        assert_eq!(applied, Applied::Refreshed);

        assert_eq!(directory.find(2).unwrap().allowed_roles.len(), 2);
        update.assert_hits(1);
        list.assert_hits(1);
        runtime.dispose();
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_network() {
        let server = MockServer::start_async().await;
        let create = server.mock(|when, then| {
            when.method(POST).path("/api/dashboards");
            then.status(201);
        });

        let runtime = create_runtime();
        let directory = DashboardDirectory::new();
        let err = save_dashboard(
            directory,
            &repo(&server),
            Some("t1".into()),
            &DashboardFormState::default(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ApiError::VALIDATION_ERROR);
        create.assert_hits(0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn delete_without_token_is_refused_locally() {
        let server = MockServer::start_async().await;
        let delete = server.mock(|when, then| {
            when.method(DELETE).path("/api/dashboards/1");
            then.status(200);
        });

        let runtime = create_runtime();
        let directory = DashboardDirectory::new();
        directory.items.set(helpers::sample_dashboards());

        let err = delete_dashboard(directory, &repo(&server), None, 1)
            .await
            .unwrap_err();
        assert_eq!(err.code, ApiError::UNAUTHORIZED);
        assert_eq!(directory.items.get_untracked().len(), 2);
        delete.assert_hits(0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn delete_returns_removed_id() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/api/dashboards/1");
            then.status(200).json_body(json!({ "message": "deleted" }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/dashboards");
            then.status(200).json_body(json!([
                { "id": 2, "title": "Ops", "url": "https://x/2", "allowed_roles": "[\"user1\"]" }
            ]));
        });

        let runtime = create_runtime();
        let directory = DashboardDirectory::new();
        directory.items.set(helpers::sample_dashboards());

        let removed = delete_dashboard(directory, &repo(&server), Some("t1".into()), 1)
            .await
            .unwrap();
        assert_eq!(removed, (1, Applied::Refreshed));
        assert!(directory.find(1).is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn saved_but_unlisted_dashboard_raises_an_error_notice() {
        let server = MockServer::start_async().await;
        let create = server.mock(|when, then| {
            when.method(POST).path("/api/dashboards");
            then.status(201).json_body(json!({ "id": 3 }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/dashboards");
            then.status(500).body("db down");
        });

        let runtime = create_runtime();
        let directory = DashboardDirectory::new();
        let mut form = DashboardFormState::default();
        form.title = "Finance".into();
        form.url = "https://x/3".into();

        let result = save_dashboard(directory, &repo(&server), Some("t1".into()), &form).await;
        assert!(matches!(result, Ok(Applied::ListStale(_))));

        let notice = save_notice(&result);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.text.contains("could not be reloaded"));
        create.assert_hits(1);
        runtime.dispose();
    }

    #[test]
    fn notices_follow_each_outcome() {
        assert_eq!(
            save_notice(&Ok(Applied::Refreshed)),
            Notice::success("Dashboard Saved", "")
        );
        assert_eq!(
            save_notice(&Err(ApiError::forbidden("Forbidden"))).title,
            "Error saving dashboard"
        );
        assert_eq!(
            save_notice(&Err(ApiError::validation("Title and URL are required."))).title,
            "Missing details"
        );
        assert_eq!(
            delete_notice(&Ok((1, Applied::Refreshed))),
            Notice::success("Dashboard Deleted", "")
        );
        let stale = delete_notice(&Ok((1, Applied::ListStale(ApiError::unknown("down")))));
        assert_eq!(stale.kind, NoticeKind::Error);
        assert_eq!(
            delete_notice(&Err(ApiError::request_failed("offline"))).kind,
            NoticeKind::Error
        );
    }

    #[test]
    fn edit_cancel_and_delete_confirmation_flow() {
        with_runtime(|| {
            helpers::provide_auth(AuthState::authenticated("t1".into(), None, Role::Admin));
            let vm = use_dashboard_manager_view_model();
            let ops = helpers::sample_dashboards()[1].clone();

            vm.edit(&ops);
            assert_eq!(vm.form.get().mode, FormMode::Edit(2));
            assert!(vm.form.get().has_role("user1"));
            vm.toggle_role("user1");
            assert!(!vm.form.get().has_role("user1"));
            vm.cancel_edit();
            assert_eq!(vm.form.get(), DashboardFormState::default());

            vm.request_delete(ops);
            assert_eq!(vm.pending_delete.get().map(|d| d.id), Some(2));
            vm.cancel_delete();
            assert!(vm.pending_delete.get().is_none());
        });
    }
}
