use crate::{
    api::{ApiError, Dashboard, DashboardPayload},
    pages::portal::repository::DashboardsRepository,
};
use leptos::*;

/// The one dashboard list shared by the selector and the manager.
///
/// `items` is only replaced by a successful fetch. `generation` moves on every
/// `clear()`, so a fetch that started before a sign-out cannot refill the list.
#[derive(Clone, Copy)]
pub struct DashboardDirectory {
    pub items: RwSignal<Vec<Dashboard>>,
    pub loading: RwSignal<bool>,
    generation: StoredValue<u32>,
}

impl Default for DashboardDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardDirectory {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
            generation: store_value(0),
        }
    }

    pub fn find(&self, id: i64) -> Option<Dashboard> {
        self.items
            .with(|items| items.iter().find(|d| d.id == id).cloned())
    }

    pub fn clear(&self) {
        self.generation
            .update_value(|value| *value = value.wrapping_add(1));
        self.items.set(Vec::new());
        self.loading.set(false);
    }
}

pub fn use_dashboard_directory() -> DashboardDirectory {
    match use_context::<DashboardDirectory>() {
        Some(directory) => directory,
        None => {
            let directory = DashboardDirectory::new();
            provide_context(directory);
            directory
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardMutation {
    Create(DashboardPayload),
    Update(i64, DashboardPayload),
    Delete(i64),
}

/// Outcome of a mutation the backend accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    Refreshed,
    /// The follow-up fetch failed, so `items` still shows the previous list.
    ListStale(ApiError),
}

pub async fn refresh(
    directory: DashboardDirectory,
    repo: &DashboardsRepository,
    token: &str,
) -> Result<(), ApiError> {
    let generation = directory.generation.get_value();
    directory.loading.set(true);
    let result = repo.list(token).await;
    if directory.generation.get_value() != generation {
        log::debug!("Dropping a dashboard list fetched before sign-out");
        return Ok(());
    }
    directory.loading.set(false);
    match result {
        Ok(items) => {
            directory.items.set(items);
            Ok(())
        }
        Err(err) => {
            log::error!("Error fetching dashboards: {}", err);
            Err(err)
        }
    }
}

/// Runs one mutation, then re-fetches the whole list. A failed mutation leaves
/// `items` untouched; a failed re-fetch is reported as `Applied::ListStale`.
pub async fn apply_mutation(
    directory: DashboardDirectory,
    repo: &DashboardsRepository,
    token: &str,
    mutation: DashboardMutation,
) -> Result<Applied, ApiError> {
    let result = match &mutation {
        DashboardMutation::Create(payload) => repo.create(token, payload).await,
        DashboardMutation::Update(id, payload) => repo.update(token, *id, payload).await,
        DashboardMutation::Delete(id) => repo.delete(token, *id).await,
    };
    if let Err(err) = result {
        log::error!("Dashboard mutation {:?} failed: {}", mutation, err);
        return Err(err);
    }

    Ok(match refresh(directory, repo, token).await {
        Ok(()) => Applied::Refreshed,
        Err(err) => Applied::ListStale(err),
    })
}
