use crate::api::{ApiError, Dashboard, DashboardPayload};
use crate::state::dashboards::DashboardMutation;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(i64),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardFormState {
    pub title: String,
    pub url: String,
    pub allowed_roles: BTreeSet<String>,
    pub mode: FormMode,
}

impl DashboardFormState {
    /// Pre-fills the form from a listed entry and switches to edit mode.
    pub fn edit_from(dashboard: &Dashboard) -> Self {
        Self {
            title: dashboard.title.clone(),
            url: dashboard.url.clone(),
            allowed_roles: dashboard.allowed_roles.clone(),
            mode: FormMode::Edit(dashboard.id),
        }
    }

    pub fn editing_id(&self) -> Option<i64> {
        match self.mode {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }

    pub fn toggle_role(&mut self, role: &str) {
        if !self.allowed_roles.remove(role) {
            self.allowed_roles.insert(role.to_string());
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.allowed_roles.contains(role)
    }

    pub fn is_valid(&self) -> bool {
        !(self.title.trim().is_empty() || self.url.trim().is_empty())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Dashboard",
            FormMode::Edit(_) => "Update Dashboard",
        }
    }

    pub fn to_payload(&self) -> DashboardPayload {
        DashboardPayload {
            title: self.title.trim().to_string(),
            url: self.url.trim().to_string(),
            allowed_roles: self.allowed_roles.iter().cloned().collect(),
        }
    }

    pub fn to_mutation(&self) -> Result<DashboardMutation, ApiError> {
        if !self.is_valid() {
            return Err(ApiError::validation("Title and URL are required."));
        }
        Ok(match self.mode {
            FormMode::Create => DashboardMutation::Create(self.to_payload()),
            FormMode::Edit(id) => DashboardMutation::Update(id, self.to_payload()),
        })
    }
}

/// Checkbox caption for a role name: `user1` reads as `User1`.
pub fn role_caption(role: &str) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn allowed_roles_line(dashboard: &Dashboard) -> String {
    format!("Allowed Roles: {}", dashboard.roles_label())
}
