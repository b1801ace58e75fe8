use crate::api::Dashboard;

/// Blank or non-numeric selector values mean "no selection".
pub fn parse_selection(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

pub fn selection_value(selection: Option<i64>) -> String {
    selection.map(|id| id.to_string()).unwrap_or_default()
}

/// The selected entry, only while it is still present in `items`.
pub fn resolve_selection(items: &[Dashboard], selection: Option<i64>) -> Option<Dashboard> {
    let id = selection?;
    items.iter().find(|dashboard| dashboard.id == id).cloned()
}

/// Keeps `selection` only if it still points at a listed entry.
pub fn reconcile_selection(items: &[Dashboard], selection: Option<i64>) -> Option<i64> {
    resolve_selection(items, selection).map(|dashboard| dashboard.id)
}

pub fn welcome_heading(email: Option<&str>) -> String {
    match email.map(str::trim).filter(|email| !email.is_empty()) {
        Some(email) => format!("Welcome, {}!", email),
        None => "Welcome!".to_string(),
    }
}
