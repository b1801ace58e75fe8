use crate::api::Dashboard;
use crate::components::modal::ConfirmDialog;
use crate::config;
use crate::pages::dashboard_manager::{
    components::{DashboardForm, DashboardList},
    view_model::use_dashboard_manager_view_model,
};
use leptos::*;

#[component]
pub fn DashboardManagerPanel() -> impl IntoView {
    let vm = use_dashboard_manager_view_model();
    let pending_delete = vm.pending_delete;
    let confirm_open = Signal::derive(move || pending_delete.with(Option::is_some));
    let confirm_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|dashboard| format!("Delete \"{}\"? This cannot be undone.", dashboard.title))
            .unwrap_or_default()
    });

    view! {
        <section class="dashboard-manager bg-surface-elevated shadow rounded-lg p-6 space-y-6">
            <h2 class="text-xl font-semibold text-fg">{"Manage Dashboards"}</h2>
            <DashboardForm
                form=vm.form
                assignable_roles=config::current().assignable_roles
                pending=vm.save_action.pending().into()
                on_toggle_role=Callback::new(move |role: String| vm.toggle_role(&role))
                on_submit=Callback::new(move |_| vm.submit())
                on_cancel_edit=Callback::new(move |_| vm.cancel_edit())
            />
            <DashboardList
                items=vm.directory.items.into()
                on_edit=Callback::new(move |dashboard: Dashboard| vm.edit(&dashboard))
                on_delete=Callback::new(move |dashboard: Dashboard| vm.request_delete(dashboard))
            />
            <ConfirmDialog
                is_open=confirm_open
                title="Delete dashboard"
                message=confirm_message
                confirm_label="Delete"
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </section>
    }
}
