use crate::api::Dashboard;
use crate::pages::dashboard_manager::utils::allowed_roles_line;
use leptos::*;

#[component]
pub fn DashboardList(
    items: Signal<Vec<Dashboard>>,
    on_edit: Callback<Dashboard>,
    on_delete: Callback<Dashboard>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !items.with(Vec::is_empty)
            fallback=|| view! { <p class="text-sm text-fg-muted">{"No dashboards yet."}</p> }
        >
            <ul class="divide-y divide-border">
                <For
                    each=move || items.get()
                    key=|dashboard| (dashboard.id, dashboard.title.clone(), dashboard.url.clone(), dashboard.roles_label())
                    children=move |dashboard: Dashboard| {
                        let for_edit = dashboard.clone();
                        let for_delete = dashboard.clone();
                        view! {
                            <li class="py-3 flex items-start justify-between gap-4">
                                <div class="text-sm">
                                    <p class="font-medium text-fg">
                                        {format!("{} - {}", dashboard.title, dashboard.url)}
                                    </p>
                                    <p class="text-fg-muted">{allowed_roles_line(&dashboard)}</p>
                                </div>
                                <div class="flex gap-2">
                                    <button
                                        type="button"
                                        class="px-3 py-1 text-sm rounded bg-surface-muted text-fg"
                                        on:click=move |_| on_edit.call(for_edit.clone())
                                    >
                                        {"Edit"}
                                    </button>
                                    <button
                                        type="button"
                                        class="px-3 py-1 text-sm rounded bg-action-danger-bg text-action-danger-text"
                                        on:click=move |_| on_delete.call(for_delete.clone())
                                    >
                                        {"Delete"}
                                    </button>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}
