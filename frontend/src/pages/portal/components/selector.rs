use crate::api::Dashboard;
use crate::pages::portal::utils::{parse_selection, selection_value};
use leptos::*;

#[component]
pub fn DashboardSelector(
    items: Signal<Vec<Dashboard>>,
    selection: Signal<Option<i64>>,
    loading: Signal<bool>,
    on_select: Callback<Option<i64>>,
) -> impl IntoView {
    view! {
        <div class="dashboard-selector space-y-2">
            <label for="dashboard-select" class="block text-sm font-medium text-fg">
                {"Select a dashboard"}
            </label>
            <select
                id="dashboard-select"
                class="w-full border border-border rounded px-3 py-2 bg-surface-elevated text-fg"
                prop:value=move || selection_value(selection.get())
                on:change=move |ev| on_select.call(parse_selection(&event_target_value(&ev)))
            >
                <option value="">{"-- Select a dashboard --"}</option>
                <For
                    each=move || items.get()
                    key=|dashboard| dashboard.id
                    children=move |dashboard| {
                        view! { <option value=dashboard.id.to_string()>{dashboard.title}</option> }
                    }
                />
            </select>
            <Show when=move || loading.get()>
                <p class="text-sm text-fg-muted">{"Loading dashboards..."}</p>
            </Show>
        </div>
    }
}
