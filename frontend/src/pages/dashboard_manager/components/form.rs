use crate::pages::dashboard_manager::utils::{role_caption, DashboardFormState, FormMode};
use leptos::*;

#[component]
pub fn DashboardForm(
    form: RwSignal<DashboardFormState>,
    assignable_roles: Vec<String>,
    pending: Signal<bool>,
    on_toggle_role: Callback<String>,
    on_submit: Callback<()>,
    on_cancel_edit: Callback<()>,
) -> impl IntoView {
    let editing = Signal::derive(move || matches!(form.with(|state| state.mode), FormMode::Edit(_)));

    view! {
        <form
            class="dashboard-form space-y-3"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.call(());
            }
        >
            <input
                type="text"
                required=true
                class="w-full border border-border rounded px-3 py-2"
                placeholder="Dashboard Title"
                prop:value=move || form.with(|state| state.title.clone())
                on:input=move |ev| form.update(|state| state.title = event_target_value(&ev))
            />
            <input
                type="url"
                required=true
                class="w-full border border-border rounded px-3 py-2"
                placeholder="Dashboard URL"
                prop:value=move || form.with(|state| state.url.clone())
                on:input=move |ev| form.update(|state| state.url = event_target_value(&ev))
            />
            <div class="flex flex-wrap gap-4">
                {assignable_roles
                    .into_iter()
                    .map(|role| {
                        let caption = role_caption(&role);
                        let checked_role = role.clone();
                        let value = role.clone();
                        view! {
                            <label class="inline-flex items-center gap-2 text-sm text-fg">
                                <input
                                    type="checkbox"
                                    value=value
                                    prop:checked=move || form.with(|state| state.has_role(&checked_role))
                                    on:change=move |_| on_toggle_role.call(role.clone())
                                />
                                {caption}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex gap-2">
                <button
                    type="submit"
                    class="px-4 py-2 bg-action-primary-bg text-action-primary-text rounded disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || form.with(|state| state.submit_label())}
                </button>
                <Show when=move || editing.get()>
                    <button
                        type="button"
                        class="px-4 py-2 bg-surface-muted text-fg rounded"
                        on:click=move |_| on_cancel_edit.call(())
                    >
                        {"Cancel Edit"}
                    </button>
                </Show>
            </div>
        </form>
    }
}
