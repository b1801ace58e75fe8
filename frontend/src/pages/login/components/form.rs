use leptos::*;

#[component]
pub fn LoginForm(
    email: RwSignal<String>,
    otp: RwSignal<String>,
    otp_button_label: Signal<String>,
    otp_button_disabled: Signal<bool>,
    verify_pending: Signal<bool>,
    on_get_otp: Callback<()>,
    on_submit_otp: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="login-container max-w-md mx-auto bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-2xl font-semibold text-fg">{"Login"}</h2>
            <div class="flex gap-2">
                <input
                    type="email"
                    class="flex-1 border border-border rounded px-3 py-2"
                    placeholder="Enter your email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="px-4 py-2 bg-action-primary-bg text-action-primary-text rounded disabled:opacity-50"
                    disabled=move || otp_button_disabled.get()
                    on:click=move |_| on_get_otp.call(())
                >
                    {move || otp_button_label.get()}
                </button>
            </div>
            <div class="flex gap-2">
                <input
                    type="text"
                    inputmode="numeric"
                    autocomplete="one-time-code"
                    class="flex-1 border border-border rounded px-3 py-2"
                    placeholder="Enter OTP"
                    prop:value=move || otp.get()
                    on:input=move |ev| otp.set(event_target_value(&ev))
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            on_submit_otp.call(());
                        }
                    }
                />
                <button
                    type="button"
                    class="px-4 py-2 bg-action-primary-bg text-action-primary-text rounded disabled:opacity-50"
                    disabled=move || verify_pending.get()
                    on:click=move |_| on_submit_otp.call(())
                >
                    {move || if verify_pending.get() { "Verifying..." } else { "Submit OTP" }}
                </button>
            </div>
        </div>
    }
}
