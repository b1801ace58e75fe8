use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.verify_action.pending();

    let on_get_otp = Callback::new(move |_| vm.get_otp());
    let on_submit_otp = Callback::new(move |_| vm.submit_otp());

    view! {
        <LoginForm
            email=vm.email
            otp=vm.otp
            otp_button_label=vm.otp_button_label()
            otp_button_disabled=vm.otp_button_disabled()
            verify_pending=pending.into()
            on_get_otp=on_get_otp
            on_submit_otp=on_submit_otp
        />
    }
}
