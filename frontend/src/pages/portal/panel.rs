use crate::components::{
    layout::{Layout, LoadingSpinner},
    modal::NoticeModal,
};
use crate::pages::{
    dashboard_manager::DashboardManagerPanel,
    login::LoginPanel,
    portal::{
        components::{DashboardSelector, DashboardViewer},
        utils::welcome_heading,
        view_model::{use_portal_view_model, PortalViewModel},
    },
};
use crate::state::auth::AuthPhase;
use leptos::*;

#[component]
fn SignedInView(vm: PortalViewModel) -> impl IntoView {
    let email = vm.email();
    let is_admin = vm.is_admin();
    let items = vm.directory.items;
    let loading = vm.directory.loading;
    let selection = vm.selection;

    view! {
        <div class="dashboard-container space-y-6 px-4">
            <h2 class="text-2xl font-semibold text-fg">
                {move || welcome_heading(email.get().as_deref())}
            </h2>
            <DashboardSelector
                items=items.into()
                selection=selection.into()
                loading=loading.into()
                on_select=Callback::new(move |value: Option<i64>| vm.select(value))
            />
            <DashboardViewer dashboard=vm.selected_dashboard()/>
            <Show when=move || is_admin.get()>
                <DashboardManagerPanel/>
            </Show>
        </div>
    }
}

#[component]
pub fn PortalPage() -> impl IntoView {
    let vm = use_portal_view_model();
    let phase = vm.phase;

    view! {
        <Layout
            is_authenticated=vm.is_authenticated()
            logout_pending=vm.logout_action.pending().into()
            on_logout=Callback::new(move |_| vm.logout())
        >
            {move || match phase.get() {
                AuthPhase::Verifying => view! { <LoadingSpinner/> }.into_view(),
                AuthPhase::Unauthenticated => view! { <LoginPanel/> }.into_view(),
                AuthPhase::Authenticated => view! { <SignedInView vm=vm/> }.into_view(),
            }}
            <NoticeModal center=vm.notices/>
        </Layout>
    }
}
