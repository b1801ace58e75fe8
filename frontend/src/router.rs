use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    components::layout::APP_NAME,
    pages::portal::PortalPage,
    state::auth::AuthProvider,
};

pub const HOME_PATH: &str = "/";
/// Any other path lands back on the portal.
pub const FALLBACK_PATH: &str = "/*any";

pub const ROUTE_PATHS: &[&str] = &[HOME_PATH, FALLBACK_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_meta_context();
    view! {
        <Title text=APP_NAME/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path=HOME_PATH view=PortalPage/>
                    <Route path=FALLBACK_PATH view=RedirectHome/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn RedirectHome() -> impl IntoView {
    view! { <Redirect path=HOME_PATH/> }
}
