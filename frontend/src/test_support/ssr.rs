use crate::state::auth::AuthState;
use crate::test_support::helpers::provide_auth;
use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Keeps resources from fetching while a view renders; released on drop so a
/// failing assertion inside the render does not leak into the next test.
struct ResourceLoadGuard;

impl ResourceLoadGuard {
    fn engage() -> Self {
        leptos_reactive::suppress_resource_load(true);
        Self
    }
}

impl Drop for ResourceLoadGuard {
    fn drop(&mut self) {
        leptos_reactive::suppress_resource_load(false);
    }
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let _guard = ResourceLoadGuard::engage();
    with_runtime(|| view().into_view().render_to_string().to_string())
}

pub fn render_with_auth<F, N>(state: AuthState, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        provide_auth(state);
        view()
    })
}
