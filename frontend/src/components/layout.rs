use leptos::*;

pub const APP_NAME: &str = "Dashboard Portal";

#[component]
pub fn Navbar(
    is_authenticated: Signal<bool>,
    logout_pending: Signal<bool>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <nav class="navbar bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="navbar-logo text-xl font-semibold text-fg">{APP_NAME}</div>
                    <Show when=move || is_authenticated.get()>
                        <button
                            class="logout-button text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                            disabled=move || logout_pending.get()
                            on:click=move |_| on_logout.call(())
                        >
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();
    view! {
        <footer class="footer py-4 text-center text-sm text-fg-muted">
            <p>{format!("© {} {}. All rights reserved.", year, APP_NAME)}</p>
        </footer>
    }
}

#[component]
pub fn Layout(
    is_authenticated: Signal<bool>,
    logout_pending: Signal<bool>,
    on_logout: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="app min-h-screen bg-surface flex flex-col">
            <Navbar
                is_authenticated=is_authenticated
                logout_pending=logout_pending
                on_logout=on_logout
            />
            <main class="app-container flex-1 w-full max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}
