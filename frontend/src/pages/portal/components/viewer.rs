use crate::api::Dashboard;
use leptos::*;

#[component]
pub fn DashboardViewer(dashboard: Signal<Option<Dashboard>>) -> impl IntoView {
    move || {
        dashboard.get().map(|dashboard| {
            view! {
                <div class="dashboard-viewer mt-4">
                    <iframe
                        title="Dashboard"
                        src=dashboard.url
                        width="100%"
                        height="800px"
                        class="border border-border rounded"
                    ></iframe>
                </div>
            }
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers, ssr::render_to_string};

    #[test]
    fn embeds_the_selected_url() {
        let html = render_to_string(|| {
            let selected = helpers::sample_dashboards().into_iter().next();
            view! { <DashboardViewer dashboard=Signal::derive(move || selected.clone())/> }
        });
        assert!(html.contains("<iframe"));
        assert!(html.contains("src=\"https://x/1\""));
        assert!(html.contains("title=\"Dashboard\""));
    }

    #[test]
    fn nothing_selected_renders_no_frame() {
        let html = render_to_string(|| {
            view! { <DashboardViewer dashboard=Signal::derive(|| None)/> }
        });
        assert!(!html.contains("<iframe"));
    }
}
