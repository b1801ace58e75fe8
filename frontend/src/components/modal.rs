use crate::state::notice::{NoticeCenter, NoticeKind};
use leptos::ev::KeyboardEvent;
use leptos::*;

/// Backdrop + dialog shell; Escape, the backdrop and the ✕ button all call `on_close`.
#[component]
fn ModalFrame(
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
            <button
                type="button"
                aria-label="Close"
                class="absolute inset-0 bg-overlay-backdrop"
                on:click=move |_| on_close.call(())
            ></button>
            <div
                class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                role="dialog"
                aria-modal="true"
                tabindex="-1"
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        on_close.call(());
                    }
                }
            >
                <div class="flex items-start justify-between gap-3">
                    <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                    <button
                        type="button"
                        aria-label="Close"
                        class="text-fg-muted hover:text-fg"
                        on:click=move |_| on_close.call(())
                    >
                        {"✕"}
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_button_class = if destructive {
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover"
    } else {
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
    };
    let title = Signal::derive(move || title.get());
    let message = Signal::derive(move || message.get());
    let confirm_label_text = Signal::derive(move || {
        let text = confirm_label.get();
        if text.trim().is_empty() {
            "Confirm".to_string()
        } else {
            text
        }
    });

    view! {
        <Show when=move || is_open.get()>
            <ModalFrame title=title on_close=on_cancel>
                <p class="text-sm text-fg-muted">{move || message.get()}</p>
                <div class="flex justify-end gap-2">
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                        on:click=move |_| on_cancel.call(())
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="button"
                        class=confirm_button_class
                        on:click=move |_| on_confirm.call(())
                    >
                        {move || confirm_label_text.get()}
                    </button>
                </div>
            </ModalFrame>
        </Show>
    }
}

fn notice_style(kind: NoticeKind) -> (&'static str, &'static str) {
    match kind {
        NoticeKind::Success => ("✓", "text-status-success-text"),
        NoticeKind::Error => ("✕", "text-status-error-text"),
        NoticeKind::Info => ("ℹ", "text-status-info-text"),
    }
}

/// Modal rendering of whatever notice the center currently holds.
#[component]
pub fn NoticeModal(center: NoticeCenter) -> impl IntoView {
    let dismiss = Callback::new(move |_| center.dismiss());
    move || {
        center.current.get().map(|notice| {
            let (icon, tone) = notice_style(notice.kind);
            let text = (!notice.text.is_empty()).then(|| {
                view! { <p class="text-sm text-fg">{notice.text.clone()}</p> }
            });
            view! {
                <ModalFrame title=notice.title.clone() on_close=dismiss>
                    <div class=format!("flex items-center gap-3 {}", tone) data-notice-kind=format!("{:?}", notice.kind)>
                        <span class="text-2xl">{icon}</span>
                        {text}
                    </div>
                    <div class="flex justify-end">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                            on:click=move |_| dismiss.call(())
                        >
                            {"OK"}
                        </button>
                    </div>
                </ModalFrame>
            }
        })
    }
}
