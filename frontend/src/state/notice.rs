use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Holds the single modal notice on screen; a newer notice replaces the current one.
#[derive(Clone, Copy)]
pub struct NoticeCenter {
    pub current: RwSignal<Option<Notice>>,
}

impl Default for NoticeCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeCenter {
    pub fn new() -> Self {
        Self {
            current: create_rw_signal(None),
        }
    }

    pub fn show(&self, notice: Notice) {
        self.current.set(Some(notice));
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

pub fn use_notice() -> NoticeCenter {
    match use_context::<NoticeCenter>() {
        Some(center) => center,
        None => {
            let center = NoticeCenter::new();
            provide_context(center);
            center
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn newer_notice_replaces_current_and_dismiss_clears() {
        with_runtime(|| {
            let center = use_notice();
            center.show(Notice::success("OTP Sent", "The OTP has been sent to your email!"));
            center.show(Notice::error("Failed", "Error sending OTP. Please try again."));
            let shown = center.current.get().unwrap();
            assert_eq!(shown.kind, NoticeKind::Error);
            assert_eq!(shown.title, "Failed");
            center.dismiss();
            assert!(center.current.get().is_none());
        });
    }

    #[test]
    fn use_notice_reuses_provided_context() {
        with_runtime(|| {
            let first = use_notice();
            first.show(Notice::info("Hello", ""));
            let second = use_notice();
            assert_eq!(second.current.get().unwrap().title, "Hello");
        });
    }
}
