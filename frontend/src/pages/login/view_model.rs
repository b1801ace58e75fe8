use super::{
    repository::AuthRepository,
    utils::{now_ms, validate_email, validate_otp, OtpCooldown},
};
use crate::{
    api::{ApiClient, ApiError},
    config,
    pages::portal::repository::DashboardsRepository,
    state::{
        auth::{self, use_auth, use_session_store, AuthState},
        dashboards::{self, use_dashboard_directory, DashboardDirectory},
        notice::{use_notice, Notice, NoticeCenter},
        session::SessionStore,
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpRequestOutcome {
    /// Rejected locally by the cooldown; nothing was sent.
    Throttled,
    Invalid(ApiError),
    Sent,
    Failed(ApiError),
}

pub async fn request_otp(
    email: &str,
    now_ms: i64,
    cooldown: RwSignal<OtpCooldown>,
    repo: &AuthRepository,
) -> OtpRequestOutcome {
    let email = email.trim();
    if let Err(err) = validate_email(email) {
        return OtpRequestOutcome::Invalid(err);
    }
    let started = cooldown
        .try_update(|state| state.try_start(now_ms))
        .unwrap_or(false);
    if !started {
        return OtpRequestOutcome::Throttled;
    }
    match repo.request_otp(email).await {
        Ok(()) => OtpRequestOutcome::Sent,
        Err(err) => {
            log::error!("Error sending OTP: {}", err);
            OtpRequestOutcome::Failed(err)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Ready,
    /// Signed in, but the first dashboard fetch failed.
    ListUnavailable(ApiError),
}

/// OTP login followed by the first dashboard fetch. A failed fetch does not undo the login.
pub async fn submit_otp(
    email: &str,
    otp: &str,
    repo: &AuthRepository,
    dashboards_repo: &DashboardsRepository,
    session: &SessionStore,
    set_auth_state: WriteSignal<AuthState>,
    directory: DashboardDirectory,
) -> Result<LoginOutcome, ApiError> {
    validate_email(email)?;
    validate_otp(otp)?;
    let token = auth::verify_otp_login(email, otp, repo, session, set_auth_state).await?;
    Ok(match dashboards::refresh(directory, dashboards_repo, &token).await {
        Ok(()) => LoginOutcome::Ready,
        Err(err) => LoginOutcome::ListUnavailable(err),
    })
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub otp: RwSignal<String>,
    pub cooldown: RwSignal<OtpCooldown>,
    pub clock: RwSignal<i64>,
    pub request_otp_action: Action<(String, i64), OtpRequestOutcome>,
    pub verify_action: Action<(String, String), Result<LoginOutcome, ApiError>>,
}

impl LoginViewModel {
    pub fn otp_button_disabled(&self) -> Signal<bool> {
        let cooldown = self.cooldown;
        let clock = self.clock;
        Signal::derive(move || cooldown.get().is_locked(clock.get()))
    }

    pub fn otp_button_label(&self) -> Signal<String> {
        let cooldown = self.cooldown;
        let clock = self.clock;
        Signal::derive(move || cooldown.get().button_label(clock.get()))
    }

    pub fn get_otp(&self) {
        let now = now_ms();
        self.clock.set(now);
        if self.cooldown.get_untracked().is_locked(now) {
            return;
        }
        self.request_otp_action
            .dispatch((self.email.get_untracked(), now));
        spawn_local(tick_until_unlocked(self.cooldown, self.clock));
    }

    pub fn submit_otp(&self) {
        if self.verify_action.pending().get_untracked() {
            return;
        }
        self.verify_action
            .dispatch((self.email.get_untracked(), self.otp.get_untracked()));
    }
}

async fn tick_until_unlocked(cooldown: RwSignal<OtpCooldown>, clock: RwSignal<i64>) {
    // The dispatched request claims the cooldown before this first tick fires.
    loop {
        gloo_timers::future::TimeoutFuture::new(1_000).await;
        let now = now_ms();
        clock.set(now);
        if !cooldown.get_untracked().is_locked(now) {
            cooldown.update(|state| state.release(now));
            break;
        }
    }
}

pub fn otp_request_notice(outcome: &OtpRequestOutcome) -> Notice {
    match outcome {
        OtpRequestOutcome::Sent => {
            Notice::success("OTP Sent", "The OTP has been sent to your email!")
        }
        OtpRequestOutcome::Failed(_) => {
            Notice::error("Failed", "Error sending OTP. Please try again.")
        }
        OtpRequestOutcome::Invalid(err) => Notice::error("Missing email", err.error.clone()),
        OtpRequestOutcome::Throttled => Notice::info(
            "Please wait",
            "An OTP was just requested. Try again when the countdown ends.",
        ),
    }
}

/// Runs inside the action future: a successful login unmounts the login panel
/// before the action value could be observed.
fn report_verify_result(
    result: &Result<LoginOutcome, ApiError>,
    otp: RwSignal<String>,
    notices: NoticeCenter,
) {
    match result {
        Ok(LoginOutcome::Ready) => {
            let _ = otp.try_set(String::new());
            notices.show(Notice::success("Login Successful", ""));
        }
        Ok(LoginOutcome::ListUnavailable(err)) => {
            let _ = otp.try_set(String::new());
            notices.show(Notice::error(
                "Failed",
                format!("Error fetching dashboards: {}", err),
            ));
        }
        Err(err) if err.code == ApiError::VALIDATION_ERROR => {
            notices.show(Notice::error("Missing details", err.error.clone()))
        }
        Err(err) => {
            log::error!("Error verifying OTP: {}", err);
            notices.show(Notice::error("Invalid OTP", "Please try again."));
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let (_auth, set_auth) = use_auth();
    let session = use_session_store();
    let directory = use_dashboard_directory();
    let notices = use_notice();
    let api = Rc::new(use_context::<ApiClient>().unwrap_or_default());
    let repo = AuthRepository::new_with_client(api.clone());
    let dashboards_repo = DashboardsRepository::new_with_client(api);

    let email = create_rw_signal(String::new());
    let otp = create_rw_signal(String::new());
    let cooldown = create_rw_signal(OtpCooldown::new(config::current().otp_cooldown_secs));
    let clock = create_rw_signal(0i64);

    let repo_for_otp = repo.clone();
    let request_otp_action = create_action(move |(email, now): &(String, i64)| {
        let repo = repo_for_otp.clone();
        let email = email.clone();
        let now = *now;
        async move { request_otp(&email, now, cooldown, &repo).await }
    });

    let otp_field = otp;
    let verify_action = create_action(move |(email, otp): &(String, String)| {
        let repo = repo.clone();
        let dashboards_repo = dashboards_repo.clone();
        let session = session.clone();
        let email = email.clone();
        let otp = otp.clone();
        async move {
            let result = submit_otp(
                &email,
                &otp,
                &repo,
                &dashboards_repo,
                &session,
                set_auth,
                directory,
            )
            .await;
            report_verify_result(&result, otp_field, notices);
            result
        }
    });

    create_effect(move |_| {
        if let Some(outcome) = request_otp_action.value().get() {
            notices.show(otp_request_notice(&outcome));
        }
    });

    LoginViewModel {
        email,
        otp,
        cooldown,
        clock,
        request_otp_action,
        verify_action,
    }
}
