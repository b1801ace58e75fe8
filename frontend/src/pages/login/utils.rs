use crate::api::ApiError;

pub fn validate_email(email: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::validation("Please enter your email."));
    }
    Ok(())
}

pub fn validate_otp(otp: &str) -> Result<(), ApiError> {
    if otp.trim().is_empty() {
        return Err(ApiError::validation("Please enter the OTP from your email."));
    }
    Ok(())
}

pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Fixed-window lock on OTP requests, started at the moment of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpCooldown {
    window_ms: i64,
    locked_until_ms: Option<i64>,
}

impl OtpCooldown {
    pub fn new(window_secs: u64) -> Self {
        Self {
            window_ms: (window_secs as i64).saturating_mul(1000),
            locked_until_ms: None,
        }
    }

    pub fn is_locked(&self, now_ms: i64) -> bool {
        self.locked_until_ms.is_some_and(|until| now_ms < until)
    }

    /// Starts the window and returns `true`, or returns `false` while still locked.
    pub fn try_start(&mut self, now_ms: i64) -> bool {
        if self.is_locked(now_ms) {
            return false;
        }
        self.locked_until_ms = Some(now_ms.saturating_add(self.window_ms));
        true
    }

    /// Drops an expired lock so the next request starts a fresh window.
    pub fn release(&mut self, now_ms: i64) {
        if !self.is_locked(now_ms) {
            self.locked_until_ms = None;
        }
    }

    pub fn remaining_secs(&self, now_ms: i64) -> u64 {
        match self.locked_until_ms {
            Some(until) if now_ms < until => ((until - now_ms + 999) / 1000) as u64,
            _ => 0,
        }
    }

    pub fn button_label(&self, now_ms: i64) -> String {
        if self.is_locked(now_ms) {
            format!("Wait {}s", self.remaining_secs(now_ms))
        } else {
            "Get OTP".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_start_per_window() {
        let mut cooldown = OtpCooldown::new(10);
        assert!(cooldown.try_start(1_000));
        assert!(!cooldown.try_start(1_001));
        assert!(!cooldown.try_start(10_999));
        assert!(cooldown.is_locked(10_999));
        assert!(!cooldown.is_locked(11_000));
        assert!(cooldown.try_start(11_000));
        assert!(!cooldown.try_start(11_500));
    }

    #[test]
    fn release_only_clears_expired_lock() {
        let mut cooldown = OtpCooldown::new(10);
        cooldown.try_start(0);
        cooldown.release(5_000);
        assert!(cooldown.is_locked(5_000));
        cooldown.release(10_000);
        assert_eq!(cooldown, OtpCooldown::new(10));
    }

    #[test]
    fn label_counts_down_then_resets() {
        let mut cooldown = OtpCooldown::new(10);
        assert_eq!(cooldown.button_label(0), "Get OTP");
        cooldown.try_start(0);
        assert_eq!(cooldown.button_label(0), "Wait 10s");
        assert_eq!(cooldown.button_label(2_500), "Wait 8s");
        assert_eq!(cooldown.button_label(9_999), "Wait 1s");
        assert_eq!(cooldown.button_label(10_000), "Get OTP");
        assert_eq!(cooldown.remaining_secs(10_000), 0);
    }

    #[test]
    fn blank_inputs_are_rejected() {
        assert_eq!(
            validate_email("  ").unwrap_err().code,
            ApiError::VALIDATION_ERROR
        );
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_otp("").is_err());
        assert!(validate_otp("123456").is_ok());
    }
}
