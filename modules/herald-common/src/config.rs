use std::env;

use tracing::info;

/// Delivery configuration loaded from environment variables.
///
/// Every field is optional: a channel is wired only when its destination is
/// set, so an empty environment yields a config with no channels enabled.
#[derive(Debug, Clone, Default)]
pub struct Config {
    // Channel destinations
    pub email_to: Option<String>,
    pub sms_to: Option<String>,
    pub popup_enabled: bool,

    // Presentation
    pub signature: Option<String>,
}

impl Config {
    /// Load configuration from environment variables. Never fails; unset or
    /// blank variables leave their channel disabled.
    pub fn from_env() -> Self {
        Self {
            email_to: optional_env("HERALD_EMAIL_TO"),
            sms_to: optional_env("HERALD_SMS_TO"),
            popup_enabled: flag_env("HERALD_POPUP"),
            signature: optional_env("HERALD_SIGNATURE"),
        }
    }

    /// Log which channels are configured without leaking full destinations.
    pub fn log_redacted(&self) {
        let email = self.email_to.as_deref().map(redact);
        let sms = self.sms_to.as_deref().map(redact);
        info!(
            email = email.as_deref().unwrap_or("off"),
            sms = sms.as_deref().unwrap_or("off"),
            popup = self.popup_enabled,
            signed = self.signature.is_some(),
            "Loaded delivery config"
        );
    }
}

fn optional_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn flag_env(key: &str) -> bool {
    matches!(
        env::var(key).as_deref().map(str::trim),
        Ok("1") | Ok("true") | Ok("yes") | Ok("on")
    )
}

fn redact(dest: &str) -> String {
    let head: String = dest.chars().take(3).collect();
    format!("{head}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_reads_all_fields() {
        env::set_var("HERALD_EMAIL_TO", "ops@example.com");
        env::set_var("HERALD_SMS_TO", " +15550100 ");
        env::set_var("HERALD_POPUP", "true");
        env::set_var("HERALD_SIGNATURE", "Customer Care");

        let config = Config::from_env();
        assert_eq!(config.email_to.as_deref(), Some("ops@example.com"));
        assert_eq!(config.sms_to.as_deref(), Some("+15550100"));
        assert!(config.popup_enabled);
        assert_eq!(config.signature.as_deref(), Some("Customer Care"));

        env::remove_var("HERALD_EMAIL_TO");
        env::remove_var("HERALD_SMS_TO");
        env::remove_var("HERALD_POPUP");
        env::remove_var("HERALD_SIGNATURE");
    }

    #[test]
    fn blank_destination_counts_as_unset() {
        env::set_var("HERALD_BLANK_TEST", "   ");
        assert_eq!(optional_env("HERALD_BLANK_TEST"), None);
        env::remove_var("HERALD_BLANK_TEST");

        assert_eq!(optional_env("HERALD_NEVER_SET"), None);
    }

    #[test]
    fn flags_accept_common_truthy_values() {
        for value in ["1", "true", "yes", "on"] {
            env::set_var("HERALD_FLAG_TEST", value);
            assert!(flag_env("HERALD_FLAG_TEST"), "{value} should enable");
        }
        env::set_var("HERALD_FLAG_TEST", "0");
        assert!(!flag_env("HERALD_FLAG_TEST"));
        env::remove_var("HERALD_FLAG_TEST");
        assert!(!flag_env("HERALD_FLAG_TEST"));
    }

    #[test]
    fn redact_keeps_only_a_short_prefix() {
        assert_eq!(redact("random.person@example.com"), "ran…");
        assert_eq!(redact("+919876543210"), "+91…");
    }
}
