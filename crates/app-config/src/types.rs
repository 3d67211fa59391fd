// In crates/app-config/src/types.rs

use serde::Deserialize;

use crate::{Error, Result};
use analysis::AnalysisSettings;
use report::{RecipientSet, UrgencyPolicyKind};

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The application's general settings.
    pub app: AppSettings,
    /// The symbols to watch, in report order.
    pub watchlist: WatchlistSettings,
    /// Moving-average window sizes.
    #[serde(default)]
    pub analysis: AnalysisSettings,
    /// Report aggregation settings.
    #[serde(default)]
    pub report: ReportSettings,
    /// Settings for the market data provider.
    pub provider: ProviderSettings,
    /// SMTP settings for outbound delivery.
    pub email: EmailSettings,
    /// Where reports are delivered.
    pub recipients: RecipientSet,
}

impl Settings {
    /// Checks the values a run cannot proceed without.
    ///
    /// Structural problems (missing sections, wrong types) surface when the
    /// settings deserialize; this catches values that are present but empty,
    /// which is how secrets arrive when an environment variable is unset.
    pub fn validate(&self) -> Result<()> {
        if self.watchlist.symbols.is_empty() {
            return Err(Error::MissingValue {
                field: "watchlist.symbols",
            });
        }
        if self.email.username.is_empty() {
            return Err(Error::MissingValue {
                field: "email.username",
            });
        }
        if self.email.password.is_empty() {
            return Err(Error::MissingValue {
                field: "email.password",
            });
        }
        if self.email.from_address.is_empty() {
            return Err(Error::MissingValue {
                field: "email.from_address",
            });
        }
        if self.recipients.primary.is_empty() {
            return Err(Error::MissingValue {
                field: "recipients.primary",
            });
        }
        Ok(())
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The environment the application is running in (e.g., "development", "production").
    pub environment: String,
    /// The log level for the application.
    pub log_level: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WatchlistSettings {
    /// Ticker symbols as the provider knows them (e.g., "^DJI", "^IXIC").
    pub symbols: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ReportSettings {
    /// Which rule flags a run as urgent.
    #[serde(default)]
    pub urgency_policy: UrgencyPolicyKind,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ProviderSettings {
    /// The REST base URL of the market data provider.
    pub base_url: String,
    /// How much history to request (provider range syntax, e.g., "2y").
    pub range: String,
    /// Request timeout for provider calls.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EmailSettings {
    /// The SMTP relay host.
    pub smtp_host: String,
    /// The SMTP relay port.
    pub smtp_port: u16,
    /// The SMTP username. Supplied via `APP_EMAIL__USERNAME`.
    pub username: String,
    /// The SMTP password. Supplied via `APP_EMAIL__PASSWORD`.
    pub password: String,
    /// The From address on outbound messages.
    pub from_address: String,
}

/// Helper functions for serde defaults
fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            app: AppSettings {
                environment: "development".to_string(),
                log_level: "info".to_string(),
            },
            watchlist: WatchlistSettings {
                symbols: vec!["^DJI".to_string(), "^IXIC".to_string()],
            },
            analysis: AnalysisSettings::default(),
            report: ReportSettings::default(),
            provider: ProviderSettings {
                base_url: "https://query1.finance.yahoo.com".to_string(),
                range: "2y".to_string(),
                timeout_secs: 30,
            },
            email: EmailSettings {
                smtp_host: "smtp.gmail.com".to_string(),
                smtp_port: 465,
                username: "sender@example.com".to_string(),
                password: "secret".to_string(),
                from_address: "sender@example.com".to_string(),
            },
            recipients: RecipientSet {
                primary: "inbox@example.com".to_string(),
                urgent: None,
            },
        }
    }

    #[test]
    fn complete_settings_validate() {
        assert!(settings().validate().is_ok());
    }

    #[test]
    fn empty_credentials_are_a_fatal_configuration_error() {
        let mut incomplete = settings();
        incomplete.email.password = String::new();

        assert!(matches!(
            incomplete.validate(),
            Err(Error::MissingValue {
                field: "email.password"
            })
        ));
    }

    #[test]
    fn empty_primary_recipient_is_a_fatal_configuration_error() {
        let mut incomplete = settings();
        incomplete.recipients.primary = String::new();

        assert!(matches!(
            incomplete.validate(),
            Err(Error::MissingValue {
                field: "recipients.primary"
            })
        ));
    }

    #[test]
    fn defaults_cover_analysis_and_policy() {
        let loaded = settings();
        assert_eq!(loaded.analysis.short_window, 2);
        assert_eq!(loaded.analysis.long_window, 210);
        assert_eq!(loaded.report.urgency_policy, UrgencyPolicyKind::AnyBelow);
    }
}
