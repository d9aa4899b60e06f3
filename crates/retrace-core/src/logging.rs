//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Registry-only subscriber for deterministic testing
    Test,
}

/// Select a profile from the `RETRACE_LOG_FORMAT` environment variable
/// (`json` selects Production, anything else Development).
pub fn profile_from_env() -> Profile {
    match std::env::var("RETRACE_LOG_FORMAT") {
        Ok(value) if value.eq_ignore_ascii_case("json") => Profile::Production,
        _ => Profile::Development,
    }
}

static INIT_ONCE: Once = Once::new();

const DEV_FILTER: &str = "retrace_core=debug,retrace_history=debug,retrace_cli=debug";
const PROD_FILTER: &str = "retrace_core=info,retrace_history=info,retrace_cli=info";

/// Initialize the logging facility
///
/// This function should be called once at application startup. Subsequent
/// calls are no-ops. Logs go to stderr so that stdout stays reserved for
/// command output.
///
/// # Profiles
///
/// - **Development**: Human-readable logs with debug level
/// - **Production**: JSON structured logs with info level
/// - **Test**: Bare registry so tests stay quiet
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(DEV_FILTER)),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(PROD_FILTER)),
                )
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}
