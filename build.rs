//! Feeds the build-time bootstrap settings to the compiler.
//!
//! Values come from the environment, optionally loaded from a `.env` file in
//! the crate root. They are forwarded to rustc so `src/user_config.rs` can
//! read them with `option_env!` and validate them during const evaluation.
//! The debug flag is on unless `BOOTSTRAP_DEBUG` is set to `0`, `false`,
//! `off` or `no`.

use build_log as log;
use cargo_command as cargo;

const SETTINGS_ENV: [&str; 9] = [
    "WIFI_JOIN_RETRIES",
    "STATIC_IP_ADDRESS",
    "STATIC_IP_NETMASK",
    "STATIC_IP_GATEWAY",
    "STATIC_IP_DNS",
    "WIFI_CHANNEL",
    "WIFI_SSID",
    "WIFI_PASSWORD",
    "WIFI_AUTH_MODE",
];

const CREDENTIALS_ENV: [&str; 2] = ["WIFI_SSID", "WIFI_PASSWORD"];

const DEBUG_ENV: &str = "BOOTSTRAP_DEBUG";
const DEBUG_OFF: [&str; 4] = ["0", "false", "off", "no"];

fn debug_enabled(value: Option<&str>) -> bool {
    match value {
        Some(value) => {
            let value = value.trim();
            !DEBUG_OFF.iter().any(|off| value.eq_ignore_ascii_case(off))
        }
        None => true,
    }
}

fn main() {
    // Load .env file if it exists
    match dotenvy::dotenv() {
        Ok(path) => log::info!("Loaded {}", path.display()),
        Err(error) if error.not_found() => {
            log::info!("No .env file found, using environment and defaults")
        }
        Err(error) => log::error!("Failed to load .env: {}", error),
    }
    cargo::cmd!("rerun-if-changed=.env");
    cargo::cmd!("rerun-if-changed=build.rs");

    cargo::cmd!("rustc-check-cfg=cfg(feature_bootstrap_debug)");
    cargo::forward_env(DEBUG_ENV);
    if debug_enabled(std::env::var(DEBUG_ENV).ok().as_deref()) {
        log::info!("Verbose bootstrap logging enabled");
        cargo::cmd!("rustc-cfg=feature_bootstrap_debug");
    } else {
        log::info!("{} disables verbose bootstrap logging", DEBUG_ENV);
    }

    for name in SETTINGS_ENV {
        if cargo::forward_env(name) {
            // The password is forwarded but never echoed.
            if name == "WIFI_PASSWORD" {
                log::debug!("{} = <redacted>", name);
            } else {
                log::debug!("{} = {}", name, std::env::var(name).unwrap_or_default());
            }
        }
    }

    for name in CREDENTIALS_ENV {
        if std::env::var_os(name).is_none() {
            log::warning!(
                "{} is not set, the placeholder credential will be compiled in",
                name
            );
        }
    }
}
