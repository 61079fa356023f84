// ANSI color codes
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const GRAY: &str = "\x1b[90m";
pub const BLUE: &str = "\x1b[34m";
pub const BOLD: &str = "\x1b[1m";
pub const RESET: &str = "\x1b[0m";

/// Environment variable that routes build messages through `cargo:warning`.
pub const VERBOSE_ENV: &str = "BOOTSTRAP_BUILD_VERBOSE";

pub fn verbose() -> bool {
    std::env::var_os(VERBOSE_ENV).is_some()
}

pub fn emit(color: &str, level: &str, message: &str, force_warning: bool) {
    let line = format!("[{color}{BOLD}build.rs::{level}{RESET}] {message}");
    if force_warning || verbose() {
        println!("cargo:warning={line}");
    } else {
        println!("{line}");
    }
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::build_log_impl::emit(
            $crate::build_log_impl::GRAY, "DBG", &format!($($arg)*), false,
        )
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::build_log_impl::emit(
            $crate::build_log_impl::BLUE, "INFO", &format!($($arg)*), false,
        )
    };
}

/// Always surfaces as `cargo:warning`.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => {
        $crate::build_log_impl::emit(
            $crate::build_log_impl::YELLOW, "WARNING", &format!($($arg)*), true,
        )
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::build_log_impl::emit(
            $crate::build_log_impl::RED, "ERROR", &format!($($arg)*), true,
        )
    };
}
