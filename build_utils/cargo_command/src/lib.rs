//! `cargo:` directives for build scripts.

/// Prints a `cargo:` directive, e.g. `cmd!("rerun-if-env-changed={}", name)`.
#[macro_export]
macro_rules! cmd {
    ($($arg:tt)*) => {
        println!("cargo:{}", format!($($arg)*))
    };
}

/// Forwards a variable of the build script's environment to rustc so that
/// `option_env!` sees it, and requests a rebuild when it changes.
///
/// Returns `true` when the variable was set.
pub fn forward_env(name: &str) -> bool {
    cmd!("rerun-if-env-changed={}", name);
    match std::env::var(name) {
        Ok(value) => {
            cmd!("rustc-env={}={}", name, value);
            true
        }
        Err(_) => false,
    }
}
