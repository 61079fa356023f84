//! Colored logging for build scripts.
//!
//! Messages go to the build script's stdout, which cargo only shows with
//! `-vv`. Set `BOOTSTRAP_BUILD_VERBOSE` to surface them as `cargo:warning`
//! lines instead.

pub mod build_log_impl;
