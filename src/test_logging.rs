//! Test logger: `env_logger` output plus a per-thread copy of every message so
//! tests can assert on what was logged.

extern crate std;

use log::Log;
use std::boxed::Box;
use std::cell::RefCell;
use std::string::{String, ToString};
use std::sync::Once;
use std::vec::Vec;

std::thread_local! {
    static CAPTURED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

struct CapturingLogger {
    inner: env_logger::Logger,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        CAPTURED.with(|lines| lines.borrow_mut().push(record.args().to_string()));
        if self.inner.enabled(record.metadata()) {
            self.inner.log(record);
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

static INIT: Once = Once::new();

/// Installs the logger once per test binary and clears this thread's capture.
pub(crate) fn init() {
    INIT.call_once(|| {
        let inner = env_logger::Builder::from_default_env()
            .is_test(true)
            .build();
        let logger = Box::leak(Box::new(CapturingLogger { inner }));
        if log::set_logger(logger).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
    take_captured();
}

/// Messages logged on the current thread since the last call.
pub(crate) fn take_captured() -> Vec<String> {
    CAPTURED.with(|lines| lines.take())
}
