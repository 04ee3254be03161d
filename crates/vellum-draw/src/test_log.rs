//! Log capture for tests, per test thread.

use std::cell::RefCell;
use std::sync::Once;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Captured {
    pub level: log::Level,
    pub target: String,
    pub message: String,
}

thread_local! {
    static RECORDS: RefCell<Vec<Captured>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        RECORDS.with(|r| {
            r.borrow_mut().push(Captured {
                level: record.level(),
                target: record.target().to_string(),
                message: record.args().to_string(),
            })
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Runs `f` and returns it with everything logged on this thread meanwhile.
pub(crate) fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<Captured>) {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
    RECORDS.with(|r| r.borrow_mut().clear());
    let out = f();
    (out, RECORDS.with(|r| r.take()))
}

/// Records at `level` on `target`.
pub(crate) fn at<'a>(records: &'a [Captured], level: log::Level, target: &str) -> Vec<&'a Captured> {
    records
        .iter()
        .filter(|c| c.level == level && c.target == target)
        .collect()
}
