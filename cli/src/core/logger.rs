use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    debug: bool,
}

impl Logger {
    pub fn init(debug: bool) {
        let _ = LOGGER.get_or_init(|| Logger { debug });
    }

    /// Logging stays off until `init` has run.
    fn enabled() -> bool {
        LOGGER.get().map(|logger| logger.debug).unwrap_or(false)
    }

    pub fn debug(message: &str) {
        if Self::enabled() {
            eprintln!("{message}");
        }
    }

    pub fn debug_fmt(args: std::fmt::Arguments) {
        if Self::enabled() {
            eprintln!("{args}");
        }
    }
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::core::logger::Logger::debug_fmt(format_args!($($arg)*))
    };
}
