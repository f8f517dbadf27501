/// Conditional logging module for development builds
///
/// The `log!` macro provides informational logging that is compiled out in
/// production (release) builds by default. Warnings and errors go through
/// `leptos::logging::warn!` and `leptos::logging::error!` directly, which write
/// to the browser console under wasm and to stderr in native tests and benches.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// # Examples
///
/// ```rust,ignore
/// use train_diagram::log;
///
/// log!("Loaded {} station files", 12);
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:tt)+) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            ::leptos::logging::log!($($arg)+);
        }
    };
}

pub use log;
