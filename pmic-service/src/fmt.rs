//! Logging macros
//!
//! Services log through these macros so that the backend is picked once, by feature, for the
//! whole workspace: `defmt` for on-target builds, `log` for hosted builds, and nothing at all
//! when neither is enabled (arguments are still evaluated by reference so no warnings leak).

#[cfg(all(feature = "log", feature = "defmt", not(doc)))]
compile_error!("features `log` and `defmt` are mutually exclusive");

#[cfg(all(not(doc), feature = "defmt"))]
mod backend {
    /// Trace-level message
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! trace {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::defmt::trace!($s $(, $x)*)
        };
    }

    /// Debug-level message
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! debug {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::defmt::debug!($s $(, $x)*)
        };
    }

    /// Info-level message
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! info {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::defmt::info!($s $(, $x)*)
        };
    }

    /// Warning
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! warn {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::defmt::warn!($s $(, $x)*)
        };
    }

    /// Error
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! error {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::defmt::error!($s $(, $x)*)
        };
    }
}

#[cfg(all(not(doc), feature = "log"))]
mod backend {
    /// Trace-level message
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! trace {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::log::trace!($s $(, $x)*)
        };
    }

    /// Debug-level message
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! debug {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::log::debug!($s $(, $x)*)
        };
    }

    /// Info-level message
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! info {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::log::info!($s $(, $x)*)
        };
    }

    /// Warning
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! warn {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::log::warn!($s $(, $x)*)
        };
    }

    /// Error
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! error {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::log::error!($s $(, $x)*)
        };
    }
}

// Also the variant `cargo doc` sees
#[cfg(any(doc, not(any(feature = "defmt", feature = "log"))))]
mod backend {
    /// Trace-level message
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! trace {
        ($s:literal $(, $x:expr)* $(,)?) => {{
            let _ = ($( & $x ),*);
        }};
    }

    /// Debug-level message
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! debug {
        ($s:literal $(, $x:expr)* $(,)?) => {{
            let _ = ($( & $x ),*);
        }};
    }

    /// Info-level message
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! info {
        ($s:literal $(, $x:expr)* $(,)?) => {{
            let _ = ($( & $x ),*);
        }};
    }

    /// Warning
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! warn {
        ($s:literal $(, $x:expr)* $(,)?) => {{
            let _ = ($( & $x ),*);
        }};
    }

    /// Error
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! error {
        ($s:literal $(, $x:expr)* $(,)?) => {{
            let _ = ($( & $x ),*);
        }};
    }
}
