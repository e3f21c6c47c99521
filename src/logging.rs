//! Feature-gated diagnostics
//!
//! `esp32-log` prints through `esp-println`, `log` forwards to the `log`
//! facade. With neither feature enabled the macro expands to nothing.

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "esp32-log")]
        esp_println::println!($($arg)*);
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
    }};
}

pub(crate) use trace;
