//! Optional diagnostics output
//!
//! `esp32-log` prints straight to the ESP console, `log` forwards to the `log`
//! facade. Without either feature the arguments are type-checked and dropped.

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "esp32-log")]
        esp_println::println!($($arg)*);
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
        #[cfg(not(any(feature = "esp32-log", feature = "log")))]
        $crate::trace::discard(format_args!($($arg)*));
    }};
}

#[cfg(not(any(feature = "esp32-log", feature = "log")))]
#[inline]
pub(crate) fn discard(_: core::fmt::Arguments<'_>) {}
