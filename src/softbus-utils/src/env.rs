//! Reads `CONFIG_*` environment variables at compile time.
//!
//! Each macro evaluates to a constant: the parsed value of the variable if it was set when the
//! crate was built, the provided default otherwise. A value that does not parse aborts the build.
//!
//! ```
//! const HALF_PERIOD_NS: u32 =
//!     softbus_utils::u32_from_env_or!("CONFIG_DOC_HALF_PERIOD_NS", 5_000, "half period (in ns)");
//! # assert_eq!(HALF_PERIOD_NS, 5_000);
//! ```

#[doc(hidden)]
pub use {const_panic, konst};

macro_rules! define_env_with_default_macro {
    ($macro_name:ident, $parse_fn_name:ident, $output_type_name:literal) => {
        #[doc = concat!(
            "Parses an environment variable as ", $output_type_name,
            " at compile time, falling back to a default."
        )]
        #[macro_export]
        macro_rules! $macro_name {
            ($env_var:literal, $default:expr, $doc:literal) => {
                if let Some(str_value) = option_env!($env_var) {
                    if let Ok(value) = $crate::env::konst::primitive::$parse_fn_name(str_value) {
                        value
                    } else {
                        $crate::env::const_panic::concat_panic!(
                            "Could not parse environment variable `",
                            $env_var,
                            "=",
                            str_value,
                            "` (",
                            $doc,
                            ") as ",
                            $output_type_name,
                        );
                    }
                } else {
                    $default
                }
            };
        }
    };
}

define_env_with_default_macro!(usize_from_env_or, parse_usize, "a usize");
define_env_with_default_macro!(u32_from_env_or, parse_u32, "a u32");
define_env_with_default_macro!(u8_from_env_or, parse_u8, "a u8");
