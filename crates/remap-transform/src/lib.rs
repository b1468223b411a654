//! Value-level transformation engine.
//!
//! Two stages compose per cell:
//!
//! 1. [`coerce`]: value-conversion lookup (which wins unconditionally over
//!    coercion) followed by type coercion under a decimal-separator
//!    convention. Coercion failure silently falls back to the original
//!    string; coercion never raises.
//! 2. [`apply_transformation`]: a named or date-parameterized string
//!    operation. The date paths fall back to the empty string on failure,
//!    not the original value. The two fallback policies are deliberately
//!    different and must stay that way.

pub mod coerce;
pub mod date;

pub use coerce::{apply_transformation, apply_transformation_spec, coerce, parse_number};
pub use date::{
    AUTO_DETECT_FORMATS, format_auto, format_date, parse_auto, transform_date, try_parse,
};
