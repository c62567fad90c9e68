//! Mathematical helpers
//!
//! - `conversions` - complex number representations used for reporting

pub mod conversions;
