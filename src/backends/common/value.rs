//! Re-export of the runtime's value types for backend consumers.
//!
//! The backends historically expected their own `value` module; the value
//! types themselves live under `crate::runtime::value`, shared with the
//! front end.

pub use crate::runtime::value::runtime_value::*;
