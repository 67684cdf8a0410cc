//! Client-side model types.
//!
//! The `Quote` payload itself lives in `quote_common`; this module only holds
//! what the CLI adds on top:
//! - `period`: preset age windows for `list`.
pub mod period;
