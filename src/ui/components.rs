//! UI Components module - business-specific composite components
//!
//! Components combine widgets with application state access. They are the
//! only UI layer that imports `crate::app`; none of them perform network or
//! persistence I/O.

pub mod favorites_grid;
pub mod header;
pub mod mood_grid;
pub mod quote_card;
