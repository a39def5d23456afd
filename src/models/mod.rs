//! Data model for the dashboard core.
//!
//! Wire-facing entities arrive from the external data provider (see
//! [`crate::provider`]); everything here is plain data with explicit
//! `Option` for absent fields — a numeric zero is always a present value.

mod anomaly;
mod enums;
mod forecast;
mod reading;
mod risk;

pub use anomaly::*;
pub use enums::*;
pub use forecast::*;
pub use reading::*;
pub use risk::*;
