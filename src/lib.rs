//! Coach application intake: the state-and-validation core of the
//! eight-step coach application wizard, plus the HTTP surface that accepts
//! fully assembled records.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod wizard;
