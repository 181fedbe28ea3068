//! `atc-monitor`: speed-envelope checks and Airspace Violation Notices.
//!
//! # Crate layout
//!
//! | Module      | Contents                                  |
//! |-------------|-------------------------------------------|
//! | [`avn`]     | `Avn`, `AvnLedger` (owns the id counter)  |
//! | [`monitor`] | `ViolationMonitor`                        |
//! | [`error`]   | `MonitorError`, `MonitorResult<T>`        |
//!
//! The monitor runs once per tick after every phase change has been applied.
//! An aircraft is in breach when its speed is outside its phase envelope or
//! its violation flag is set; each breaching aircraft gets exactly one AVN
//! per tick and its flag is cleared.  Repeat offenses in later ticks get
//! their own AVNs.

pub mod avn;
pub mod error;
pub mod monitor;


pub use avn::{Avn, AvnLedger};
pub use error::{MonitorError, MonitorResult};
pub use monitor::ViolationMonitor;
