//! `atc-schedule`: priority-ordered admission queues.
//!
//! # Crate layout
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`queue`]   | `AdmissionQueues`, `QueueEntry`, `ServiceOrder`   |
//!
//! # Ordering model (summary)
//!
//! Each tick, every aircraft in `Awaiting` whose scheduled tick has arrived
//! is placed in the arrival or departure queue according to its direction.
//! Both queues are stably sorted by:
//!
//! ```text
//! key = (priority class, scheduled tick)    // Emergency first, then FCFS
//! ```
//!
//! Ties keep ascending `AircraftId` order.  The queues are a derived view
//! rebuilt from the fleet every tick; they never hold aircraft state.
//!
//! Both queues compete for the flexible runway, so admission walks them
//! together through a [`ServiceOrder`]: the lower head key goes first, and a
//! blocked head stops only its own queue.

pub mod queue;

#[cfg(test)]
mod tests;

pub use queue::{AdmissionQueues, QueueEntry, ServiceOrder};
