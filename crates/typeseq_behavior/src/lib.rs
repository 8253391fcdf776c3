//! Behaviors, timeouts, and a cooperative dispatch loop for typeseq.
//!
//! This crate provides:
//! - [`TimeoutDefinition`] - A deadline paired with a fallback handler
//! - [`Behavior`] - Message handlers keyed by canonical signature
//! - [`Dispatcher`] - A single-threaded mailbox consumer
//! - [`Clock`] - Time sources ([`SystemClock`], [`ManualClock`])
//! - [`DispatchConfig`] - Dispatch loop settings
//!
//! Handlers are closures and run on the dispatcher's thread, so nothing
//! here is `Send`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod behavior;
pub mod clock;
pub mod config;
pub mod dispatcher;
pub mod timeout;

pub use behavior::{Behavior, Handler, Message, canonical_signature};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::DispatchConfig;
pub use dispatcher::{DispatchStats, Dispatcher, Step};
pub use timeout::{GenericTimeoutDefinition, TimeoutDefinition, as_behavior, make_timeout};
