//! Core systems for lanekit.
//!
//! This crate provides the change-notification foundation the lanekit
//! model crates are built on:
//!
//! - **Signal/Slot System**: Type-safe observer connections with direct,
//!   synchronous dispatch
//!
//! # Signal/Slot Example
//!
//! ```
//! use lanekit_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
