//! Prelude module for lanekit.
//!
//! This module re-exports the most commonly used types for convenient
//! importing:
//!
//! ```
//! use lanekit::prelude::*;
//! ```

// ============================================================================
// Board Model
// ============================================================================

pub use crate::model::{
    BoardError, BoardModel, BoardOptions, Card, CardId, Lane, LaneId,
};

// ============================================================================
// Relocation Engine
// ============================================================================

pub use crate::model::{DropTarget, IgnoreReason, Relocation};

// ============================================================================
// Change Notification
// ============================================================================

pub use crate::model::{BoardSignals, CardMove};
pub use lanekit_core::{ConnectionGuard, ConnectionId, Signal};

// ============================================================================
// Drag Session
// ============================================================================

pub use crate::drag::{DragController, DragPhase};
