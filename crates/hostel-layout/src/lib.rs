//! Pure hostel layout logic.
//!
//! This crate contains the layout/grid subsystem of the hostel management
//! system, independent of any backend, HTTP client, or UI framework.
//! Functions take plain data and return results, making them unit-testable
//! and portable across the mobile front-end, native admin tools, and any
//! future rendering surface.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`descriptor`] | Building shape descriptor (topology, side counts) and validation |
//! | [`grid`] | Descriptor → per-floor 2D grid of cell markers |
//! | [`slot`] | Slot address codec, letter indexing, room-number derivation |
//! | [`placement`] | Overlay of backend room records onto a generated grid |

pub mod descriptor;
pub mod grid;
pub mod placement;
pub mod slot;
