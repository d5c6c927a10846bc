//! Overlay of backend room records onto a generated grid.
//!
//! The room-browsing and layout-view screens fetch the building's rooms in
//! one call and its layout descriptor in another, then join them by slot
//! address. This module does that join: stored slots win, missing slots are
//! rebuilt from the room number, and rooms that cannot land on a room slot
//! are reported rather than dropped silently.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::descriptor::LayoutDescriptor;
use crate::grid::{generate_grid_shape, CellMarker};
use crate::slot::{derive_slot_from_room_number, parse_slot, SlotAddress};

/// A room as returned by the backend's rooms listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRecord {
    /// Canonical room number, e.g. `"3-B2"`.
    pub room_number: String,
    /// Slot address stored at creation time, if any. Older records omit it.
    #[serde(default)]
    pub layout_slot: Option<String>,
}

/// Why a room could not be placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnplacedReason {
    /// Neither the stored slot nor the room number yielded a slot address.
    NoSlot,
    /// The slot points outside the building's grid.
    OutOfBounds,
    /// The slot lands on a structural filler cell.
    EmptyCell,
    /// Another room already occupies the slot.
    DuplicateSlot,
}

impl UnplacedReason {
    pub fn describe(self) -> &'static str {
        match self {
            UnplacedReason::NoSlot => "no resolvable slot address",
            UnplacedReason::OutOfBounds => "slot outside the grid",
            UnplacedReason::EmptyCell => "slot is not a room cell",
            UnplacedReason::DuplicateSlot => "slot already occupied",
        }
    }
}

/// A room left off the grid, kept for operator follow-up.
#[derive(Debug, Clone)]
pub struct UnplacedRoom {
    pub room_number: String,
    pub reason: UnplacedReason,
}

/// Result of joining a room list against a building's grid.
///
/// `placed` maps each occupied slot to the index of the room in the input
/// slice; unmatched slots simply have no entry, which screens render as
/// vacant cells.
#[derive(Debug, Default)]
pub struct PlacementReport {
    pub placed: HashMap<SlotAddress, usize>,
    pub unplaced: Vec<UnplacedRoom>,
}

/// Resolve a room's slot address: a parseable stored slot wins, otherwise
/// the slot is derived from the room number. A stored slot that fails to
/// parse falls through to derivation rather than poisoning the room.
pub fn resolve_slot(room: &RoomRecord, floors: u32) -> Option<SlotAddress> {
    if let Some(stored) = room.layout_slot.as_deref() {
        if let Some(slot) = parse_slot(stored) {
            return Some(slot);
        }
    }
    derive_slot_from_room_number(&room.room_number, floors)
}

/// Place every room onto the building's grid.
///
/// Every floor shares one shape, so bounds and cell checks run against a
/// single generated floor.
pub fn place_rooms(desc: &LayoutDescriptor, rooms: &[RoomRecord]) -> PlacementReport {
    let shape = generate_grid_shape(desc);
    let height = shape.len() as u32;
    let width = shape.first().map_or(0, |row| row.len()) as u32;

    let mut report = PlacementReport::default();
    for (index, room) in rooms.iter().enumerate() {
        let Some(slot) = resolve_slot(room, desc.floors) else {
            report.unplaced.push(UnplacedRoom {
                room_number: room.room_number.clone(),
                reason: UnplacedReason::NoSlot,
            });
            continue;
        };

        if slot.floor_idx >= desc.floors || slot.row_idx >= height || slot.col_idx >= width {
            report.unplaced.push(UnplacedRoom {
                room_number: room.room_number.clone(),
                reason: UnplacedReason::OutOfBounds,
            });
            continue;
        }

        let cell = shape[slot.row_idx as usize][slot.col_idx as usize];
        if cell == CellMarker::Empty {
            report.unplaced.push(UnplacedRoom {
                room_number: room.room_number.clone(),
                reason: UnplacedReason::EmptyCell,
            });
            continue;
        }

        if report.placed.contains_key(&slot) {
            report.unplaced.push(UnplacedRoom {
                room_number: room.room_number.clone(),
                reason: UnplacedReason::DuplicateSlot,
            });
            continue;
        }
        report.placed.insert(slot, index);
    }
    report
}
