//! Descriptor → 2D room grid.
//!
//! Expands a [`LayoutDescriptor`] into the rectangular grid of cell markers
//! that the room-browsing and layout-editing screens render. One grid is one
//! floor; every floor of a building reuses the same shape.
//!
//! # Grid geometry
//!
//! ```text
//!     T T T . .        width  = max(1, top, bottom, left, right)
//!     L . . . R        height = top row (if active)
//!     L . . . R                + max(left, right, 1) middle rows
//!     B B . . .                + bottom row (if active)
//! ```
//!
//! # Usage
//!
//! ```
//! use hostel_layout::descriptor::{BuildingType, LayoutDescriptor, Side};
//! use hostel_layout::grid::{generate_grid_shape, CellMarker};
//!
//! let desc = LayoutDescriptor {
//!     building_type: BuildingType::Single,
//!     floors: 1,
//!     top_rooms: 3,
//!     bottom_rooms: 0,
//!     left_rooms: 0,
//!     right_rooms: 0,
//!     open_side: None,
//!     orientation: None,
//!     entrance_side: Side::Top,
//! };
//! let grid = generate_grid_shape(&desc);
//! assert_eq!(grid[0], vec![CellMarker::Top; 3]);
//! ```

use serde::{Deserialize, Serialize};

use crate::descriptor::{LayoutDescriptor, Side};

/// Role of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CellMarker {
    /// Room slot on the named side of the footprint.
    Top,
    Bottom,
    Left,
    Right,
    /// Structural filler, no room.
    Empty,
}

impl CellMarker {
    /// Whether this cell can hold a room.
    pub fn is_room_slot(self) -> bool {
        self != CellMarker::Empty
    }

    /// The footprint side this marker belongs to, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            CellMarker::Top => Some(Side::Top),
            CellMarker::Bottom => Some(Side::Bottom),
            CellMarker::Left => Some(Side::Left),
            CellMarker::Right => Some(Side::Right),
            CellMarker::Empty => None,
        }
    }

    /// Wire string, matching the serde form.
    pub fn as_str(self) -> &'static str {
        match self {
            CellMarker::Top => "TOP",
            CellMarker::Bottom => "BOTTOM",
            CellMarker::Left => "LEFT",
            CellMarker::Right => "RIGHT",
            CellMarker::Empty => "EMPTY",
        }
    }
}

/// Grid width for a descriptor. Never zero.
pub fn grid_width(desc: &LayoutDescriptor) -> u32 {
    desc.top_rooms
        .max(desc.bottom_rooms)
        .max(desc.left_rooms)
        .max(desc.right_rooms)
        .max(1)
}

/// Grid height for a descriptor: optional top row, middle block, optional
/// bottom row. The middle block is never shorter than one row.
pub fn grid_height(desc: &LayoutDescriptor) -> u32 {
    let sides = desc.active_sides();
    let mut height = desc.left_rooms.max(desc.right_rooms).max(1);
    if sides.top {
        height += 1;
    }
    if sides.bottom {
        height += 1;
    }
    height
}

/// Generate one floor's grid of cell markers.
///
/// Rows run top to bottom, columns left to right. At width 1, column 0 and
/// the last column coincide; the left check runs first, so a single-column
/// building with both side wings active always marks `Left`, never `Right`.
/// Callers depend on this ordering — it mirrors the stored layouts in
/// production data.
pub fn generate_grid_shape(desc: &LayoutDescriptor) -> Vec<Vec<CellMarker>> {
    let sides = desc.active_sides();
    let width = grid_width(desc) as usize;
    let mut rows = Vec::new();

    if sides.top {
        rows.push(
            (0..width)
                .map(|col| {
                    if (col as u32) < desc.top_rooms {
                        CellMarker::Top
                    } else {
                        CellMarker::Empty
                    }
                })
                .collect(),
        );
    }

    let middle_rows = desc.left_rooms.max(desc.right_rooms).max(1);
    for row in 0..middle_rows {
        rows.push(
            (0..width)
                .map(|col| {
                    if col == 0 && sides.left && row < desc.left_rooms {
                        CellMarker::Left
                    } else if col == width - 1 && sides.right && row < desc.right_rooms {
                        CellMarker::Right
                    } else {
                        CellMarker::Empty
                    }
                })
                .collect(),
        );
    }

    if sides.bottom {
        rows.push(
            (0..width)
                .map(|col| {
                    if (col as u32) < desc.bottom_rooms {
                        CellMarker::Bottom
                    } else {
                        CellMarker::Empty
                    }
                })
                .collect(),
        );
    }

    rows
}

/// Generate grids for every floor of the building, floor index 0 first.
///
/// Floor index 0 is the topmost floor (highest floor number); see
/// [`crate::slot::derive_slot_from_room_number`] for the numbering.
pub fn generate_building(desc: &LayoutDescriptor) -> Vec<Vec<Vec<CellMarker>>> {
    (0..desc.floors).map(|_| generate_grid_shape(desc)).collect()
}
