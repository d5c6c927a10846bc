//! Hostel building shape descriptors.
//!
//! A [`LayoutDescriptor`] is the compact description of one building's
//! footprint that the backend stores: a topology selector plus per-side
//! room counts. Which sides actually carry rooms depends on the topology
//! (see [`LayoutDescriptor::active_sides`]); counts for inactive sides are
//! carried on the wire but ignored by the grid generator.
//!
//! # Usage
//!
//! ```
//! use hostel_layout::descriptor::{BuildingType, LayoutDescriptor, Side};
//!
//! let desc = LayoutDescriptor {
//!     building_type: BuildingType::Square,
//!     floors: 3,
//!     top_rooms: 4,
//!     bottom_rooms: 4,
//!     left_rooms: 6,
//!     right_rooms: 6,
//!     open_side: None,
//!     orientation: None,
//!     entrance_side: Side::Bottom,
//! };
//! assert!(hostel_layout::descriptor::validate_descriptor(&desc).is_empty());
//! ```

use serde::{Deserialize, Serialize};

/// Building footprint topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildingType {
    /// A single wing of rooms (one row).
    #[serde(rename = "single")]
    Single,
    /// Rooms on all four sides around a courtyard.
    #[serde(rename = "square")]
    Square,
    /// Two adjacent sides, picked by [`Orientation`].
    #[serde(rename = "l")]
    LShape,
    /// Three sides; the open side is picked by `open_side`.
    #[serde(rename = "u")]
    UShape,
}

/// One side of the building footprint.
///
/// Used both for the U-shape's open gap and for the (cosmetic) entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "t")]
    Top,
    #[serde(rename = "b")]
    Bottom,
    #[serde(rename = "l")]
    Left,
    #[serde(rename = "r")]
    Right,
}

/// Which two adjacent sides form an L-shaped building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "tl")]
    TopLeft,
    #[serde(rename = "tr")]
    TopRight,
    #[serde(rename = "bl")]
    BottomLeft,
    #[serde(rename = "br")]
    BottomRight,
}

impl Orientation {
    /// The pair of sides this orientation activates.
    pub fn sides(self) -> (Side, Side) {
        match self {
            Orientation::TopLeft => (Side::Top, Side::Left),
            Orientation::TopRight => (Side::Top, Side::Right),
            Orientation::BottomLeft => (Side::Bottom, Side::Left),
            Orientation::BottomRight => (Side::Bottom, Side::Right),
        }
    }
}

/// One hostel building's shape, as stored by the backend.
///
/// Room counts are unsigned, so negative counts are unrepresentable rather
/// than undefined behavior. Floors are numbered 1..=floors, 1 = ground.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDescriptor {
    pub building_type: BuildingType,
    pub floors: u32,
    pub top_rooms: u32,
    pub bottom_rooms: u32,
    pub left_rooms: u32,
    pub right_rooms: u32,
    /// Open gap of a U-shaped building. Ignored for other topologies.
    #[serde(default)]
    pub open_side: Option<Side>,
    /// Active corner of an L-shaped building. Ignored for other topologies.
    #[serde(default)]
    pub orientation: Option<Orientation>,
    /// Display-only; the grid generator never reads this.
    pub entrance_side: Side,
}

/// Which sides of the footprint carry room slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl SideFlags {
    fn all() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
        }
    }

    fn set(&mut self, side: Side, active: bool) {
        match side {
            Side::Top => self.top = active,
            Side::Bottom => self.bottom = active,
            Side::Left => self.left = active,
            Side::Right => self.right = active,
        }
    }

    pub fn is_active(self, side: Side) -> bool {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

impl LayoutDescriptor {
    /// Resolve the topology into per-side active flags.
    ///
    /// An L-shape with no orientation activates nothing (all-empty grid);
    /// a U-shape with no open side behaves like a square. Both cases are
    /// flagged by [`validate_descriptor`] rather than guessed at here.
    pub fn active_sides(&self) -> SideFlags {
        let mut flags = SideFlags::default();
        match self.building_type {
            BuildingType::Single => flags.top = true,
            BuildingType::Square => flags = SideFlags::all(),
            BuildingType::LShape => {
                if let Some(orientation) = self.orientation {
                    let (a, b) = orientation.sides();
                    flags.set(a, true);
                    flags.set(b, true);
                }
            }
            BuildingType::UShape => {
                flags = SideFlags::all();
                if let Some(open) = self.open_side {
                    flags.set(open, false);
                }
            }
        }
        flags
    }

    /// Declared room count along one side, active or not.
    pub fn room_count(&self, side: Side) -> u32 {
        match side {
            Side::Top => self.top_rooms,
            Side::Bottom => self.bottom_rooms,
            Side::Left => self.left_rooms,
            Side::Right => self.right_rooms,
        }
    }
}

/// A descriptor validation finding.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub category: &'static str,
    pub severity: Severity,
    pub message: String,
}

/// Finding severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}

const ALL_SIDES: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Top => "top",
        Side::Bottom => "bottom",
        Side::Left => "left",
        Side::Right => "right",
    }
}

/// Check a descriptor at the boundary before handing it to the generator.
///
/// The generator itself is permissive (it produces a grid for anything the
/// type system admits); this surfaces the combinations that are almost
/// certainly data-entry mistakes.
pub fn validate_descriptor(desc: &LayoutDescriptor) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if desc.floors == 0 {
        errors.push(ValidationError {
            category: "floors",
            severity: Severity::Error,
            message: "building has zero floors".to_string(),
        });
    }

    match desc.building_type {
        BuildingType::LShape => {
            if desc.orientation.is_none() {
                errors.push(ValidationError {
                    category: "topology",
                    severity: Severity::Error,
                    message: "L-shaped building has no orientation; no side will carry rooms"
                        .to_string(),
                });
            }
        }
        BuildingType::UShape => {
            if desc.open_side.is_none() {
                errors.push(ValidationError {
                    category: "topology",
                    severity: Severity::Error,
                    message: "U-shaped building has no open side; it will render as a square"
                        .to_string(),
                });
            }
        }
        BuildingType::Single | BuildingType::Square => {}
    }

    if desc.orientation.is_some() && desc.building_type != BuildingType::LShape {
        errors.push(ValidationError {
            category: "topology",
            severity: Severity::Warning,
            message: "orientation is set but the building is not L-shaped; it is ignored"
                .to_string(),
        });
    }
    if desc.open_side.is_some() && desc.building_type != BuildingType::UShape {
        errors.push(ValidationError {
            category: "topology",
            severity: Severity::Warning,
            message: "openSide is set but the building is not U-shaped; it is ignored".to_string(),
        });
    }

    let active = desc.active_sides();
    for side in ALL_SIDES {
        let count = desc.room_count(side);
        if active.is_active(side) && count == 0 {
            errors.push(ValidationError {
                category: "side_counts",
                severity: Severity::Warning,
                message: format!("{} side is active but has zero rooms", side_name(side)),
            });
        }
        if !active.is_active(side) && count > 0 {
            errors.push(ValidationError {
                category: "side_counts",
                severity: Severity::Warning,
                message: format!(
                    "{} side is inactive but declares {} rooms; they will not appear",
                    side_name(side),
                    count
                ),
            });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(floors: u32) -> LayoutDescriptor {
        LayoutDescriptor {
            building_type: BuildingType::Square,
            floors,
            top_rooms: 2,
            bottom_rooms: 2,
            left_rooms: 3,
            right_rooms: 3,
            open_side: None,
            orientation: None,
            entrance_side: Side::Bottom,
        }
    }

    #[test]
    fn single_activates_only_top() {
        let mut desc = square(1);
        desc.building_type = BuildingType::Single;
        let flags = desc.active_sides();
        assert!(flags.top);
        assert!(!flags.bottom && !flags.left && !flags.right);
    }

    #[test]
    fn square_activates_all_sides() {
        assert_eq!(square(1).active_sides(), SideFlags::all());
    }

    #[test]
    fn l_shape_activates_orientation_pair() {
        let mut desc = square(1);
        desc.building_type = BuildingType::LShape;
        desc.orientation = Some(Orientation::BottomRight);
        let flags = desc.active_sides();
        assert!(flags.bottom && flags.right);
        assert!(!flags.top && !flags.left);
    }

    #[test]
    fn l_shape_without_orientation_activates_nothing() {
        let mut desc = square(1);
        desc.building_type = BuildingType::LShape;
        assert_eq!(desc.active_sides(), SideFlags::default());
    }

    #[test]
    fn u_shape_deactivates_open_side() {
        let mut desc = square(1);
        desc.building_type = BuildingType::UShape;
        desc.open_side = Some(Side::Left);
        let flags = desc.active_sides();
        assert!(!flags.left);
        assert!(flags.top && flags.bottom && flags.right);
    }

    #[test]
    fn valid_square_has_no_findings() {
        assert!(validate_descriptor(&square(3)).is_empty());
    }

    #[test]
    fn zero_floors_is_an_error() {
        let errs = validate_descriptor(&square(0));
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].severity, Severity::Error);
        assert_eq!(errs[0].category, "floors");
    }

    #[test]
    fn l_shape_without_orientation_is_an_error() {
        let mut desc = square(2);
        desc.building_type = BuildingType::LShape;
        desc.top_rooms = 0;
        desc.right_rooms = 0;
        let errs = validate_descriptor(&desc);
        assert!(errs
            .iter()
            .any(|e| e.category == "topology" && e.severity == Severity::Error));
    }

    #[test]
    fn stray_orientation_is_a_warning() {
        let mut desc = square(2);
        desc.orientation = Some(Orientation::TopLeft);
        let errs = validate_descriptor(&desc);
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].severity, Severity::Warning);
    }

    #[test]
    fn inactive_side_with_rooms_is_a_warning() {
        let mut desc = square(2);
        desc.building_type = BuildingType::Single;
        // bottom/left/right counts now point at inactive sides
        let errs = validate_descriptor(&desc);
        assert_eq!(errs.len(), 3);
        assert!(errs.iter().all(|e| e.severity == Severity::Warning));
        assert!(errs.iter().all(|e| e.category == "side_counts"));
    }

    #[test]
    fn wire_format_round_trips() {
        let json = r#"{
            "buildingType": "u",
            "floors": 4,
            "topRooms": 5,
            "bottomRooms": 5,
            "leftRooms": 3,
            "rightRooms": 3,
            "openSide": "b",
            "entranceSide": "t"
        }"#;
        let desc: LayoutDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(desc.building_type, BuildingType::UShape);
        assert_eq!(desc.open_side, Some(Side::Bottom));
        assert_eq!(desc.orientation, None);
        let back = serde_json::to_value(&desc).unwrap();
        assert_eq!(back["buildingType"], "u");
        assert_eq!(back["openSide"], "b");
    }
}
