//! Slot addresses and room-number derivation.
//!
//! A slot address pins one cell in one floor's grid: `"{floor}-{row}-{col}"`,
//! all 0-based. Rooms created through the admin screens store their slot
//! explicitly; older records only carry the human-facing room number
//! (`"3-B2"` = floor 3, row B, column 2), so the slot has to be rebuilt from
//! it. Row letters use spreadsheet-style bijective base-26 (A..Z, AA..).
//!
//! # Usage
//!
//! ```
//! use hostel_layout::slot::{derive_slot_from_room_number, SlotAddress};
//!
//! let slot = derive_slot_from_room_number("3-B2", 5).unwrap();
//! assert_eq!(slot, SlotAddress { floor_idx: 2, row_idx: 1, col_idx: 1 });
//! assert_eq!(slot.to_string(), "2-1-1");
//! ```

use std::fmt;

/// Address of one cell in one floor's grid. All indices 0-based; floor
/// index 0 is the topmost floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotAddress {
    pub floor_idx: u32,
    pub row_idx: u32,
    pub col_idx: u32,
}

impl fmt::Display for SlotAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.floor_idx, self.row_idx, self.col_idx)
    }
}

/// Spreadsheet-style letter label for a row index: 0→"A", 25→"Z", 26→"AA".
///
/// This is the bijective base-26 numeral system, not plain base-26: there is
/// no zero digit, so "Z" rolls over to "AA" rather than "BA".
pub fn index_to_letters(index: u32) -> String {
    let mut n = i64::from(index);
    let mut letters = String::new();
    while n >= 0 {
        letters.insert(0, (b'A' + (n % 26) as u8) as char);
        n = n / 26 - 1;
    }
    letters
}

/// Inverse of [`index_to_letters`]. Case-insensitive.
///
/// `None` for the empty string, non-alphabetic input, or labels too long to
/// index a `u32`.
pub fn letters_to_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    let mut acc: u64 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = (c.to_ascii_uppercase() as u64) - ('A' as u64) + 1;
        acc = acc.checked_mul(26)?.checked_add(digit)?;
    }
    u32::try_from(acc - 1).ok()
}

/// Parse a stored slot string. Exactly three hyphen-separated non-negative
/// integers, anything else is `None`.
pub fn parse_slot(slot: &str) -> Option<SlotAddress> {
    let mut parts = slot.split('-');
    let floor_idx = parts.next()?.parse().ok()?;
    let row_idx = parts.next()?.parse().ok()?;
    let col_idx = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(SlotAddress {
        floor_idx,
        row_idx,
        col_idx,
    })
}

/// Rebuild a slot address from a human-facing room number.
///
/// Room numbers look like `"{floorNumber}-{rowLetters}{colNumber}"` with
/// floor numbers 1-based from the ground and column numbers 1-based from the
/// left. The grid stores floors top-down, so floor index =
/// `floors - floor_number`. `None` for anything malformed or for a floor
/// number above the building's floor count.
pub fn derive_slot_from_room_number(room_number: &str, floors: u32) -> Option<SlotAddress> {
    let (floor_part, grid_part) = room_number.split_once('-')?;
    let floor_number: u32 = floor_part.parse().ok()?;

    let letter_len = grid_part
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .count();
    if letter_len == 0 {
        return None;
    }
    let (letters, digits) = grid_part.split_at(letter_len);
    let col_number: u32 = digits.parse().ok()?;

    let floor_idx = floors.checked_sub(floor_number)?;
    let row_idx = letters_to_index(letters)?;
    let col_idx = col_number.checked_sub(1)?;
    Some(SlotAddress {
        floor_idx,
        row_idx,
        col_idx,
    })
}

/// Canonical room number for a grid position — the forward direction of
/// [`derive_slot_from_room_number`]'s convention, used when the admin screen
/// places a new room on the grid.
pub fn format_room_number(floor_number: u32, row_idx: u32, col_idx: u32) -> String {
    format!(
        "{}-{}{}",
        floor_number,
        index_to_letters(row_idx),
        col_idx + 1
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_fixed_points() {
        assert_eq!(index_to_letters(0), "A");
        assert_eq!(index_to_letters(25), "Z");
        assert_eq!(index_to_letters(26), "AA");
        assert_eq!(index_to_letters(27), "AB");
        assert_eq!(index_to_letters(701), "ZZ");
        assert_eq!(index_to_letters(702), "AAA");
    }

    #[test]
    fn letters_round_trip() {
        for i in 0..=10_000 {
            let letters = index_to_letters(i);
            assert_eq!(
                letters_to_index(&letters),
                Some(i),
                "round trip failed at {} (\"{}\")",
                i,
                letters
            );
        }
    }

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(letters_to_index("b"), Some(1));
        assert_eq!(letters_to_index("aa"), Some(26));
        assert_eq!(letters_to_index("Ab"), Some(27));
    }

    #[test]
    fn bad_letters_are_rejected() {
        assert_eq!(letters_to_index(""), None);
        assert_eq!(letters_to_index("A1"), None);
        assert_eq!(letters_to_index("-"), None);
    }

    #[test]
    fn parse_slot_happy_path() {
        assert_eq!(
            parse_slot("2-1-1"),
            Some(SlotAddress {
                floor_idx: 2,
                row_idx: 1,
                col_idx: 1
            })
        );
        assert_eq!(
            parse_slot("0-0-0"),
            Some(SlotAddress {
                floor_idx: 0,
                row_idx: 0,
                col_idx: 0
            })
        );
    }

    #[test]
    fn parse_slot_rejects_malformed() {
        assert_eq!(parse_slot(""), None);
        assert_eq!(parse_slot("1-2"), None);
        assert_eq!(parse_slot("1-2-3-4"), None);
        assert_eq!(parse_slot("1-x-3"), None);
        assert_eq!(parse_slot("a-b-c"), None);
    }

    #[test]
    fn slot_display_matches_wire_format() {
        let slot = SlotAddress {
            floor_idx: 3,
            row_idx: 0,
            col_idx: 12,
        };
        assert_eq!(slot.to_string(), "3-0-12");
        assert_eq!(parse_slot(&slot.to_string()), Some(slot));
    }

    #[test]
    fn derive_known_room() {
        // floor 3 of 5 → index 2; row B → 1; column 2 → 1
        assert_eq!(
            derive_slot_from_room_number("3-B2", 5),
            Some(SlotAddress {
                floor_idx: 2,
                row_idx: 1,
                col_idx: 1
            })
        );
    }

    #[test]
    fn derive_multi_letter_row() {
        let slot = derive_slot_from_room_number("10-AC14", 12).unwrap();
        assert_eq!(slot.floor_idx, 2);
        assert_eq!(slot.row_idx, 28); // AC = 26 + 2
        assert_eq!(slot.col_idx, 13);
    }

    #[test]
    fn derive_rejects_malformed() {
        assert_eq!(derive_slot_from_room_number("", 5), None);
        assert_eq!(derive_slot_from_room_number("abc", 5), None); // no hyphen
        assert_eq!(derive_slot_from_room_number("3-2", 5), None); // no row letters
        assert_eq!(derive_slot_from_room_number("3-B", 5), None); // no column
        assert_eq!(derive_slot_from_room_number("x-B2", 5), None); // bad floor
        assert_eq!(derive_slot_from_room_number("3-B0", 5), None); // column 0
    }

    #[test]
    fn derive_rejects_floor_above_building() {
        // floor 6 of a 5-floor building would index to -1
        assert_eq!(derive_slot_from_room_number("6-A1", 5), None);
    }

    #[test]
    fn room_number_round_trips_through_derivation() {
        let floors = 8;
        for floor_number in 1..=floors {
            for row_idx in [0, 1, 25, 26] {
                for col_idx in [0, 5, 11] {
                    let number = format_room_number(floor_number, row_idx, col_idx);
                    let slot = derive_slot_from_room_number(&number, floors).unwrap();
                    assert_eq!(slot.floor_idx, floors - floor_number);
                    assert_eq!(slot.row_idx, row_idx);
                    assert_eq!(slot.col_idx, col_idx);
                }
            }
        }
    }
}
