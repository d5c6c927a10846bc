//! Hostel Layout Validation Harness
//!
//! Validates the pure layout engine against the bundled sample-building
//! manifest. Runs entirely in-process — no backend, no networking, no
//! rendering.
//!
//! Usage:
//!   cargo run -p hostel-layout-check
//!   cargo run -p hostel-layout-check -- --verbose

use hostel_layout::descriptor::{validate_descriptor, LayoutDescriptor, Severity, Side};
use hostel_layout::grid::{generate_building, generate_grid_shape, grid_height, grid_width, CellMarker};
use hostel_layout::placement::{place_rooms, RoomRecord};
use hostel_layout::slot::{
    derive_slot_from_room_number, format_room_number, index_to_letters, letters_to_index,
    parse_slot,
};
use serde::Deserialize;

// ── Sample buildings (same JSON shape the backend serves) ───────────────
const MANIFEST_JSON: &str = include_str!("../../../data/sample_buildings.json");

#[derive(Debug, Deserialize)]
struct BuildingSpec {
    name: String,
    descriptor: LayoutDescriptor,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Hostel Layout Harness ===\n");

    let mut results = Vec::new();

    // 1. Sample building manifest
    results.extend(validate_manifest(verbose));

    // 2. Row-letter codec sweep
    results.extend(validate_letter_codec(verbose));

    // 3. Slot parsing and room-number derivation
    results.extend(validate_slot_codec(verbose));

    // 4. Room placement over every sample building
    results.extend(validate_placement(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn load_manifest(results: &mut Vec<TestResult>) -> Vec<BuildingSpec> {
    match serde_json::from_str::<Vec<BuildingSpec>>(MANIFEST_JSON) {
        Ok(m) => m,
        Err(e) => {
            results.push(TestResult {
                name: "manifest_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            Vec::new()
        }
    }
}

// ── 1. Sample building manifest ─────────────────────────────────────────

fn validate_manifest(verbose: bool) -> Vec<TestResult> {
    println!("--- Sample Buildings ---");
    let mut results = Vec::new();
    let manifest = load_manifest(&mut results);
    if manifest.is_empty() {
        return results;
    }

    results.push(TestResult {
        name: "manifest_not_empty".into(),
        passed: !manifest.is_empty(),
        detail: format!("{} buildings", manifest.len()),
    });

    for building in &manifest {
        let desc = &building.descriptor;
        let findings = validate_descriptor(desc);
        let errors: Vec<_> = findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .collect();
        results.push(TestResult {
            name: format!("{}_descriptor_valid", building.name),
            passed: errors.is_empty(),
            detail: if errors.is_empty() {
                format!("{} warnings", findings.len())
            } else {
                errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; ")
            },
        });

        let grid = generate_grid_shape(desc);
        let dims_ok = grid.len() as u32 == grid_height(desc)
            && grid.iter().all(|row| row.len() as u32 == grid_width(desc));
        results.push(TestResult {
            name: format!("{}_grid_dimensions", building.name),
            passed: dims_ok,
            detail: format!(
                "{} rows × {} cols",
                grid_height(desc),
                grid_width(desc)
            ),
        });

        // Marker counts per side match the descriptor (width always covers
        // the top/bottom counts, so no clamping is needed here).
        let active = desc.active_sides();
        let count = |marker: CellMarker| grid.iter().flatten().filter(|c| **c == marker).count();
        let expect = |side: Side| {
            if active.is_active(side) {
                desc.room_count(side) as usize
            } else {
                0
            }
        };
        let counts_ok = count(CellMarker::Top) == expect(Side::Top)
            && count(CellMarker::Bottom) == expect(Side::Bottom)
            && count(CellMarker::Left) == expect(Side::Left)
            && count(CellMarker::Right) == expect(Side::Right);
        results.push(TestResult {
            name: format!("{}_marker_counts", building.name),
            passed: counts_ok,
            detail: format!(
                "T{} B{} L{} R{}",
                count(CellMarker::Top),
                count(CellMarker::Bottom),
                count(CellMarker::Left),
                count(CellMarker::Right)
            ),
        });

        let floors = generate_building(desc);
        results.push(TestResult {
            name: format!("{}_floors_identical", building.name),
            passed: floors.len() as u32 == desc.floors
                && floors.iter().all(|f| *f == floors[0]),
            detail: format!("{} floors share one shape", floors.len()),
        });

        if verbose {
            for row in &grid {
                let line: String = row
                    .iter()
                    .map(|c| c.as_str().chars().next().unwrap_or('?'))
                    .collect();
                println!("    {}", line);
            }
        }
    }

    results
}

// ── 2. Row-letter codec ─────────────────────────────────────────────────

fn validate_letter_codec(_verbose: bool) -> Vec<TestResult> {
    println!("--- Row-Letter Codec ---");
    let mut results = Vec::new();

    let fixed = [
        (0, "A"),
        (25, "Z"),
        (26, "AA"),
        (701, "ZZ"),
        (702, "AAA"),
    ];
    let fixed_ok = fixed.iter().all(|(i, s)| index_to_letters(*i) == *s);
    results.push(TestResult {
        name: "letter_fixed_points".into(),
        passed: fixed_ok,
        detail: "A Z AA ZZ AAA".into(),
    });

    let mut round_trip_ok = true;
    let mut first_failure = 0;
    for i in 0..=10_000u32 {
        if letters_to_index(&index_to_letters(i)) != Some(i) {
            round_trip_ok = false;
            first_failure = i;
            break;
        }
    }
    results.push(TestResult {
        name: "letter_round_trip".into(),
        passed: round_trip_ok,
        detail: if round_trip_ok {
            "0..=10000".into()
        } else {
            format!("first failure at {}", first_failure)
        },
    });

    results
}

// ── 3. Slot parsing & room-number derivation ────────────────────────────

fn validate_slot_codec(_verbose: bool) -> Vec<TestResult> {
    println!("--- Slot Codec ---");
    let mut results = Vec::new();

    let derived = derive_slot_from_room_number("3-B2", 5);
    results.push(TestResult {
        name: "derive_known_room".into(),
        passed: derived.map(|s| s.to_string()) == Some("2-1-1".into()),
        detail: format!("3-B2 of 5 floors → {:?}", derived.map(|s| s.to_string())),
    });

    let rejects = ["", "abc", "3-2", "3-B", "x-B2", "6-A1"];
    let rejected = rejects
        .iter()
        .filter(|r| derive_slot_from_room_number(r, 5).is_none())
        .count();
    results.push(TestResult {
        name: "derive_rejects_malformed".into(),
        passed: rejected == rejects.len(),
        detail: format!("{}/{} rejected", rejected, rejects.len()),
    });

    let parse_ok = parse_slot("2-1-1").is_some()
        && parse_slot("1-2").is_none()
        && parse_slot("1-2-3-4").is_none()
        && parse_slot("a-b-c").is_none();
    results.push(TestResult {
        name: "parse_slot_shape".into(),
        passed: parse_ok,
        detail: "three integer fields only".into(),
    });

    // Forward and inverse directions agree for a sweep of positions
    let mut agree = true;
    'outer: for floor_number in 1..=6u32 {
        for row_idx in [0u32, 1, 25, 26, 700] {
            for col_idx in [0u32, 9, 27] {
                let number = format_room_number(floor_number, row_idx, col_idx);
                let slot = derive_slot_from_room_number(&number, 6);
                let expected = format!("{}-{}-{}", 6 - floor_number, row_idx, col_idx);
                if slot.map(|s| s.to_string()) != Some(expected) {
                    agree = false;
                    break 'outer;
                }
            }
        }
    }
    results.push(TestResult {
        name: "derive_inverts_format".into(),
        passed: agree,
        detail: "format_room_number → derive_slot_from_room_number".into(),
    });

    results
}

// ── 4. Placement sweep ──────────────────────────────────────────────────

fn validate_placement(_verbose: bool) -> Vec<TestResult> {
    println!("--- Placement ---");
    let mut results = Vec::new();
    let manifest = load_manifest(&mut results);

    for building in &manifest {
        let desc = &building.descriptor;
        let shape = generate_grid_shape(desc);

        // Number every room cell the way the admin screen would
        let mut rooms = Vec::new();
        for floor_number in 1..=desc.floors {
            for (row_idx, row) in shape.iter().enumerate() {
                for (col_idx, cell) in row.iter().enumerate() {
                    if cell.is_room_slot() {
                        rooms.push(RoomRecord {
                            room_number: format_room_number(
                                floor_number,
                                row_idx as u32,
                                col_idx as u32,
                            ),
                            layout_slot: None,
                        });
                    }
                }
            }
        }

        let report = place_rooms(desc, &rooms);
        results.push(TestResult {
            name: format!("{}_full_placement", building.name),
            passed: report.unplaced.is_empty() && report.placed.len() == rooms.len(),
            detail: format!(
                "{} rooms placed, {} unplaced",
                report.placed.len(),
                report.unplaced.len()
            ),
        });
    }

    // Junk rooms must be reported, not dropped
    if let Some(building) = manifest.first() {
        let junk = vec![
            RoomRecord {
                room_number: "not a room".into(),
                layout_slot: None,
            },
            RoomRecord {
                room_number: "1-A1".into(),
                layout_slot: Some("99-99-99".into()),
            },
        ];
        let report = place_rooms(&building.descriptor, &junk);
        results.push(TestResult {
            name: "junk_rooms_reported".into(),
            passed: report.unplaced.len() == 2,
            detail: report
                .unplaced
                .iter()
                .map(|u| u.reason.describe())
                .collect::<Vec<_>>()
                .join(", "),
        });
    }

    results
}
