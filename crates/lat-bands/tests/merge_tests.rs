//! End-to-end tests: grid specification strings to merged latitude bands.

use grid_common::{Area, GridFactory};
use lat_bands::{grid_boundaries, merge_boundaries, GridError, Midpoint, Origin};
use test_utils::fixtures::{area, grid};
use test_utils::{assert_approx_eq, assert_non_increasing};

fn boundaries(spec: &str, area: Area, origin: Origin) -> Vec<Midpoint> {
    let g = GridFactory::build(spec, area).unwrap();
    grid_boundaries(&g, origin).unwrap()
}

fn europe() -> Area {
    let (n, w, s, e) = area::EUROPE;
    Area::new(n, w, s, e).unwrap()
}

// ============================================================================
// Boundary builder
// ============================================================================

#[test]
fn test_boundary_count_and_extremes() {
    for (spec, a) in [
        (grid::F1, Area::global()),
        (grid::O6, Area::global()),
        (grid::O12, Area::global()),
        (grid::F4, Area::global()),
        (grid::LL36X19, Area::global()),
        ("LL10x7", europe()),
    ] {
        let g = GridFactory::build(spec, a).unwrap();
        let edges = grid_boundaries(&g, Origin::Target).unwrap();

        assert_eq!(edges.len(), g.row_count() + 1, "{}", spec);
        assert_eq!(edges[0].latitude, a.north(), "{}", spec);
        assert_eq!(edges[edges.len() - 1].latitude, a.south(), "{}", spec);
        assert!(edges.iter().all(|m| m.origin == Origin::Target));
        assert_non_increasing!(edges.iter().map(|m| m.latitude).collect::<Vec<f64>>());
    }
}

#[test]
fn test_gaussian_edges_are_evenly_spaced() {
    let edges = boundaries(grid::O6, Area::global(), Origin::Source);
    for (k, edge) in edges.iter().enumerate() {
        assert_approx_eq!(edge.latitude, 90.0 - 15.0 * k as f64, 1e-9);
    }
}

#[test]
fn test_lonlat_edges_halfway_between_rows() {
    let edges = boundaries(grid::LL36X19, Area::global(), Origin::Source);
    assert_eq!(edges[0].latitude, 90.0);
    assert_approx_eq!(edges[1].latitude, 85.0, 1e-9);
    assert_approx_eq!(edges[18].latitude, -85.0, 1e-9);
    assert_eq!(edges[19].latitude, -90.0);
}

#[test]
fn test_single_row_grid_is_degenerate() {
    let g = GridFactory::build(grid::LL8X1, europe()).unwrap();
    let result = grid_boundaries(&g, Origin::Source);
    assert!(matches!(result, Err(GridError::DegenerateGrid(_))));
}

// ============================================================================
// Merger
// ============================================================================

#[test]
fn test_merge_default_tool_grids() {
    let source = boundaries(grid::O12, Area::global(), Origin::Source);
    let target = boundaries(grid::O6, Area::global(), Origin::Target);
    let merged = merge_boundaries(&source, &target).unwrap();

    assert_eq!(merged.len(), 25 + 13);
    assert_eq!(merged.count(Origin::Source), 25);
    assert_eq!(merged.count(Origin::Target), 13);
    assert_non_increasing!(merged.latitudes());

    // Every O6 edge coincides with an O12 edge; the source copy comes first.
    for pair in merged.points().windows(2) {
        if pair[0].latitude == pair[1].latitude {
            assert_eq!(pair[0].origin, Origin::Source);
            assert_eq!(pair[1].origin, Origin::Target);
        }
    }
}

#[test]
fn test_merge_preserves_each_input_order() {
    let source = boundaries("LL4x5", Area::global(), Origin::Source);
    let target = boundaries(grid::F4, Area::global(), Origin::Target);
    let merged = merge_boundaries(&source, &target).unwrap();

    let back_source: Vec<Midpoint> = merged
        .iter()
        .filter(|m| m.origin == Origin::Source)
        .copied()
        .collect();
    let back_target: Vec<Midpoint> = merged
        .iter()
        .filter(|m| m.origin == Origin::Target)
        .copied()
        .collect();
    assert_eq!(back_source, source);
    assert_eq!(back_target, target);
}

#[test]
fn test_shared_poles_put_source_first() {
    let a = boundaries(grid::F1, Area::global(), Origin::Source);
    let b = boundaries(grid::F4, Area::global(), Origin::Target);
    let merged = merge_boundaries(&a, &b).unwrap();

    let first_two: Vec<String> = merged.points()[..2].iter().map(|m| m.to_string()).collect();
    assert_eq!(first_two, vec!["90/0", "90/1"]);
    let last_two: Vec<String> = merged.points()[merged.len() - 2..]
        .iter()
        .map(|m| m.to_string())
        .collect();
    assert_eq!(last_two, vec!["-90/0", "-90/1"]);
}

#[test]
fn test_merge_regional_inside_global() {
    let source = boundaries(grid::F1, Area::global(), Origin::Source);
    let target = boundaries("LL10x7", europe(), Origin::Target);
    let merged = merge_boundaries(&source, &target).unwrap();

    assert_eq!(merged.len(), 3 + 8);
    assert_non_increasing!(merged.latitudes());
    assert_eq!(merged.points()[0], Midpoint::new(90.0, Origin::Source));
    assert_eq!(merged.points()[1], Midpoint::new(72.0, Origin::Target));
}

// ============================================================================
// Bands
// ============================================================================

#[test]
fn test_bands_cover_both_grids() {
    let source = boundaries(grid::F1, Area::global(), Origin::Source);
    let target = boundaries(grid::O6, Area::global(), Origin::Target);
    let bands = merge_boundaries(&source, &target).unwrap().bands();

    // O6 edges every 15 degrees; F1 adds nothing new (0 is shared).
    assert_eq!(bands.len(), 12);
    assert!(bands.iter().all(|b| b.source_row.is_some() && b.target_row.is_some()));
    assert_eq!(bands[5].source_row, Some(0));
    assert_eq!(bands[6].source_row, Some(1));
    for (k, band) in bands.iter().enumerate() {
        assert_eq!(band.target_row, Some(k));
        assert_approx_eq!(band.height(), 15.0, 1e-9);
    }

    let total: f64 = bands.iter().map(|b| b.height()).sum();
    assert_approx_eq!(total, 180.0, 1e-9);
}

#[test]
fn test_bands_serialize() {
    let source = boundaries(grid::F1, Area::global(), Origin::Source);
    let target = boundaries(grid::F1, Area::global(), Origin::Target);
    let merged = merge_boundaries(&source, &target).unwrap();

    let json = serde_json::to_value(&merged).unwrap();
    assert_eq!(json[0]["latitude"], 90.0);
    assert_eq!(json[0]["origin"], "source");
    assert_eq!(json[1]["origin"], "target");

    let bands = serde_json::to_value(merged.bands()).unwrap();
    assert_eq!(bands.as_array().unwrap().len(), 2);
    assert_eq!(bands[1]["source_row"], 1);
}
