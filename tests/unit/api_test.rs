use grid_paths::{Axis, DomainError, GridPathsError, Strategy};

use crate::common::{KNOWN_COUNTS, counter, init_logging};

#[test]
fn facade_counts_known_grids() {
    init_logging();
    for &(rows, cols, expected) in KNOWN_COUNTS {
        assert_eq!(grid_paths::count(rows, cols).unwrap().value(), expected, "{rows}x{cols}");
    }
}

#[test]
fn every_strategy_matches_fixtures() {
    for strategy in Strategy::ALL {
        let counter = counter(strategy);
        for &(rows, cols, expected) in KNOWN_COUNTS {
            assert_eq!(counter.count(rows, cols).unwrap().value(), expected, "{strategy} {rows}x{cols}");
        }
    }
}

#[test]
fn signed_entry_point_rejects_negatives() {
    let err = grid_paths::count_signed(-3, 2).unwrap_err();
    assert!(matches!(
        err,
        GridPathsError::Domain(DomainError::NegativeDimension { axis: Axis::Rows, value: -3 })
    ));
    assert!(err.to_string().contains("must be non-negative"));

    assert_eq!(grid_paths::count_signed(3, 3).unwrap().value(), 6);
    assert_eq!(grid_paths::count_signed(0, 0).unwrap().value(), 0);
}

#[test]
fn calls_do_not_share_state() {
    let first = grid_paths::count(9, 7).unwrap();
    let _ = grid_paths::count(7, 9).unwrap();
    let _ = grid_paths::count(30, 2).unwrap();
    assert_eq!(grid_paths::count(9, 7).unwrap(), first);
}
