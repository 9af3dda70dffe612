// tests/common/fixtures.rs

/// `(rows, cols, paths)` triples checked against every strategy.
#[allow(dead_code)]
pub const KNOWN_COUNTS: &[(u32, u32, u128)] = &[
    (0, 0, 0),
    (0, 1, 0),
    (1, 0, 0),
    (1, 1, 1),
    (1, 5, 1),
    (2, 2, 2),
    (2, 3, 3),
    (3, 2, 3),
    (3, 3, 6),
    (4, 3, 10),
    (5, 5, 70),
    (10, 10, 48_620),
    (12, 9, 75_582),
];
