use grid_paths::{CountReport, GridDims, PathCounter, Strategy};

use crate::common::counter;

#[test]
fn memoized_report_serializes_with_stats() {
    let report = PathCounter::default().count_with_report(2, 3).unwrap();
    assert_eq!(report.dims, GridDims::new(2, 3));
    assert_eq!(report.strategy, Strategy::Memoized);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["count"], 3);
    assert_eq!(json["strategy"], "memoized");
    assert_eq!(json["dims"]["rows"], 2);
    assert_eq!(json["memo"]["entries"], 5);
}

#[test]
fn non_memoized_report_omits_stats() {
    let report = counter(Strategy::BruteForce).count_with_report(3, 3).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(!json.contains("memo"));

    let decoded: CountReport = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, report);
}
