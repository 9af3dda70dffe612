use grid_paths::{
    ComputationError, CounterConfig, DEFAULT_MAX_RECURSION_DEPTH, DomainError, GridPathsError, PathCounter, Strategy,
};

#[test]
fn builder_selects_strategy_and_depth() {
    let config = CounterConfig::builder()
        .strategy(Strategy::BruteForce)
        .max_recursion_depth(32usize)
        .build()
        .unwrap();
    assert_eq!(config.strategy, Strategy::BruteForce);
    assert_eq!(config.max_recursion_depth, 32);
}

#[test]
fn json_config_drives_the_counter() {
    let config = CounterConfig::from_json_str(r#"{"strategy":"closed-form","max_recursion_depth":16}"#).unwrap();
    let counter = PathCounter::new(config);
    assert_eq!(counter.count(40, 40).unwrap().value(), 27_217_014_869_199_032_015_600);
}

#[test]
fn recursion_limit_points_at_tabulated() {
    let config = CounterConfig::builder().max_recursion_depth(100usize).build().unwrap();
    let err = PathCounter::new(config).count(60, 60).unwrap_err();
    assert!(matches!(
        err.root(),
        GridPathsError::Computation(ComputationError::RecursionLimit { depth: 120, limit: 100 })
    ));
    assert!(err.to_string().contains("use the tabulated strategy"));

    let tabulated = PathCounter::new(CounterConfig::with_strategy(Strategy::Tabulated));
    assert!(tabulated.count(60, 60).is_ok());
}

#[test]
fn invalid_json_is_a_configuration_error() {
    let err = CounterConfig::from_json_str("not json").unwrap_err();
    assert!(matches!(err, DomainError::InvalidConfiguration { .. }));
    assert_eq!(CounterConfig::default().max_recursion_depth, DEFAULT_MAX_RECURSION_DEPTH);
}

#[test]
fn json_strategy_accepts_short_aliases() {
    let config = CounterConfig::from_json_str(r#"{"strategy":"memo"}"#).unwrap();
    assert_eq!(config.strategy, Strategy::Memoized);
    let config = CounterConfig::from_json_str(r#"{"strategy":"table"}"#).unwrap();
    assert_eq!(config.strategy, Strategy::Tabulated);
}
