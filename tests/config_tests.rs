use std::path::PathBuf;

use cake_factory::cli::Cli;
use cake_factory::game::{Attribute, Batter, CakeOrder, ScriptedOrders, SessionDriver, Shape};
use cake_factory::{ConfigError, GameConfig};

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("cake-factory-{}-{}.json", name, std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_from_file() {
    let path = write_temp("load", r#"{ "points_per_match": 25, "reset_delay_ms": 500 }"#);
    let config = GameConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.points_per_match, 25);
    assert_eq!(config.reset_delay_secs(), 0.5);
    assert_eq!(config.session_seconds, 60);
}

#[test]
fn test_missing_file_is_read_error() {
    let path = std::env::temp_dir().join("cake-factory-does-not-exist.json");
    let err = GameConfig::load(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("cake-factory-does-not-exist.json"));
}

#[test]
fn test_bad_json_is_parse_error() {
    let err = GameConfig::from_json_str("{ session_seconds: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_zero_tick_rate_rejected() {
    let err = GameConfig::from_json_str(r#"{ "tick_hz": 0.0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "tick_hz", .. }));
}

// ============================================================================
// Command-line overrides
// ============================================================================

#[test]
fn test_flags_override_file() {
    let path = write_temp("override", r#"{ "session_seconds": 90, "seed": 1 }"#);
    let cli = Cli {
        config: Some(path.clone()),
        seed: Some(42),
        duration: None,
    };
    let config = GameConfig::from_cli(&cli).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.session_seconds, 90);
    assert_eq!(config.seed, Some(42));
}

#[test]
fn test_zero_duration_flag_rejected() {
    let cli = Cli {
        duration: Some(0),
        ..Cli::default()
    };
    assert!(matches!(
        GameConfig::from_cli(&cli),
        Err(ConfigError::Invalid { field: "session_seconds", .. })
    ));
}

// ============================================================================
// Config flowing into a session
// ============================================================================

#[test]
fn test_custom_rules_drive_session() {
    let config = GameConfig {
        session_seconds: 5,
        points_per_match: 3,
        lock_attributes_after_timeout: true,
        ..GameConfig::default()
    };
    let target = CakeOrder::with(Shape::Circle, Batter::Chocolate, None, None);
    let mut driver = SessionDriver::new(config, ScriptedOrders::new(vec![target]));

    driver.set_attribute(Attribute::Shape(Shape::Circle));
    driver.advance_stage();
    driver.set_attribute(Attribute::Batter(Batter::Chocolate));
    for _ in 0..3 {
        driver.advance_stage();
    }
    assert_eq!(driver.session().score(), 3);

    driver.update(5.0);
    assert!(driver.session().is_over());

    // Locked after timeout: edits are ignored
    driver.set_attribute(Attribute::Shape(Shape::Heart));
    assert_eq!(driver.session().cake().shape, None);
}

#[test]
fn test_huge_points_value_never_lowers_score() {
    let config = GameConfig::from_json_str(r#"{ "points_per_match": 4294967295 }"#).unwrap();
    let target = CakeOrder::with(Shape::Square, Batter::Vanilla, None, None);
    let mut driver = SessionDriver::new(config, ScriptedOrders::new(vec![target]));

    for _ in 0..2 {
        driver.set_attribute(Attribute::Shape(Shape::Square));
        driver.advance_stage();
        driver.set_attribute(Attribute::Batter(Batter::Vanilla));
        for _ in 0..3 {
            driver.advance_stage();
        }
        driver.update(1.0);
    }

    assert_eq!(driver.session().score(), u32::MAX);
}
