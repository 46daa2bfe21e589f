use std::path::Path;

use chargejump::{ConfigError, GameConfig, JumpConfig, Simulation};

fn parse(s: &str) -> GameConfig {
    GameConfig::parse(s, Path::new("<test>")).expect("valid toml")
}

#[test]
fn shipped_default_config_matches_builtin_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/default.toml");
    let config = GameConfig::from_file(&path).unwrap();
    config.validate().unwrap();
    assert_eq!(config.jump_config().unwrap(), JumpConfig::default());
    assert_eq!(
        config.camera_config().unwrap(),
        GameConfig::default().camera_config().unwrap()
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let err = GameConfig::from_file(Path::new("does/not/exist.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = GameConfig::parse("[player\nwalk_speed = ", Path::new("bad.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn simulation_rejects_invalid_tuning() {
    let cases = [
        ("[player]\nmax_charge_time = 0.0", "charge"),
        ("[player]\njump_angle = [0.0, 0.0]", "angle"),
        ("[player]\nground_check_radius = -0.1", "radius"),
        ("[camera]\nsmooth_time = -1.0", "smooth"),
        ("[player]\nmass = 0.0", "mass"),
        ("[player]\nmax_jump_force = 1.0", "force"),
    ];
    for (toml, what) in cases {
        let result = Simulation::new(&parse(toml));
        let err = match result {
            Ok(_) => panic!("{what}: accepted"),
            Err(e) => e,
        };
        match what {
            "charge" => assert!(matches!(err, ConfigError::NonPositiveChargeTime(_))),
            "angle" => assert!(matches!(err, ConfigError::ZeroJumpAngle(..))),
            "radius" => assert!(matches!(err, ConfigError::NegativeRadius(_))),
            "smooth" => assert!(matches!(err, ConfigError::NegativeSmoothTime(_))),
            "force" => assert!(matches!(err, ConfigError::JumpForceBelowFloor { .. })),
            _ => assert!(matches!(err, ConfigError::NonPositiveMass(_))),
        }
    }
}

#[test]
fn custom_tuning_reaches_the_controller() {
    let config = parse("[player]\nwalk_speed = 5.0\nmax_jump_force = 20.0");
    let sim = Simulation::new(&config).unwrap();
    let jump = *sim.world().get::<&JumpConfig>(sim.player()).unwrap();
    assert_eq!(jump.walk_speed(), 5.0);
    assert_eq!(jump.max_jump_force(), 20.0);
}
