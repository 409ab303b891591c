use super::*;
use crate::composition::intro::INTRO_BUMPER_ID;

#[test]
fn root_registers_intro_bumper() {
    let reg = root(BumperConfig::default()).unwrap();
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.ids().collect::<Vec<_>>(), [INTRO_BUMPER_ID]);
    let comp = reg.get(INTRO_BUMPER_ID).unwrap();
    assert_eq!(comp.spec().duration.0, 150);
    assert!(reg.get("Missing").is_none());
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut reg = Registry::new();
    assert!(reg.is_empty());
    reg.register(IntroBumper::new(BumperConfig::default()).unwrap())
        .unwrap();
    let err = reg
        .register(IntroBumper::new(BumperConfig::default()).unwrap())
        .unwrap_err();
    assert!(err.to_string().contains("already registered"));
    assert_eq!(reg.len(), 1);
}

#[test]
fn root_propagates_config_errors() {
    let config = BumperConfig {
        tagline: String::new(),
        ..BumperConfig::default()
    };
    assert!(root(config).is_err());
}

#[test]
fn debug_lists_ids() {
    let reg = root(BumperConfig::default()).unwrap();
    assert!(format!("{reg:?}").contains("IntroBumper"));
}

#[test]
fn root_at_retimes_registered_compositions() {
    let reg = root_at(BumperConfig::default(), Fps::new(24, 1).unwrap()).unwrap();
    let comp = reg.get(INTRO_BUMPER_ID).unwrap();
    assert_eq!(comp.spec().fps, Fps::new(24, 1).unwrap());
    assert_eq!(comp.spec().duration.0, 120);

    let native = root(BumperConfig::default()).unwrap();
    assert_eq!(
        native.get(INTRO_BUMPER_ID).unwrap().spec(),
        IntroBumper::new(BumperConfig::default()).unwrap().spec()
    );
}
