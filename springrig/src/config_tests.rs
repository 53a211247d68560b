use crate::config::RigConfig;
use crate::{Error, MatchStrategy, PartProfile, PartTag};

#[test]
fn default_config_round_trips_through_json() {
    let config = RigConfig::default();
    let text = config.to_json().unwrap();
    let restored = RigConfig::from_json(&text).unwrap();
    assert_eq!(restored, config);
}

#[test]
fn edited_config_survives_the_round_trip() {
    let mut config = RigConfig::default();
    config.strategy = MatchStrategy::NameOnly;
    let head = config.colliders.get_mut(&PartTag::Head).unwrap();
    head.set_count(3);
    head.offsets[2] = 0.05;
    head.radius_scales[2] = 0.9;
    config.chains.get_mut(&PartTag::Tail).unwrap().enabled = false;

    let restored = RigConfig::from_json(&config.to_json().unwrap()).unwrap();
    assert_eq!(restored, config);

    let head = &restored.colliders[&PartTag::Head];
    assert_eq!(head.count, 3);
    assert_eq!(head.offsets, vec![0.0, 0.0, 0.05]);
    assert_eq!(head.radius_scales, vec![1.0, 1.0, 0.9]);
}

#[test]
fn part_tags_serialize_as_lowercase_map_keys() {
    let mut config = RigConfig::default();
    config.colliders.clear();
    config.chains.clear();
    config.colliders.insert(PartTag::Head, PartProfile::new(0.1, 1));

    let text = config.to_json().unwrap();
    assert!(text.contains("\"head\""), "unexpected JSON: {text}");
    assert!(text.contains("\"hybrid\""), "unexpected JSON: {text}");
}

#[test]
fn malformed_json_is_reported() {
    let err = RigConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, Error::ConfigJson { .. }));
}

#[test]
fn profile_snapshot_matches_the_config_maps() {
    let config = RigConfig::default();
    let profile = config.profile();
    assert_eq!(profile.colliders, config.colliders);
    assert_eq!(profile.chains, config.chains);
}
