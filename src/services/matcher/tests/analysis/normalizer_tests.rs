use super::*;
use crate::services::matcher::catalog::default_value;
use crate::test_utils::sample_avatar;

// Covers: absent descriptor → all defaults
#[test]
fn test_normalize_none_yields_all_defaults() {
    let config = normalize(None);
    for attribute in AvatarAttribute::ALL {
        assert_eq!(config.get(attribute), default_value(attribute));
    }
}

#[test]
fn test_normalize_empty_equals_none() {
    assert_eq!(
        normalize(Some(&PartialAvatarConfiguration::new())),
        normalize(None)
    );
}

#[test]
fn test_normalize_keeps_supplied_values_verbatim() {
    let partial = PartialAvatarConfiguration::new()
        .with(AvatarAttribute::HairColor, "Black")
        .with(AvatarAttribute::TopColor, "not-a-colour");

    let config = normalize(Some(&partial));

    assert_eq!(config.get(AvatarAttribute::HairColor), "Black");
    assert_eq!(config.get(AvatarAttribute::TopColor), "not-a-colour");
    assert_eq!(
        config.get(AvatarAttribute::EyeColor),
        default_value(AvatarAttribute::EyeColor)
    );
}

// Covers: normalize(normalize(X)) == normalize(X)
#[test]
fn test_normalize_is_idempotent() {
    let inputs = vec![
        None,
        Some(PartialAvatarConfiguration::new()),
        Some(sample_avatar()),
        Some(PartialAvatarConfiguration::new().with(AvatarAttribute::HeadwearType, "hijab")),
    ];

    for input in inputs {
        let once = normalize(input.as_ref());
        let twice = normalize(Some(&once.to_partial()));
        assert_eq!(once, twice);
    }
}

#[test]
fn test_foreign_value_attributes_lists_unknown_tokens() {
    let partial = PartialAvatarConfiguration::new()
        .with(AvatarAttribute::HairColor, "chartreuse")
        .with(AvatarAttribute::EyeColor, "BLUE")
        .with(AvatarAttribute::GlassesType, "monocle");

    let foreign = foreign_value_attributes(&normalize(Some(&partial)));

    assert_eq!(
        foreign,
        vec![AvatarAttribute::HairColor, AvatarAttribute::GlassesType]
    );
    assert!(foreign_value_attributes(&normalize(None)).is_empty());
}
