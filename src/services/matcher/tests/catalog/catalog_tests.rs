use super::*;
use std::collections::HashSet;

// Covers: category partition is disjoint and complete
#[test]
fn test_primary_and_secondary_partition_the_catalog() {
    let primary = primary_attributes();
    let secondary = secondary_attributes();

    assert_eq!(primary.len(), 7);
    assert_eq!(secondary.len(), 12);
    assert_eq!(primary.len() + secondary.len(), AvatarAttribute::ALL.len());

    let primary_set: HashSet<_> = primary.iter().copied().collect();
    let secondary_set: HashSet<_> = secondary.iter().copied().collect();
    assert!(primary_set.is_disjoint(&secondary_set));

    let union: HashSet<_> = primary_set.union(&secondary_set).copied().collect();
    let all: HashSet<_> = AvatarAttribute::ALL.iter().copied().collect();
    assert_eq!(union, all);
}

#[test]
fn test_primary_attributes_are_identity_defining() {
    assert_eq!(
        primary_attributes(),
        vec![
            AvatarAttribute::SkinTone,
            AvatarAttribute::HairColor,
            AvatarAttribute::HairStyle,
            AvatarAttribute::FaceShape,
            AvatarAttribute::EyeShape,
            AvatarAttribute::EyeColor,
            AvatarAttribute::BodyShape,
        ]
    );
}

// Covers: every attribute has a legal default
#[test]
fn test_every_default_is_a_legal_value() {
    for attribute in AvatarAttribute::ALL {
        let default = default_value(attribute);
        assert!(
            is_legal_value(attribute, default),
            "default '{default}' for {attribute} is not in its enumeration"
        );
    }
}

#[test]
fn test_legal_values_have_no_duplicates() {
    for attribute in AvatarAttribute::ALL {
        let values = legal_values(attribute);
        let unique: HashSet<_> = values.iter().collect();
        assert_eq!(unique.len(), values.len(), "duplicate token in {attribute}");
    }
}

#[test]
fn test_hair_color_enumeration_matches_catalog() {
    assert_eq!(
        legal_values(AvatarAttribute::HairColor),
        &[
            "black",
            "darkBrown",
            "brown",
            "lightBrown",
            "auburn",
            "red",
            "strawberry",
            "blonde",
            "platinum",
            "gray",
            "white",
            "blue",
            "purple",
            "pink",
            "green",
        ]
    );
}

// Covers: similarity groups only reference legal values and are disjoint per attribute
#[test]
fn test_similarity_groups_reference_legal_disjoint_values() {
    for attribute in AvatarAttribute::ALL {
        let Some(groups) = similarity_groups(attribute) else {
            continue;
        };

        let mut seen = HashSet::new();
        for group in groups {
            assert!(group.len() >= 2, "singleton group in {attribute}");
            for value in *group {
                assert!(
                    is_legal_value(attribute, value),
                    "group value '{value}' is not legal for {attribute}"
                );
                assert!(seen.insert(*value), "'{value}' in two groups of {attribute}");
            }
        }
    }
}

#[test]
fn test_are_related_is_scoped_to_attribute() {
    // darkBrown/black share a hair colour group...
    assert!(are_related(AvatarAttribute::HairColor, "darkBrown", "black"));
    assert!(are_related(AvatarAttribute::HairColor, "BLACK", "darkbrown"));
    // ...but skin tone groups darkBrown with brown/deep, not black.
    assert!(!are_related(AvatarAttribute::SkinTone, "darkBrown", "black"));
    assert!(are_related(AvatarAttribute::SkinTone, "darkBrown", "deep"));
}

#[test]
fn test_attribute_without_groups_is_never_related() {
    assert!(similarity_groups(AvatarAttribute::NoseShape).is_none());
    assert!(!are_related(AvatarAttribute::NoseShape, "small", "button"));
}

#[test]
fn test_attribute_key_round_trips_through_from_str() {
    for attribute in AvatarAttribute::ALL {
        let parsed: AvatarAttribute = attribute.key().parse().expect("parse key");
        assert_eq!(parsed, attribute);
    }
    assert_eq!(
        "HAIRCOLOR".parse::<AvatarAttribute>().unwrap(),
        AvatarAttribute::HairColor
    );
    assert!(matches!(
        "tattoos".parse::<AvatarAttribute>(),
        Err(MatcherError::UnknownAttribute(name)) if name == "tattoos"
    ));
}

#[test]
fn test_attribute_serializes_as_camel_case_key() {
    let json = serde_json::to_string(&AvatarAttribute::FacialHairColor).unwrap();
    assert_eq!(json, "\"facialHairColor\"");
    assert_eq!(AvatarAttribute::FacialHairColor.to_string(), "facialHairColor");
}

#[test]
fn test_default_configuration_uses_catalog_defaults() {
    let config = default_configuration();
    for attribute in AvatarAttribute::ALL {
        assert_eq!(config.get(attribute), default_value(attribute));
    }
}

// Covers: strict validation rejects foreign tokens
#[test]
fn test_validate_configuration_rejects_foreign_token() {
    let valid = PartialAvatarConfiguration::new()
        .with(AvatarAttribute::HairColor, "Auburn")
        .with(AvatarAttribute::TopType, "hoodie");
    assert!(validate_configuration(&valid).is_ok());

    let invalid = valid.with(AvatarAttribute::EyeColor, "violet");
    match validate_configuration(&invalid) {
        Err(MatcherError::InvalidValue { attribute, value }) => {
            assert_eq!(attribute, "eyeColor");
            assert_eq!(value, "violet");
        }
        other => panic!("Expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn test_validate_empty_configuration_is_ok() {
    assert!(validate_configuration(&PartialAvatarConfiguration::new()).is_ok());
}
