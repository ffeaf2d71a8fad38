use super::*;

#[test]
fn test_quality_tier_boundaries() {
    assert_eq!(MatchQuality::from_score(100), MatchQuality::Excellent);
    assert_eq!(MatchQuality::from_score(85), MatchQuality::Excellent);
    assert_eq!(MatchQuality::from_score(84), MatchQuality::Good);
    assert_eq!(MatchQuality::from_score(70), MatchQuality::Good);
    assert_eq!(MatchQuality::from_score(69), MatchQuality::Fair);
    assert_eq!(MatchQuality::from_score(50), MatchQuality::Fair);
    assert_eq!(MatchQuality::from_score(49), MatchQuality::Poor);
    assert_eq!(MatchQuality::from_score(0), MatchQuality::Poor);
}

#[test]
fn test_custom_quality_tiers_classify_independently() {
    let tiers = QualityTiers {
        excellent: 95,
        good: 80,
        fair: 60,
    };
    assert_eq!(tiers.classify(90), MatchQuality::Good);
    assert_eq!(tiers.classify(59), MatchQuality::Poor);
    assert_eq!(tiers.classify(95), MatchQuality::Excellent);
}

#[test]
fn test_quality_ordering_and_display() {
    assert!(MatchQuality::Excellent > MatchQuality::Good);
    assert!(MatchQuality::Fair > MatchQuality::Poor);
    assert_eq!(MatchQuality::Good.to_string(), "good");
    assert_eq!(
        serde_json::to_string(&MatchQuality::Excellent).unwrap(),
        "\"excellent\""
    );
}

#[test]
fn test_default_matching_config() {
    let config = MatchingConfig::default();
    assert_eq!(config.primary_weight, 0.6);
    assert_eq!(config.secondary_weight, 0.4);
    assert_eq!(config.threshold, DEFAULT_MATCH_THRESHOLD);
    assert!(config.use_fuzzy_matching);
    assert_eq!(config.quality_tiers, QualityTiers::default());
    assert!(config.validate().is_ok());
}

#[test]
fn test_matching_config_partial_json_uses_defaults() {
    let config: MatchingConfig =
        serde_json::from_str(r#"{"threshold": 75, "useFuzzyMatching": false}"#).unwrap();
    assert_eq!(config.threshold, 75);
    assert!(!config.use_fuzzy_matching);
    assert_eq!(config.primary_weight, 0.6);
    assert_eq!(config.quality_tiers.excellent, 85);
}

#[test]
fn test_validate_rejects_weights_not_summing_to_one() {
    let config = MatchingConfig {
        primary_weight: 0.8,
        secondary_weight: 0.4,
        ..MatchingConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(MatcherError::InvalidConfig(msg)) if msg.contains("sum to 1.0")
    ));
}

#[test]
fn test_validate_rejects_negative_or_nan_weights() {
    let negative = MatchingConfig {
        primary_weight: 1.2,
        secondary_weight: -0.2,
        ..MatchingConfig::default()
    };
    assert!(negative.validate().is_err());

    let nan = MatchingConfig {
        primary_weight: f64::NAN,
        ..MatchingConfig::default()
    };
    assert!(nan.validate().is_err());
}

#[test]
fn test_validate_rejects_unordered_tiers() {
    let config = MatchingConfig {
        quality_tiers: QualityTiers {
            excellent: 60,
            good: 70,
            fair: 50,
        },
        ..MatchingConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_match_result_wire_shape() {
    let result = MatchResult {
        score: 97,
        quality: MatchQuality::Excellent,
        is_match: true,
        breakdown: MatchBreakdown {
            primary_score: 96,
            secondary_score: 100,
            matching_attributes: vec![AvatarAttribute::SkinTone],
            partial_match_attributes: vec![AvatarAttribute::HairColor],
            non_matching_attributes: vec![],
        },
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["score"], 97);
    assert_eq!(json["quality"], "excellent");
    assert_eq!(json["isMatch"], true);
    assert_eq!(json["breakdown"]["primaryScore"], 96);
    assert_eq!(json["breakdown"]["matchingAttributes"][0], "skinTone");
    assert_eq!(json["breakdown"]["partialMatchAttributes"][0], "hairColor");
}
