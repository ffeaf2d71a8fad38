//! Closed set of avatar attributes and their primary/secondary partition.

use serde::{Deserialize, Serialize};

use crate::types::errors::MatcherError;

/// A single describable avatar attribute.
///
/// Declaration order is the catalog order: it drives iteration in
/// `AvatarConfiguration` and the order of attribute lists in a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AvatarAttribute {
    SkinTone,
    HairColor,
    HairStyle,
    FacialHair,
    FacialHairColor,
    FaceShape,
    EyeShape,
    EyeColor,
    EyebrowStyle,
    NoseShape,
    MouthExpression,
    BodyShape,
    HeightCategory,
    TopType,
    TopColor,
    BottomType,
    BottomColor,
    GlassesType,
    HeadwearType,
}

/// Discriminative weight class of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeCategory {
    /// Identity-defining: skin, hair, face, eyes, body.
    Primary,
    /// Clothing, accessories, expression and the remaining features.
    Secondary,
}

impl AvatarAttribute {
    pub const ALL: [AvatarAttribute; 19] = [
        AvatarAttribute::SkinTone,
        AvatarAttribute::HairColor,
        AvatarAttribute::HairStyle,
        AvatarAttribute::FacialHair,
        AvatarAttribute::FacialHairColor,
        AvatarAttribute::FaceShape,
        AvatarAttribute::EyeShape,
        AvatarAttribute::EyeColor,
        AvatarAttribute::EyebrowStyle,
        AvatarAttribute::NoseShape,
        AvatarAttribute::MouthExpression,
        AvatarAttribute::BodyShape,
        AvatarAttribute::HeightCategory,
        AvatarAttribute::TopType,
        AvatarAttribute::TopColor,
        AvatarAttribute::BottomType,
        AvatarAttribute::BottomColor,
        AvatarAttribute::GlassesType,
        AvatarAttribute::HeadwearType,
    ];

    /// Wire token, identical to the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            AvatarAttribute::SkinTone => "skinTone",
            AvatarAttribute::HairColor => "hairColor",
            AvatarAttribute::HairStyle => "hairStyle",
            AvatarAttribute::FacialHair => "facialHair",
            AvatarAttribute::FacialHairColor => "facialHairColor",
            AvatarAttribute::FaceShape => "faceShape",
            AvatarAttribute::EyeShape => "eyeShape",
            AvatarAttribute::EyeColor => "eyeColor",
            AvatarAttribute::EyebrowStyle => "eyebrowStyle",
            AvatarAttribute::NoseShape => "noseShape",
            AvatarAttribute::MouthExpression => "mouthExpression",
            AvatarAttribute::BodyShape => "bodyShape",
            AvatarAttribute::HeightCategory => "heightCategory",
            AvatarAttribute::TopType => "topType",
            AvatarAttribute::TopColor => "topColor",
            AvatarAttribute::BottomType => "bottomType",
            AvatarAttribute::BottomColor => "bottomColor",
            AvatarAttribute::GlassesType => "glassesType",
            AvatarAttribute::HeadwearType => "headwearType",
        }
    }

    /// Lowercase human label, used when explaining a match.
    pub fn label(self) -> &'static str {
        match self {
            AvatarAttribute::SkinTone => "skin tone",
            AvatarAttribute::HairColor => "hair color",
            AvatarAttribute::HairStyle => "hair style",
            AvatarAttribute::FacialHair => "facial hair",
            AvatarAttribute::FacialHairColor => "facial hair color",
            AvatarAttribute::FaceShape => "face shape",
            AvatarAttribute::EyeShape => "eye shape",
            AvatarAttribute::EyeColor => "eye color",
            AvatarAttribute::EyebrowStyle => "eyebrows",
            AvatarAttribute::NoseShape => "nose shape",
            AvatarAttribute::MouthExpression => "expression",
            AvatarAttribute::BodyShape => "body shape",
            AvatarAttribute::HeightCategory => "height",
            AvatarAttribute::TopType => "top",
            AvatarAttribute::TopColor => "top color",
            AvatarAttribute::BottomType => "bottoms",
            AvatarAttribute::BottomColor => "bottom color",
            AvatarAttribute::GlassesType => "glasses",
            AvatarAttribute::HeadwearType => "headwear",
        }
    }

    pub fn category(self) -> AttributeCategory {
        match self {
            AvatarAttribute::SkinTone
            | AvatarAttribute::HairColor
            | AvatarAttribute::HairStyle
            | AvatarAttribute::FaceShape
            | AvatarAttribute::EyeShape
            | AvatarAttribute::EyeColor
            | AvatarAttribute::BodyShape => AttributeCategory::Primary,
            AvatarAttribute::FacialHair
            | AvatarAttribute::FacialHairColor
            | AvatarAttribute::EyebrowStyle
            | AvatarAttribute::NoseShape
            | AvatarAttribute::MouthExpression
            | AvatarAttribute::HeightCategory
            | AvatarAttribute::TopType
            | AvatarAttribute::TopColor
            | AvatarAttribute::BottomType
            | AvatarAttribute::BottomColor
            | AvatarAttribute::GlassesType
            | AvatarAttribute::HeadwearType => AttributeCategory::Secondary,
        }
    }
}

impl std::fmt::Display for AvatarAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for AvatarAttribute {
    type Err = MatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AvatarAttribute::ALL
            .iter()
            .copied()
            .find(|attribute| attribute.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| MatcherError::UnknownAttribute(s.to_string()))
    }
}

/// Primary attributes in catalog order.
pub fn primary_attributes() -> Vec<AvatarAttribute> {
    attributes_in(AttributeCategory::Primary)
}

/// Secondary attributes in catalog order.
pub fn secondary_attributes() -> Vec<AvatarAttribute> {
    attributes_in(AttributeCategory::Secondary)
}

fn attributes_in(category: AttributeCategory) -> Vec<AvatarAttribute> {
    AvatarAttribute::ALL
        .iter()
        .copied()
        .filter(|attribute| attribute.category() == category)
        .collect()
}
