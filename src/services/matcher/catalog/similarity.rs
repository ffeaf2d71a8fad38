//! Similarity group table: values in one group earn partial credit.
//!
//! Groups are scoped to a single attribute. The same token (e.g. `darkBrown`)
//! may sit in unrelated groups of different attributes.

use super::attributes::AvatarAttribute;
use super::values::same_token;

type Groups = &'static [&'static [&'static str]];

const SKIN_TONE_GROUPS: Groups = &[
    &["porcelain", "fair", "light"],
    &["medium", "olive", "tan"],
    &["brown", "darkBrown", "deep"],
];

const HAIR_COLOR_GROUPS: Groups = &[
    &["black", "darkBrown"],
    &["brown", "lightBrown"],
    &["auburn", "red", "strawberry"],
    &["blonde", "platinum"],
    &["gray", "white"],
    &["blue", "purple", "pink", "green"],
];

const HAIR_STYLE_GROUPS: Groups = &[
    &["bald", "buzzCut"],
    &["short", "shortCurly"],
    &["medium", "mediumCurly", "afro"],
    &["long", "longCurly", "braids", "dreadlocks"],
    &["ponytail", "bun"],
];

const FACIAL_HAIR_GROUPS: Groups = &[
    &["none", "stubble"],
    &["mustache", "goatee"],
    &["shortBeard", "fullBeard", "longBeard"],
];

const FACIAL_HAIR_COLOR_GROUPS: Groups = &[
    &["black", "darkBrown"],
    &["brown", "lightBrown"],
    &["auburn", "red"],
    &["gray", "white"],
];

const FACE_SHAPE_GROUPS: Groups = &[
    &["oval", "oblong"],
    &["round", "heart"],
    &["square", "diamond", "triangle"],
];

const EYE_SHAPE_GROUPS: Groups = &[
    &["almond", "upturned"],
    &["monolid", "hooded"],
    &["round", "downturned"],
];

const EYE_COLOR_GROUPS: Groups = &[
    &["brown", "darkBrown", "black"],
    &["hazel", "amber", "green"],
    &["blue", "gray"],
];

const EYEBROW_GROUPS: Groups = &[
    &["thin", "arched"],
    &["natural", "straight"],
    &["thick", "bushy"],
];

const MOUTH_EXPRESSION_GROUPS: Groups = &[&["smile", "bigSmile", "smirk"], &["neutral", "serious"]];

const BODY_SHAPE_GROUPS: Groups = &[
    &["athletic", "muscular"],
    &["slim", "average"],
    &["curvy", "heavy"],
];

const HEIGHT_GROUPS: Groups = &[&["veryShort", "short"], &["tall", "veryTall"]];

const TOP_TYPE_GROUPS: Groups = &[
    &["tShirt", "tankTop"],
    &["shirt", "blouse"],
    &["sweater", "hoodie"],
    &["jacket", "coat", "suit"],
];

const CLOTHING_COLOR_GROUPS: Groups = &[
    &["black", "gray"],
    &["white", "beige"],
    &["navy", "blue", "lightBlue"],
    &["red", "maroon", "pink"],
    &["green", "olive"],
    &["yellow", "orange"],
];

const BOTTOM_TYPE_GROUPS: Groups = &[
    &["jeans", "trousers"],
    &["leggings", "sweatpants"],
    &["shorts", "skirt"],
];

const GLASSES_GROUPS: Groups = &[&["reading", "round", "square"], &["aviator", "sunglasses"]];

const HEADWEAR_GROUPS: Groups = &[&["cap", "hat"], &["headband", "bandana"]];

/// Similarity groups for `attribute`, or `None` when only exact matches count.
pub fn similarity_groups(attribute: AvatarAttribute) -> Option<Groups> {
    match attribute {
        AvatarAttribute::SkinTone => Some(SKIN_TONE_GROUPS),
        AvatarAttribute::HairColor => Some(HAIR_COLOR_GROUPS),
        AvatarAttribute::HairStyle => Some(HAIR_STYLE_GROUPS),
        AvatarAttribute::FacialHair => Some(FACIAL_HAIR_GROUPS),
        AvatarAttribute::FacialHairColor => Some(FACIAL_HAIR_COLOR_GROUPS),
        AvatarAttribute::FaceShape => Some(FACE_SHAPE_GROUPS),
        AvatarAttribute::EyeShape => Some(EYE_SHAPE_GROUPS),
        AvatarAttribute::EyeColor => Some(EYE_COLOR_GROUPS),
        AvatarAttribute::EyebrowStyle => Some(EYEBROW_GROUPS),
        AvatarAttribute::MouthExpression => Some(MOUTH_EXPRESSION_GROUPS),
        AvatarAttribute::BodyShape => Some(BODY_SHAPE_GROUPS),
        AvatarAttribute::HeightCategory => Some(HEIGHT_GROUPS),
        AvatarAttribute::TopType => Some(TOP_TYPE_GROUPS),
        AvatarAttribute::TopColor | AvatarAttribute::BottomColor => Some(CLOTHING_COLOR_GROUPS),
        AvatarAttribute::BottomType => Some(BOTTOM_TYPE_GROUPS),
        AvatarAttribute::GlassesType => Some(GLASSES_GROUPS),
        AvatarAttribute::HeadwearType => Some(HEADWEAR_GROUPS),
        AvatarAttribute::NoseShape => None,
    }
}

/// True when both values appear together in one of the attribute's groups.
/// Comparison is case-insensitive. Identical values are not "related" unless
/// they share a group.
pub fn are_related(attribute: AvatarAttribute, a: &str, b: &str) -> bool {
    let Some(groups) = similarity_groups(attribute) else {
        return false;
    };

    groups.iter().any(|group| {
        group.iter().any(|value| same_token(value, a))
            && group.iter().any(|value| same_token(value, b))
    })
}
