//! Legal value tokens and canonical defaults for every attribute.

use super::attributes::AvatarAttribute;

const SKIN_TONES: &[&str] = &[
    "porcelain", "fair", "light", "medium", "olive", "tan", "brown", "darkBrown", "deep",
];

const HAIR_COLORS: &[&str] = &[
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
];

const HAIR_STYLES: &[&str] = &[
    "bald",
    "buzzCut",
    "short",
    "shortCurly",
    "medium",
    "mediumCurly",
    "long",
    "longCurly",
    "ponytail",
    "bun",
    "braids",
    "afro",
    "dreadlocks",
    "mohawk",
];

const FACIAL_HAIR: &[&str] = &[
    "none",
    "stubble",
    "mustache",
    "goatee",
    "shortBeard",
    "fullBeard",
    "longBeard",
];

const FACIAL_HAIR_COLORS: &[&str] = &[
    "black",
    "darkBrown",
    "brown",
    "lightBrown",
    "auburn",
    "red",
    "blonde",
    "gray",
    "white",
];

const FACE_SHAPES: &[&str] = &[
    "oval", "round", "square", "heart", "oblong", "diamond", "triangle",
];

const EYE_SHAPES: &[&str] = &[
    "almond",
    "round",
    "monolid",
    "hooded",
    "downturned",
    "upturned",
];

const EYE_COLORS: &[&str] = &[
    "brown", "darkBrown", "black", "hazel", "amber", "green", "blue", "gray",
];

const EYEBROW_STYLES: &[&str] = &["thin", "natural", "thick", "arched", "straight", "bushy"];

const NOSE_SHAPES: &[&str] = &["small", "straight", "roman", "button", "wide", "pointed"];

const MOUTH_EXPRESSIONS: &[&str] = &["neutral", "smile", "bigSmile", "serious", "smirk", "frown"];

const BODY_SHAPES: &[&str] = &["slim", "athletic", "average", "curvy", "muscular", "heavy"];

const HEIGHT_CATEGORIES: &[&str] = &["veryShort", "short", "average", "tall", "veryTall"];

const TOP_TYPES: &[&str] = &[
    "tShirt", "shirt", "blouse", "tankTop", "sweater", "hoodie", "jacket", "coat", "dress", "suit",
];

const CLOTHING_COLORS: &[&str] = &[
    "black",
    "gray",
    "white",
    "beige",
    "navy",
    "blue",
    "lightBlue",
    "red",
    "maroon",
    "pink",
    "green",
    "olive",
    "yellow",
    "orange",
    "purple",
    "brown",
];

const BOTTOM_TYPES: &[&str] = &[
    "jeans",
    "trousers",
    "shorts",
    "skirt",
    "leggings",
    "sweatpants",
];

const GLASSES_TYPES: &[&str] = &["none", "reading", "round", "square", "aviator", "sunglasses"];

const HEADWEAR_TYPES: &[&str] = &[
    "none", "cap", "beanie", "hat", "headband", "hijab", "bandana",
];

/// Every legal token for `attribute`, in display order.
pub fn legal_values(attribute: AvatarAttribute) -> &'static [&'static str] {
    match attribute {
        AvatarAttribute::SkinTone => SKIN_TONES,
        AvatarAttribute::HairColor => HAIR_COLORS,
        AvatarAttribute::HairStyle => HAIR_STYLES,
        AvatarAttribute::FacialHair => FACIAL_HAIR,
        AvatarAttribute::FacialHairColor => FACIAL_HAIR_COLORS,
        AvatarAttribute::FaceShape => FACE_SHAPES,
        AvatarAttribute::EyeShape => EYE_SHAPES,
        AvatarAttribute::EyeColor => EYE_COLORS,
        AvatarAttribute::EyebrowStyle => EYEBROW_STYLES,
        AvatarAttribute::NoseShape => NOSE_SHAPES,
        AvatarAttribute::MouthExpression => MOUTH_EXPRESSIONS,
        AvatarAttribute::BodyShape => BODY_SHAPES,
        AvatarAttribute::HeightCategory => HEIGHT_CATEGORIES,
        AvatarAttribute::TopType => TOP_TYPES,
        AvatarAttribute::TopColor | AvatarAttribute::BottomColor => CLOTHING_COLORS,
        AvatarAttribute::BottomType => BOTTOM_TYPES,
        AvatarAttribute::GlassesType => GLASSES_TYPES,
        AvatarAttribute::HeadwearType => HEADWEAR_TYPES,
    }
}

/// Canonical value used to fill a missing attribute during normalization.
pub fn default_value(attribute: AvatarAttribute) -> &'static str {
    match attribute {
        AvatarAttribute::SkinTone => "medium",
        AvatarAttribute::HairColor => "brown",
        AvatarAttribute::HairStyle => "short",
        AvatarAttribute::FacialHair => "none",
        AvatarAttribute::FacialHairColor => "brown",
        AvatarAttribute::FaceShape => "oval",
        AvatarAttribute::EyeShape => "almond",
        AvatarAttribute::EyeColor => "brown",
        AvatarAttribute::EyebrowStyle => "natural",
        AvatarAttribute::NoseShape => "straight",
        AvatarAttribute::MouthExpression => "neutral",
        AvatarAttribute::BodyShape => "average",
        AvatarAttribute::HeightCategory => "average",
        AvatarAttribute::TopType => "tShirt",
        AvatarAttribute::TopColor => "blue",
        AvatarAttribute::BottomType => "jeans",
        AvatarAttribute::BottomColor => "blue",
        AvatarAttribute::GlassesType => "none",
        AvatarAttribute::HeadwearType => "none",
    }
}

/// Case-insensitive membership test against the attribute's enumeration.
pub fn is_legal_value(attribute: AvatarAttribute, value: &str) -> bool {
    legal_values(attribute)
        .iter()
        .any(|legal| same_token(legal, value))
}

/// Case-insensitive token equality with full Unicode lowercasing, so values
/// outside the catalog such as `Émeraude` / `émeraude` still compare equal.
pub fn same_token(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
