//! Property hints and property usage flags.

use crate::groups::EnumGroup;
use crate::record::ConstantDef;

pub const PROPERTY_HINTS: &[ConstantDef] = &[
    hint("PROPERTY_HINT_NONE", 0),
    hint("PROPERTY_HINT_RANGE", 1),
    hint("PROPERTY_HINT_EXP_RANGE", 2),
    hint("PROPERTY_HINT_ENUM", 3),
    hint("PROPERTY_HINT_EXP_EASING", 4),
    hint("PROPERTY_HINT_LENGTH", 5),
    // 6 is the sprite-frame hint, which is not exposed
    hint("PROPERTY_HINT_KEY_ACCEL", 7),
    hint("PROPERTY_HINT_FLAGS", 8),
    hint("PROPERTY_HINT_LAYERS_2D_RENDER", 9),
    hint("PROPERTY_HINT_LAYERS_2D_PHYSICS", 10),
    hint("PROPERTY_HINT_LAYERS_3D_RENDER", 11),
    hint("PROPERTY_HINT_LAYERS_3D_PHYSICS", 12),
    hint("PROPERTY_HINT_FILE", 13),
    hint("PROPERTY_HINT_DIR", 14),
    hint("PROPERTY_HINT_GLOBAL_FILE", 15),
    hint("PROPERTY_HINT_GLOBAL_DIR", 16),
    hint("PROPERTY_HINT_RESOURCE_TYPE", 17),
    hint("PROPERTY_HINT_MULTILINE_TEXT", 18),
    hint("PROPERTY_HINT_PLACEHOLDER_TEXT", 19),
    hint("PROPERTY_HINT_COLOR_NO_ALPHA", 20),
    hint("PROPERTY_HINT_IMAGE_COMPRESS_LOSSY", 21),
    hint("PROPERTY_HINT_IMAGE_COMPRESS_LOSSLESS", 22),
];

pub const PROPERTY_USAGE_STORAGE: i64 = 1;
pub const PROPERTY_USAGE_EDITOR: i64 = 2;
pub const PROPERTY_USAGE_NETWORK: i64 = 4;
pub const PROPERTY_USAGE_INTERNATIONALIZED: i64 = 64;

pub const PROPERTY_USAGE: &[ConstantDef] = &[
    usage("PROPERTY_USAGE_STORAGE", PROPERTY_USAGE_STORAGE),
    usage("PROPERTY_USAGE_EDITOR", PROPERTY_USAGE_EDITOR),
    usage("PROPERTY_USAGE_NETWORK", PROPERTY_USAGE_NETWORK),
    usage("PROPERTY_USAGE_EDITOR_HELPER", 8),
    usage("PROPERTY_USAGE_CHECKABLE", 16),
    usage("PROPERTY_USAGE_CHECKED", 32),
    usage("PROPERTY_USAGE_INTERNATIONALIZED", PROPERTY_USAGE_INTERNATIONALIZED),
    usage("PROPERTY_USAGE_GROUP", 128),
    usage("PROPERTY_USAGE_CATEGORY", 256),
    usage("PROPERTY_USAGE_SUBGROUP", 512),
    usage("PROPERTY_USAGE_NO_INSTANCE_STATE", 2048),
    usage("PROPERTY_USAGE_RESTART_IF_CHANGED", 4096),
    usage("PROPERTY_USAGE_SCRIPT_VARIABLE", 8192),
    usage(
        "PROPERTY_USAGE_DEFAULT",
        PROPERTY_USAGE_STORAGE | PROPERTY_USAGE_EDITOR | PROPERTY_USAGE_NETWORK,
    ),
    usage(
        "PROPERTY_USAGE_DEFAULT_INTL",
        PROPERTY_USAGE_STORAGE | PROPERTY_USAGE_EDITOR | PROPERTY_USAGE_NETWORK | PROPERTY_USAGE_INTERNATIONALIZED,
    ),
    usage("PROPERTY_USAGE_NOEDITOR", PROPERTY_USAGE_STORAGE | PROPERTY_USAGE_NETWORK),
];

const fn hint(name: &'static str, value: i64) -> ConstantDef {
    ConstantDef::member(EnumGroup::PropertyHint, name, value)
}

const fn usage(name: &'static str, value: i64) -> ConstantDef {
    ConstantDef::member(EnumGroup::PropertyUsageFlags, name, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_usage_flags() {
        let value = |name: &str| PROPERTY_USAGE.iter().find(|d| d.name == name).unwrap().value;
        assert_eq!(value("PROPERTY_USAGE_DEFAULT"), 7);
        assert_eq!(value("PROPERTY_USAGE_DEFAULT_INTL"), 71);
        assert_eq!(value("PROPERTY_USAGE_NOEDITOR"), 5);
    }

    #[test]
    fn test_single_bit_usage_flags() {
        for def in &PROPERTY_USAGE[..13] {
            assert_eq!(def.value.count_ones(), 1, "{} is not a single bit", def.name);
        }
    }
}
