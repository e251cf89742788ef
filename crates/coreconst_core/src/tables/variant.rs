//! Variant type tags and operator codes.
//!
//! These rows are registered under custom names (`TYPE_*`, `OP_*`) rather than the engine-side enumerator
//! spellings; a few keep legacy names (`TYPE_REAL` for the float type, `TYPE_RAW_ARRAY` for packed bytes).

use crate::groups::EnumGroup;
use crate::record::ConstantDef;

pub const VARIANT_TYPES: &[ConstantDef] = &[
    ty("TYPE_NIL", 0),
    ty("TYPE_BOOL", 1),
    ty("TYPE_INT", 2),
    ty("TYPE_REAL", 3),
    ty("TYPE_STRING", 4),
    ty("TYPE_VECTOR2", 5),
    ty("TYPE_VECTOR2I", 6),
    ty("TYPE_RECT2", 7),
    ty("TYPE_RECT2I", 8),
    ty("TYPE_VECTOR3", 9),
    ty("TYPE_VECTOR3I", 10),
    ty("TYPE_TRANSFORM2D", 11),
    ty("TYPE_PLANE", 12),
    ty("TYPE_QUAT", 13),
    ty("TYPE_AABB", 14),
    ty("TYPE_BASIS", 15),
    ty("TYPE_TRANSFORM", 16),
    ty("TYPE_COLOR", 17),
    ty("TYPE_STRING_NAME", 18),
    ty("TYPE_NODE_PATH", 19),
    ty("TYPE_RID", 20),
    ty("TYPE_OBJECT", 21),
    ty("TYPE_CALLABLE", 22),
    ty("TYPE_SIGNAL", 23),
    ty("TYPE_DICTIONARY", 24),
    ty("TYPE_ARRAY", 25),
    ty("TYPE_RAW_ARRAY", 26),
    ty("TYPE_INT32_ARRAY", 27),
    ty("TYPE_INT64_ARRAY", 28),
    ty("TYPE_FLOAT32_ARRAY", 29),
    ty("TYPE_FLOAT64_ARRAY", 30),
    ty("TYPE_STRING_ARRAY", 31),
    ty("TYPE_VECTOR2_ARRAY", 32),
    ty("TYPE_VECTOR3_ARRAY", 33),
    ty("TYPE_COLOR_ARRAY", 34),
    ty("TYPE_MAX", 35),
];

pub const VARIANT_OPERATORS: &[ConstantDef] = &[
    // comparison
    op("OP_EQUAL", 0),
    op("OP_NOT_EQUAL", 1),
    op("OP_LESS", 2),
    op("OP_LESS_EQUAL", 3),
    op("OP_GREATER", 4),
    op("OP_GREATER_EQUAL", 5),
    // arithmetic
    op("OP_ADD", 6),
    op("OP_SUBTRACT", 7),
    op("OP_MULTIPLY", 8),
    op("OP_DIVIDE", 9),
    op("OP_NEGATE", 10),
    op("OP_POSITIVE", 11),
    op("OP_MODULE", 12),
    // 13 is string concatenation, which is not exposed
    // bitwise
    op("OP_SHIFT_LEFT", 14),
    op("OP_SHIFT_RIGHT", 15),
    op("OP_BIT_AND", 16),
    op("OP_BIT_OR", 17),
    op("OP_BIT_XOR", 18),
    op("OP_BIT_NEGATE", 19),
    // logic
    op("OP_AND", 20),
    op("OP_OR", 21),
    op("OP_XOR", 22),
    op("OP_NOT", 23),
    // containment
    op("OP_IN", 24),
    op("OP_MAX", 25),
];

const fn ty(name: &'static str, value: i64) -> ConstantDef {
    ConstantDef::member(EnumGroup::VariantType, name, value)
}

const fn op(name: &'static str, value: i64) -> ConstantDef {
    ConstantDef::member(EnumGroup::VariantOperator, name, value)
}
