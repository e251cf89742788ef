//! Flags describing bound methods.

use crate::groups::EnumGroup;
use crate::record::ConstantDef;

pub const METHOD_FLAG_NORMAL: i64 = 1;

pub const METHOD_FLAGS: &[ConstantDef] = &[
    flag("METHOD_FLAG_NORMAL", METHOD_FLAG_NORMAL),
    flag("METHOD_FLAG_EDITOR", 2),
    flag("METHOD_FLAG_NOSCRIPT", 4),
    flag("METHOD_FLAG_CONST", 8),
    flag("METHOD_FLAG_REVERSE", 16),
    flag("METHOD_FLAG_VIRTUAL", 32),
    flag("METHOD_FLAG_FROM_SCRIPT", 64),
    flag("METHOD_FLAGS_DEFAULT", METHOD_FLAG_NORMAL),
];

const fn flag(name: &'static str, value: i64) -> ConstantDef {
    ConstantDef::member(EnumGroup::MethodFlags, name, value)
}
