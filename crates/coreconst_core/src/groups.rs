//! Enum-group vocabulary for the constant tables.
//!
//! An enum group ties several constants together as members of one logical enumeration (all key codes share
//! `KeyList`, all error codes share `Error`). Groups are documentation/reflection metadata only: they never affect a
//! constant's value or its uniqueness.
//!
//! ## Notes
//! - Spellings match the names the binding layer registers enums under, including the dotted
//!   `Variant.Type`/`Variant.Operator` forms.
//! - Lookup via [`from_str`] is **case-sensitive**.
//!
//! ## Examples
//! ```rust
//! use coreconst_core::groups::{self, EnumGroup};
//!
//! assert_eq!(groups::from_str("Variant.Type"), Some(EnumGroup::VariantType));
//! assert_eq!(EnumGroup::KeyList.as_str(), "KeyList");
//! ```

/// Stable identifier for every enum group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EnumGroup {
    // UI layout
    Margin,
    Corner,
    Orientation,
    HAlign,
    VAlign,

    // Input
    KeyList,
    KeyModifierMask,
    ButtonList,
    JoyButtonList,
    JoyAxisList,
    MidiMessageList,

    // Core
    Error,
    PropertyHint,
    PropertyUsageFlags,
    MethodFlags,
    VariantType,
    VariantOperator,
}

/// Metadata for an enum group.
#[derive(Debug, Clone, Copy)]
pub struct GroupInfo {
    pub id: EnumGroup,
    pub canonical: &'static str,
    pub description: &'static str,
}

/// Registry of all enum groups, in the order their first member is registered.
pub const GROUPS: &[GroupInfo] = &[
    info(EnumGroup::Margin, "Margin", "Sides of a rectangle."),
    info(EnumGroup::Corner, "Corner", "Corners of a rectangle."),
    info(EnumGroup::Orientation, "Orientation", "Layout direction."),
    info(EnumGroup::HAlign, "HAlign", "Horizontal alignment."),
    info(EnumGroup::VAlign, "VAlign", "Vertical alignment."),
    info(
        EnumGroup::KeyList,
        "KeyList",
        "Keyboard scancodes. Special keys are offset by `SPKEY`; printable keys use their Latin-1 code point.",
    ),
    info(
        EnumGroup::KeyModifierMask,
        "KeyModifierMask",
        "Masks to split a key code into its scancode and modifier bits.",
    ),
    info(EnumGroup::ButtonList, "ButtonList", "Mouse buttons and mouse button masks."),
    info(EnumGroup::JoyButtonList, "JoyButtonList", "Game controller buttons (SDL layout)."),
    info(EnumGroup::JoyAxisList, "JoyAxisList", "Game controller axes (SDL layout)."),
    info(EnumGroup::MidiMessageList, "MidiMessageList", "MIDI channel message types."),
    info(EnumGroup::Error, "Error", "Error codes returned by engine APIs."),
    info(EnumGroup::PropertyHint, "PropertyHint", "Editor hints for exported properties."),
    info(
        EnumGroup::PropertyUsageFlags,
        "PropertyUsageFlags",
        "Bit flags describing how a property is stored and shown.",
    ),
    info(EnumGroup::MethodFlags, "MethodFlags", "Bit flags describing bound methods."),
    info(EnumGroup::VariantType, "Variant.Type", "Variant type tags."),
    info(EnumGroup::VariantOperator, "Variant.Operator", "Variant operator codes."),
];

impl EnumGroup {
    /// Return the canonical spelling for this group.
    pub const fn as_str(self) -> &'static str {
        match self {
            EnumGroup::Margin => "Margin",
            EnumGroup::Corner => "Corner",
            EnumGroup::Orientation => "Orientation",
            EnumGroup::HAlign => "HAlign",
            EnumGroup::VAlign => "VAlign",
            EnumGroup::KeyList => "KeyList",
            EnumGroup::KeyModifierMask => "KeyModifierMask",
            EnumGroup::ButtonList => "ButtonList",
            EnumGroup::JoyButtonList => "JoyButtonList",
            EnumGroup::JoyAxisList => "JoyAxisList",
            EnumGroup::MidiMessageList => "MidiMessageList",
            EnumGroup::Error => "Error",
            EnumGroup::PropertyHint => "PropertyHint",
            EnumGroup::PropertyUsageFlags => "PropertyUsageFlags",
            EnumGroup::MethodFlags => "MethodFlags",
            EnumGroup::VariantType => "Variant.Type",
            EnumGroup::VariantOperator => "Variant.Operator",
        }
    }
}

impl std::fmt::Display for EnumGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a spelling to an enum group.
pub fn from_str(name: &str) -> Option<EnumGroup> {
    GROUPS.iter().find(|g| g.canonical == name).map(|g| g.id)
}

/// Return the documentation blurb for a group.
#[inline]
pub fn description(group: EnumGroup) -> &'static str {
    info_for(group).description
}

/// Return full metadata for a group.
///
/// ## Panics
/// - If the registry is missing an entry for `group` (programming error).
pub fn info_for(group: EnumGroup) -> &'static GroupInfo {
    GROUPS
        .iter()
        .find(|g| g.id == group)
        .expect("enum group info missing")
}

const fn info(id: EnumGroup, canonical: &'static str, description: &'static str) -> GroupInfo {
    GroupInfo {
        id,
        canonical,
        description,
    }
}
