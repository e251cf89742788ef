//! Literal constant tables, one module per category.
//!
//! [`TABLES`] lists every category table in registration order; [`ConstantRegistry::initialize`] walks it front to
//! back. Editing the order here changes public indices, so append new categories at the end.
//!
//! [`ConstantRegistry::initialize`]: crate::ConstantRegistry::initialize

pub mod errors;
pub mod joypad;
pub mod keys;
pub mod layout;
pub mod method;
pub mod midi;
pub mod mouse;
pub mod property;
pub mod variant;

use crate::record::ConstantDef;

/// Every category table, in registration order.
pub const TABLES: &[&[ConstantDef]] = &[
    layout::LAYOUT,
    keys::KEYS,
    mouse::MOUSE_BUTTONS,
    joypad::JOYPAD,
    midi::MIDI_MESSAGES,
    errors::ERRORS,
    property::PROPERTY_HINTS,
    property::PROPERTY_USAGE,
    method::METHOD_FLAGS,
    variant::VARIANT_TYPES,
    variant::VARIANT_OPERATORS,
];

/// Total number of rows across all tables.
pub fn total_len() -> usize {
    TABLES.iter().map(|table| table.len()).sum()
}
