//! Mouse buttons and button masks.

use crate::groups::EnumGroup;
use crate::record::ConstantDef;

pub const MOUSE_BUTTONS: &[ConstantDef] = &[
    button("BUTTON_LEFT", 1),
    button("BUTTON_RIGHT", 2),
    button("BUTTON_MIDDLE", 3),
    button("BUTTON_XBUTTON1", 8),
    button("BUTTON_XBUTTON2", 9),
    button("BUTTON_WHEEL_UP", 4),
    button("BUTTON_WHEEL_DOWN", 5),
    button("BUTTON_WHEEL_LEFT", 6),
    button("BUTTON_WHEEL_RIGHT", 7),
    // masks are `1 << (button - 1)`
    button("BUTTON_MASK_LEFT", 1 << 0),
    button("BUTTON_MASK_RIGHT", 1 << 1),
    button("BUTTON_MASK_MIDDLE", 1 << 2),
    button("BUTTON_MASK_XBUTTON1", 1 << 7),
    button("BUTTON_MASK_XBUTTON2", 1 << 8),
];

const fn button(name: &'static str, value: i64) -> ConstantDef {
    ConstantDef::member(EnumGroup::ButtonList, name, value)
}
