//! Game controller buttons and axes, laid out like SDL's game controller API.

use crate::groups::EnumGroup;
use crate::record::ConstantDef;

pub const JOYPAD: &[ConstantDef] = &[
    button("JOY_BUTTON_INVALID", -1),
    button("JOY_BUTTON_A", 0),
    button("JOY_BUTTON_B", 1),
    button("JOY_BUTTON_X", 2),
    button("JOY_BUTTON_Y", 3),
    button("JOY_BUTTON_BACK", 4),
    button("JOY_BUTTON_GUIDE", 5),
    button("JOY_BUTTON_START", 6),
    button("JOY_BUTTON_LEFT_STICK", 7),
    button("JOY_BUTTON_RIGHT_STICK", 8),
    button("JOY_BUTTON_LEFT_SHOULDER", 9),
    button("JOY_BUTTON_RIGHT_SHOULDER", 10),
    button("JOY_BUTTON_DPAD_UP", 11),
    button("JOY_BUTTON_DPAD_DOWN", 12),
    button("JOY_BUTTON_DPAD_LEFT", 13),
    button("JOY_BUTTON_DPAD_RIGHT", 14),
    button("JOY_BUTTON_SDL_MAX", 15),
    button("JOY_BUTTON_MAX", 36),
    axis("JOY_AXIS_INVALID", -1),
    axis("JOY_AXIS_LEFT_X", 0),
    axis("JOY_AXIS_LEFT_Y", 1),
    axis("JOY_AXIS_RIGHT_X", 2),
    axis("JOY_AXIS_RIGHT_Y", 3),
    axis("JOY_AXIS_TRIGGER_LEFT", 4),
    axis("JOY_AXIS_TRIGGER_RIGHT", 5),
    axis("JOY_AXIS_SDL_MAX", 6),
    axis("JOY_AXIS_MAX", 10),
];

const fn button(name: &'static str, value: i64) -> ConstantDef {
    ConstantDef::member(EnumGroup::JoyButtonList, name, value)
}

const fn axis(name: &'static str, value: i64) -> ConstantDef {
    ConstantDef::member(EnumGroup::JoyAxisList, name, value)
}
