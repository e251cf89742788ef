//! Keyboard constants: the `SPKEY` offset, key codes, and key modifier masks.
//!
//! A key code is a scancode in the low 25 bits combined with modifier bits from [`KEY_MASK_SHIFT`] up to
//! [`KEY_MASK_GROUP_SWITCH`]. Non-printable keys live above [`SPKEY`]; printable keys use their Latin-1 code point.

use crate::groups::EnumGroup;
use crate::record::ConstantDef;

/// Offset for special (non-printable) key scancodes.
pub const SPKEY: i64 = 1 << 24;

pub const KEY_CODE_MASK: i64 = (1 << 25) - 1;
/// `0xFF << 24` evaluated as a 32-bit `int`, which is how bindings have always seen it.
pub const KEY_MODIFIER_MASK: i64 = (0xFFu32 << 24) as i32 as i64;

pub const KEY_MASK_SHIFT: i64 = 1 << 25;
pub const KEY_MASK_ALT: i64 = 1 << 26;
pub const KEY_MASK_META: i64 = 1 << 27;
pub const KEY_MASK_CTRL: i64 = 1 << 28;
/// The "command" modifier: Meta on macOS, Ctrl everywhere else.
pub const KEY_MASK_CMD: i64 = if cfg!(target_os = "macos") {
    KEY_MASK_META
} else {
    KEY_MASK_CTRL
};
pub const KEY_MASK_KPAD: i64 = 1 << 29;
pub const KEY_MASK_GROUP_SWITCH: i64 = 1 << 30;

pub const KEYS: &[ConstantDef] = &[
    ConstantDef::standalone("SPKEY", SPKEY),
    key("KEY_ESCAPE", SPKEY | 0x01),
    key("KEY_TAB", SPKEY | 0x02),
    key("KEY_BACKTAB", SPKEY | 0x03),
    key("KEY_BACKSPACE", SPKEY | 0x04),
    key("KEY_ENTER", SPKEY | 0x05),
    key("KEY_KP_ENTER", SPKEY | 0x06),
    key("KEY_INSERT", SPKEY | 0x07),
    key("KEY_DELETE", SPKEY | 0x08),
    key("KEY_PAUSE", SPKEY | 0x09),
    key("KEY_PRINT", SPKEY | 0x0A),
    key("KEY_SYSREQ", SPKEY | 0x0B),
    key("KEY_CLEAR", SPKEY | 0x0C),
    key("KEY_HOME", SPKEY | 0x0D),
    key("KEY_END", SPKEY | 0x0E),
    key("KEY_LEFT", SPKEY | 0x0F),
    key("KEY_UP", SPKEY | 0x10),
    key("KEY_RIGHT", SPKEY | 0x11),
    key("KEY_DOWN", SPKEY | 0x12),
    key("KEY_PAGEUP", SPKEY | 0x13),
    key("KEY_PAGEDOWN", SPKEY | 0x14),
    key("KEY_SHIFT", SPKEY | 0x15),
    key("KEY_CONTROL", SPKEY | 0x16),
    key("KEY_META", SPKEY | 0x17),
    key("KEY_ALT", SPKEY | 0x18),
    key("KEY_CAPSLOCK", SPKEY | 0x19),
    key("KEY_NUMLOCK", SPKEY | 0x1A),
    key("KEY_SCROLLLOCK", SPKEY | 0x1B),
    key("KEY_F1", SPKEY | 0x1C),
    key("KEY_F2", SPKEY | 0x1D),
    key("KEY_F3", SPKEY | 0x1E),
    key("KEY_F4", SPKEY | 0x1F),
    key("KEY_F5", SPKEY | 0x20),
    key("KEY_F6", SPKEY | 0x21),
    key("KEY_F7", SPKEY | 0x22),
    key("KEY_F8", SPKEY | 0x23),
    key("KEY_F9", SPKEY | 0x24),
    key("KEY_F10", SPKEY | 0x25),
    key("KEY_F11", SPKEY | 0x26),
    key("KEY_F12", SPKEY | 0x27),
    key("KEY_F13", SPKEY | 0x28),
    key("KEY_F14", SPKEY | 0x29),
    key("KEY_F15", SPKEY | 0x2A),
    key("KEY_F16", SPKEY | 0x2B),
    key("KEY_KP_MULTIPLY", SPKEY | 0x81),
    key("KEY_KP_DIVIDE", SPKEY | 0x82),
    key("KEY_KP_SUBTRACT", SPKEY | 0x83),
    key("KEY_KP_PERIOD", SPKEY | 0x84),
    key("KEY_KP_ADD", SPKEY | 0x85),
    key("KEY_KP_0", SPKEY | 0x86),
    key("KEY_KP_1", SPKEY | 0x87),
    key("KEY_KP_2", SPKEY | 0x88),
    key("KEY_KP_3", SPKEY | 0x89),
    key("KEY_KP_4", SPKEY | 0x8A),
    key("KEY_KP_5", SPKEY | 0x8B),
    key("KEY_KP_6", SPKEY | 0x8C),
    key("KEY_KP_7", SPKEY | 0x8D),
    key("KEY_KP_8", SPKEY | 0x8E),
    key("KEY_KP_9", SPKEY | 0x8F),
    key("KEY_SUPER_L", SPKEY | 0x2C),
    key("KEY_SUPER_R", SPKEY | 0x2D),
    key("KEY_MENU", SPKEY | 0x2E),
    key("KEY_HYPER_L", SPKEY | 0x2F),
    key("KEY_HYPER_R", SPKEY | 0x30),
    key("KEY_HELP", SPKEY | 0x31),
    key("KEY_DIRECTION_L", SPKEY | 0x32),
    key("KEY_DIRECTION_R", SPKEY | 0x33),
    key("KEY_BACK", SPKEY | 0x40),
    key("KEY_FORWARD", SPKEY | 0x41),
    key("KEY_STOP", SPKEY | 0x42),
    key("KEY_REFRESH", SPKEY | 0x43),
    key("KEY_VOLUMEDOWN", SPKEY | 0x44),
    key("KEY_VOLUMEMUTE", SPKEY | 0x45),
    key("KEY_VOLUMEUP", SPKEY | 0x46),
    key("KEY_BASSBOOST", SPKEY | 0x47),
    key("KEY_BASSUP", SPKEY | 0x48),
    key("KEY_BASSDOWN", SPKEY | 0x49),
    key("KEY_TREBLEUP", SPKEY | 0x4A),
    key("KEY_TREBLEDOWN", SPKEY | 0x4B),
    key("KEY_MEDIAPLAY", SPKEY | 0x4C),
    key("KEY_MEDIASTOP", SPKEY | 0x4D),
    key("KEY_MEDIAPREVIOUS", SPKEY | 0x4E),
    key("KEY_MEDIANEXT", SPKEY | 0x4F),
    key("KEY_MEDIARECORD", SPKEY | 0x50),
    key("KEY_HOMEPAGE", SPKEY | 0x51),
    key("KEY_FAVORITES", SPKEY | 0x52),
    key("KEY_SEARCH", SPKEY | 0x53),
    key("KEY_STANDBY", SPKEY | 0x54),
    key("KEY_OPENURL", SPKEY | 0x55),
    key("KEY_LAUNCHMAIL", SPKEY | 0x56),
    key("KEY_LAUNCHMEDIA", SPKEY | 0x57),
    key("KEY_LAUNCH0", SPKEY | 0x58),
    key("KEY_LAUNCH1", SPKEY | 0x59),
    key("KEY_LAUNCH2", SPKEY | 0x5A),
    key("KEY_LAUNCH3", SPKEY | 0x5B),
    key("KEY_LAUNCH4", SPKEY | 0x5C),
    key("KEY_LAUNCH5", SPKEY | 0x5D),
    key("KEY_LAUNCH6", SPKEY | 0x5E),
    key("KEY_LAUNCH7", SPKEY | 0x5F),
    key("KEY_LAUNCH8", SPKEY | 0x60),
    key("KEY_LAUNCH9", SPKEY | 0x61),
    key("KEY_LAUNCHA", SPKEY | 0x62),
    key("KEY_LAUNCHB", SPKEY | 0x63),
    key("KEY_LAUNCHC", SPKEY | 0x64),
    key("KEY_LAUNCHD", SPKEY | 0x65),
    key("KEY_LAUNCHE", SPKEY | 0x66),
    key("KEY_LAUNCHF", SPKEY | 0x67),
    // printable keys map to their Latin-1 code point
    key("KEY_UNKNOWN", SPKEY | 0xFF_FFFF),
    key("KEY_SPACE", 0x20),
    key("KEY_EXCLAM", 0x21),
    key("KEY_QUOTEDBL", 0x22),
    key("KEY_NUMBERSIGN", 0x23),
    key("KEY_DOLLAR", 0x24),
    key("KEY_PERCENT", 0x25),
    key("KEY_AMPERSAND", 0x26),
    key("KEY_APOSTROPHE", 0x27),
    key("KEY_PARENLEFT", 0x28),
    key("KEY_PARENRIGHT", 0x29),
    key("KEY_ASTERISK", 0x2A),
    key("KEY_PLUS", 0x2B),
    key("KEY_COMMA", 0x2C),
    key("KEY_MINUS", 0x2D),
    key("KEY_PERIOD", 0x2E),
    key("KEY_SLASH", 0x2F),
    key("KEY_0", 0x30),
    key("KEY_1", 0x31),
    key("KEY_2", 0x32),
    key("KEY_3", 0x33),
    key("KEY_4", 0x34),
    key("KEY_5", 0x35),
    key("KEY_6", 0x36),
    key("KEY_7", 0x37),
    key("KEY_8", 0x38),
    key("KEY_9", 0x39),
    key("KEY_COLON", 0x3A),
    key("KEY_SEMICOLON", 0x3B),
    key("KEY_LESS", 0x3C),
    key("KEY_EQUAL", 0x3D),
    key("KEY_GREATER", 0x3E),
    key("KEY_QUESTION", 0x3F),
    key("KEY_AT", 0x40),
    key("KEY_A", 0x41),
    key("KEY_B", 0x42),
    key("KEY_C", 0x43),
    key("KEY_D", 0x44),
    key("KEY_E", 0x45),
    key("KEY_F", 0x46),
    key("KEY_G", 0x47),
    key("KEY_H", 0x48),
    key("KEY_I", 0x49),
    key("KEY_J", 0x4A),
    key("KEY_K", 0x4B),
    key("KEY_L", 0x4C),
    key("KEY_M", 0x4D),
    key("KEY_N", 0x4E),
    key("KEY_O", 0x4F),
    key("KEY_P", 0x50),
    key("KEY_Q", 0x51),
    key("KEY_R", 0x52),
    key("KEY_S", 0x53),
    key("KEY_T", 0x54),
    key("KEY_U", 0x55),
    key("KEY_V", 0x56),
    key("KEY_W", 0x57),
    key("KEY_X", 0x58),
    key("KEY_Y", 0x59),
    key("KEY_Z", 0x5A),
    key("KEY_BRACKETLEFT", 0x5B),
    key("KEY_BACKSLASH", 0x5C),
    key("KEY_BRACKETRIGHT", 0x5D),
    key("KEY_ASCIICIRCUM", 0x5E),
    key("KEY_UNDERSCORE", 0x5F),
    key("KEY_QUOTELEFT", 0x60),
    key("KEY_BRACELEFT", 0x7B),
    key("KEY_BAR", 0x7C),
    key("KEY_BRACERIGHT", 0x7D),
    key("KEY_ASCIITILDE", 0x7E),
    key("KEY_NOBREAKSPACE", 0xA0),
    key("KEY_EXCLAMDOWN", 0xA1),
    key("KEY_CENT", 0xA2),
    key("KEY_STERLING", 0xA3),
    key("KEY_CURRENCY", 0xA4),
    key("KEY_YEN", 0xA5),
    key("KEY_BROKENBAR", 0xA6),
    key("KEY_SECTION", 0xA7),
    key("KEY_DIAERESIS", 0xA8),
    key("KEY_COPYRIGHT", 0xA9),
    key("KEY_ORDFEMININE", 0xAA),
    key("KEY_GUILLEMOTLEFT", 0xAB),
    key("KEY_NOTSIGN", 0xAC),
    key("KEY_HYPHEN", 0xAD),
    key("KEY_REGISTERED", 0xAE),
    key("KEY_MACRON", 0xAF),
    key("KEY_DEGREE", 0xB0),
    key("KEY_PLUSMINUS", 0xB1),
    key("KEY_TWOSUPERIOR", 0xB2),
    key("KEY_THREESUPERIOR", 0xB3),
    key("KEY_ACUTE", 0xB4),
    key("KEY_MU", 0xB5),
    key("KEY_PARAGRAPH", 0xB6),
    key("KEY_PERIODCENTERED", 0xB7),
    key("KEY_CEDILLA", 0xB8),
    key("KEY_ONESUPERIOR", 0xB9),
    key("KEY_MASCULINE", 0xBA),
    key("KEY_GUILLEMOTRIGHT", 0xBB),
    key("KEY_ONEQUARTER", 0xBC),
    key("KEY_ONEHALF", 0xBD),
    key("KEY_THREEQUARTERS", 0xBE),
    key("KEY_QUESTIONDOWN", 0xBF),
    key("KEY_AGRAVE", 0xC0),
    key("KEY_AACUTE", 0xC1),
    key("KEY_ACIRCUMFLEX", 0xC2),
    key("KEY_ATILDE", 0xC3),
    key("KEY_ADIAERESIS", 0xC4),
    key("KEY_ARING", 0xC5),
    key("KEY_AE", 0xC6),
    key("KEY_CCEDILLA", 0xC7),
    key("KEY_EGRAVE", 0xC8),
    key("KEY_EACUTE", 0xC9),
    key("KEY_ECIRCUMFLEX", 0xCA),
    key("KEY_EDIAERESIS", 0xCB),
    key("KEY_IGRAVE", 0xCC),
    key("KEY_IACUTE", 0xCD),
    key("KEY_ICIRCUMFLEX", 0xCE),
    key("KEY_IDIAERESIS", 0xCF),
    key("KEY_ETH", 0xD0),
    key("KEY_NTILDE", 0xD1),
    key("KEY_OGRAVE", 0xD2),
    key("KEY_OACUTE", 0xD3),
    key("KEY_OCIRCUMFLEX", 0xD4),
    key("KEY_OTILDE", 0xD5),
    key("KEY_ODIAERESIS", 0xD6),
    key("KEY_MULTIPLY", 0xD7),
    key("KEY_OOBLIQUE", 0xD8),
    key("KEY_UGRAVE", 0xD9),
    key("KEY_UACUTE", 0xDA),
    key("KEY_UCIRCUMFLEX", 0xDB),
    key("KEY_UDIAERESIS", 0xDC),
    key("KEY_YACUTE", 0xDD),
    key("KEY_THORN", 0xDE),
    key("KEY_SSHARP", 0xDF),
    key("KEY_DIVISION", 0xF7),
    key("KEY_YDIAERESIS", 0xFF),
    mask("KEY_CODE_MASK", KEY_CODE_MASK),
    mask("KEY_MODIFIER_MASK", KEY_MODIFIER_MASK),
    mask("KEY_MASK_SHIFT", KEY_MASK_SHIFT),
    mask("KEY_MASK_ALT", KEY_MASK_ALT),
    mask("KEY_MASK_META", KEY_MASK_META),
    mask("KEY_MASK_CTRL", KEY_MASK_CTRL),
    // platform dependent, so docs show the name only
    ConstantDef::member_no_val(EnumGroup::KeyModifierMask, "KEY_MASK_CMD", KEY_MASK_CMD),
    mask("KEY_MASK_KPAD", KEY_MASK_KPAD),
    mask("KEY_MASK_GROUP_SWITCH", KEY_MASK_GROUP_SWITCH),
];

const fn key(name: &'static str, value: i64) -> ConstantDef {
    ConstantDef::member(EnumGroup::KeyList, name, value)
}

const fn mask(name: &'static str, value: i64) -> ConstantDef {
    ConstantDef::member(EnumGroup::KeyModifierMask, name, value)
}
