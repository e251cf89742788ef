//! MIDI channel message types (the status byte's high nibble).

use crate::groups::EnumGroup;
use crate::record::ConstantDef;

pub const MIDI_MESSAGES: &[ConstantDef] = &[
    midi("MIDI_MESSAGE_NOTE_OFF", 0x8),
    midi("MIDI_MESSAGE_NOTE_ON", 0x9),
    midi("MIDI_MESSAGE_AFTERTOUCH", 0xA),
    midi("MIDI_MESSAGE_CONTROL_CHANGE", 0xB),
    midi("MIDI_MESSAGE_PROGRAM_CHANGE", 0xC),
    midi("MIDI_MESSAGE_CHANNEL_PRESSURE", 0xD),
    midi("MIDI_MESSAGE_PITCH_BEND", 0xE),
];

const fn midi(name: &'static str, value: i64) -> ConstantDef {
    ConstantDef::member(EnumGroup::MidiMessageList, name, value)
}
