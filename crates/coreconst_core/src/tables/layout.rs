//! UI layout constants: margins, corners, orientation, alignment.

use crate::groups::EnumGroup;
use crate::record::ConstantDef;

pub const LAYOUT: &[ConstantDef] = &[
    ConstantDef::member(EnumGroup::Margin, "MARGIN_LEFT", 0),
    ConstantDef::member(EnumGroup::Margin, "MARGIN_TOP", 1),
    ConstantDef::member(EnumGroup::Margin, "MARGIN_RIGHT", 2),
    ConstantDef::member(EnumGroup::Margin, "MARGIN_BOTTOM", 3),
    ConstantDef::member(EnumGroup::Corner, "CORNER_TOP_LEFT", 0),
    ConstantDef::member(EnumGroup::Corner, "CORNER_TOP_RIGHT", 1),
    ConstantDef::member(EnumGroup::Corner, "CORNER_BOTTOM_RIGHT", 2),
    ConstantDef::member(EnumGroup::Corner, "CORNER_BOTTOM_LEFT", 3),
    // vertical is registered first but is not the zero value
    ConstantDef::member(EnumGroup::Orientation, "VERTICAL", 1),
    ConstantDef::member(EnumGroup::Orientation, "HORIZONTAL", 0),
    ConstantDef::member(EnumGroup::HAlign, "HALIGN_LEFT", 0),
    ConstantDef::member(EnumGroup::HAlign, "HALIGN_CENTER", 1),
    ConstantDef::member(EnumGroup::HAlign, "HALIGN_RIGHT", 2),
    ConstantDef::member(EnumGroup::HAlign, "HALIGN_FILL", 3),
    ConstantDef::member(EnumGroup::VAlign, "VALIGN_TOP", 0),
    ConstantDef::member(EnumGroup::VAlign, "VALIGN_CENTER", 1),
    ConstantDef::member(EnumGroup::VAlign, "VALIGN_BOTTOM", 2),
];
