// palette.rs - Display tables for every cake variant
//
// Each table is a closed match: adding a flavour without a colour fails to compile.
use super::canvas::Rgba;
use crate::game::{Attribute, Batter, Icing, Shape, Topping};

/// Base colour when the shape is chosen but the batter is not
pub const UNBAKED: Rgba = Rgba::hex(0xcccccc);

pub fn batter_color(batter: Batter) -> Rgba {
    match batter {
        Batter::Vanilla => Rgba::hex(0xf3e5ab),
        Batter::Chocolate => Rgba::hex(0x8b4513),
        Batter::Strawberry => Rgba::hex(0xffb6c1),
    }
}

pub fn icing_color(icing: Icing) -> Rgba {
    match icing {
        Icing::Chocolate => Rgba::hex(0x5d4037),
        Icing::Vanilla => Rgba::hex(0xffffff),
        Icing::Berry => Rgba::hex(0x9c27b0),
    }
}

pub fn topping_glyph(topping: Topping) -> &'static str {
    match topping {
        Topping::Sprinkles => "🌈",
        Topping::Cherry => "🍒",
        Topping::Candy => "🍬",
    }
}

/// Main colour used when a topping is drawn as pixels
pub fn topping_color(topping: Topping) -> Rgba {
    match topping {
        Topping::Sprinkles => Rgba::hex(0xff5722),
        Topping::Cherry => Rgba::hex(0xd50000),
        Topping::Candy => Rgba::hex(0xec407a),
    }
}

/// Rainbow used for sprinkles
pub const SPRINKLE_COLORS: [Rgba; 5] = [
    Rgba::hex(0xf44336),
    Rgba::hex(0xffeb3b),
    Rgba::hex(0x4caf50),
    Rgba::hex(0x2196f3),
    Rgba::hex(0x9c27b0),
];

pub fn shape_label(shape: Shape) -> &'static str {
    match shape {
        Shape::Square => "Square",
        Shape::Circle => "Circle",
        Shape::Heart => "Heart",
    }
}

pub fn batter_label(batter: Batter) -> &'static str {
    match batter {
        Batter::Vanilla => "Vanilla",
        Batter::Chocolate => "Chocolate",
        Batter::Strawberry => "Strawberry",
    }
}

pub fn icing_label(icing: Icing) -> &'static str {
    match icing {
        Icing::Chocolate => "Chocolate",
        Icing::Vanilla => "Vanilla",
        Icing::Berry => "Berry",
    }
}

pub fn topping_label(topping: Topping) -> &'static str {
    match topping {
        Topping::Sprinkles => "Sprinkles",
        Topping::Cherry => "Cherry",
        Topping::Candy => "Candy",
    }
}

/// Button caption for a selectable value
pub fn attribute_label(attribute: Attribute) -> String {
    match attribute {
        Attribute::Shape(shape) => shape_label(shape).to_string(),
        Attribute::Batter(batter) => batter_label(batter).to_string(),
        Attribute::Icing(Some(icing)) => icing_label(icing).to_string(),
        Attribute::Topping(Some(topping)) => {
            format!("{} {}", topping_glyph(topping), topping_label(topping))
        }
        Attribute::Icing(None) | Attribute::Topping(None) => "None".to_string(),
    }
}

/// Swatch shown beside a button, if the value has one
pub fn attribute_swatch(attribute: Attribute) -> Option<Rgba> {
    match attribute {
        Attribute::Shape(_) => None,
        Attribute::Batter(batter) => Some(batter_color(batter)),
        Attribute::Icing(icing) => icing.map(icing_color),
        Attribute::Topping(topping) => topping.map(topping_color),
    }
}
