use serde::{Deserialize, Serialize};

/// Cake base shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Square,
    Circle,
    Heart,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Square, Shape::Circle, Shape::Heart];
}

/// Sponge flavour, decides the base colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Batter {
    Vanilla,
    Chocolate,
    Strawberry,
}

impl Batter {
    pub const ALL: [Batter; 3] = [Batter::Vanilla, Batter::Chocolate, Batter::Strawberry];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icing {
    Chocolate,
    Vanilla,
    Berry,
}

impl Icing {
    /// Every choice offered to the player, `None` meaning no icing
    pub const CHOICES: [Option<Icing>; 4] = [
        Some(Icing::Chocolate),
        Some(Icing::Vanilla),
        Some(Icing::Berry),
        None,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topping {
    Sprinkles,
    Cherry,
    Candy,
}

impl Topping {
    /// Every choice offered to the player, `None` meaning no topping
    pub const CHOICES: [Option<Topping>; 4] = [
        Some(Topping::Sprinkles),
        Some(Topping::Cherry),
        Some(Topping::Candy),
        None,
    ];
}

/// Which field of a cake an action edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Shape,
    Batter,
    Icing,
    Topping,
}

/// A value for one cake field
///
/// Icing and topping carry an `Option` so that "none" is a real choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Shape(Shape),
    Batter(Batter),
    Icing(Option<Icing>),
    Topping(Option<Topping>),
}

impl Attribute {
    pub fn kind(&self) -> AttributeKind {
        match self {
            Attribute::Shape(_) => AttributeKind::Shape,
            Attribute::Batter(_) => AttributeKind::Batter,
            Attribute::Icing(_) => AttributeKind::Icing,
            Attribute::Topping(_) => AttributeKind::Topping,
        }
    }

    /// All values selectable for a field, in menu order
    pub fn choices(kind: AttributeKind) -> Vec<Attribute> {
        match kind {
            AttributeKind::Shape => Shape::ALL.iter().map(|&s| Attribute::Shape(s)).collect(),
            AttributeKind::Batter => Batter::ALL.iter().map(|&b| Attribute::Batter(b)).collect(),
            AttributeKind::Icing => Icing::CHOICES.iter().map(|&i| Attribute::Icing(i)).collect(),
            AttributeKind::Topping => {
                Topping::CHOICES.iter().map(|&t| Attribute::Topping(t)).collect()
            }
        }
    }
}

/// Four-field cake record, used both for the player's cake and the target
///
/// Unset and "none" are the same thing for icing and topping, so two cakes
/// without icing compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CakeOrder {
    pub shape: Option<Shape>,
    pub batter: Option<Batter>,
    pub icing: Option<Icing>,
    pub topping: Option<Topping>,
}

impl CakeOrder {
    /// Empty cake, nothing chosen yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Fully specified order
    pub fn with(
        shape: Shape,
        batter: Batter,
        icing: Option<Icing>,
        topping: Option<Topping>,
    ) -> Self {
        Self {
            shape: Some(shape),
            batter: Some(batter),
            icing,
            topping,
        }
    }

    /// Store one field
    pub fn apply(&mut self, attribute: Attribute) {
        match attribute {
            Attribute::Shape(shape) => self.shape = Some(shape),
            Attribute::Batter(batter) => self.batter = Some(batter),
            Attribute::Icing(icing) => self.icing = icing,
            Attribute::Topping(topping) => self.topping = topping,
        }
    }

    /// Whether a field currently holds this value
    pub fn holds(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Shape(shape) => self.shape == Some(shape),
            Attribute::Batter(batter) => self.batter == Some(batter),
            Attribute::Icing(icing) => self.icing == icing,
            Attribute::Topping(topping) => self.topping == topping,
        }
    }

    /// Exact comparison across all four fields
    pub fn matches(&self, target: &CakeOrder) -> bool {
        self == target
    }
}
