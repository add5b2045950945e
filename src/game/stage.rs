use super::order::{AttributeKind, CakeOrder};

/// Conveyor stage, ordered; `Finish` is terminal until the cake resets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Shape,
    Batter,
    Icing,
    Topping,
    Finish,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Shape,
        Stage::Batter,
        Stage::Icing,
        Stage::Topping,
        Stage::Finish,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Stage> {
        Self::ALL.get(index).copied()
    }

    /// Following stage; `Finish` has none
    pub fn next(self) -> Option<Stage> {
        Self::from_index(self.index() + 1)
    }

    /// Field editable at this stage
    pub fn edits(self) -> Option<AttributeKind> {
        match self {
            Stage::Shape => Some(AttributeKind::Shape),
            Stage::Batter => Some(AttributeKind::Batter),
            Stage::Icing => Some(AttributeKind::Icing),
            Stage::Topping => Some(AttributeKind::Topping),
            Stage::Finish => None,
        }
    }

    /// True when the field this stage edits must be filled before moving on
    pub fn is_satisfied_by(self, cake: &CakeOrder) -> bool {
        match self {
            Stage::Shape => cake.shape.is_some(),
            Stage::Batter => cake.batter.is_some(),
            Stage::Icing | Stage::Topping | Stage::Finish => true,
        }
    }

    /// Horizontal cake position on the belt, percent of belt width
    pub fn belt_position(self) -> f32 {
        match self {
            Stage::Shape => 10.0,
            Stage::Batter => 35.0,
            Stage::Icing => 60.0,
            Stage::Topping => 85.0,
            Stage::Finish => 110.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Shape => "Shape",
            Stage::Batter => "Batter",
            Stage::Icing => "Icing",
            Stage::Topping => "Topping",
            Stage::Finish => "Finish",
        }
    }
}
