use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::order::{Batter, CakeOrder, Icing, Shape, Topping};

/// Supplies target orders for a session
pub trait OrderSource {
    /// Produce the next order the player must match
    fn next_order(&mut self) -> CakeOrder;
}

/// Uniform random orders
///
/// Shape and batter are always set; icing and topping each pick uniformly
/// among their three flavours and "none".
#[derive(Debug, Clone)]
pub struct RandomOrders {
    rng: ChaCha8Rng,
}

impl RandomOrders {
    /// Reproducible sequence from a seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Fresh sequence from the thread RNG
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    /// Seeded when a seed is given, otherwise from entropy
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    fn pick<T: Copy>(&mut self, options: &[T]) -> T {
        options[self.rng.random_range(0..options.len())]
    }
}

impl OrderSource for RandomOrders {
    fn next_order(&mut self) -> CakeOrder {
        CakeOrder::with(
            self.pick(&Shape::ALL),
            self.pick(&Batter::ALL),
            self.pick(&Icing::CHOICES),
            self.pick(&Topping::CHOICES),
        )
    }
}

/// Replays a fixed list of orders, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedOrders {
    orders: Vec<CakeOrder>,
    cursor: usize,
}

impl ScriptedOrders {
    /// Falls back to a single empty-layer square vanilla cake when given nothing
    pub fn new(orders: Vec<CakeOrder>) -> Self {
        let orders = if orders.is_empty() {
            vec![CakeOrder::with(Shape::Square, Batter::Vanilla, None, None)]
        } else {
            orders
        };
        Self { orders, cursor: 0 }
    }

    /// Number of orders handed out so far
    pub fn issued(&self) -> usize {
        self.cursor
    }
}

impl OrderSource for ScriptedOrders {
    fn next_order(&mut self) -> CakeOrder {
        let order = self.orders[self.cursor % self.orders.len()];
        self.cursor += 1;
        order
    }
}
