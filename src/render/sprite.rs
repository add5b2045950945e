use super::canvas::{Canvas, DrawOp, Rgba};
use super::palette;
use crate::game::{CakeOrder, Shape, Topping};

const STEM: Rgba = Rgba::hex(0x2e7d32);

/// Square pixel portrait of a cake
///
/// Layers go bottom to top: base (shape, batter colour), icing (same shape,
/// smaller), topping. A cake without a shape draws nothing at all.
#[derive(Debug, Clone, Copy)]
pub struct CakeSprite {
    size: u32,
}

/// Where the base sits inside the sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseLayout {
    pub cx: i32,
    pub cy: i32,
    pub half: i32,
}

impl CakeSprite {
    pub fn new(size: u32) -> Self {
        Self { size: size.max(16) }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn layout(&self) -> BaseLayout {
        let s = self.size as i32;
        BaseLayout {
            cx: s / 2,
            cy: s * 6 / 10,
            half: s * 3 / 10,
        }
    }

    /// Draw operations for an order, without executing them
    pub fn ops(&self, order: &CakeOrder) -> Vec<DrawOp> {
        let mut ops = vec![DrawOp::Clear(Rgba::TRANSPARENT)];

        let Some(shape) = order.shape else {
            return ops;
        };

        let BaseLayout { cx, cy, half } = self.layout();
        let base = order.batter.map(palette::batter_color).unwrap_or(palette::UNBAKED);
        ops.extend(shape_ops(shape, cx, cy, half, base));

        if let Some(icing) = order.icing {
            let icing_half = half * 8 / 10;
            ops.extend(shape_ops(
                shape,
                cx,
                cy - half / 10,
                icing_half,
                palette::icing_color(icing),
            ));
        }

        if let Some(topping) = order.topping {
            ops.extend(self.topping_ops(topping, cx, cy - half));
        }

        ops
    }

    /// Rendered sprite
    pub fn render(&self, order: &CakeOrder) -> Canvas {
        Canvas::new(self.size, self.size)
            .draw_all(self.ops(order))
            .execute_ops()
    }

    /// Decoration resting on the top edge at (cx, top)
    fn topping_ops(&self, topping: Topping, cx: i32, top: i32) -> Vec<DrawOp> {
        let unit = (self.size as i32 / 16).max(2);
        let color = palette::topping_color(topping);

        match topping {
            Topping::Cherry => vec![
                DrawOp::Line {
                    x1: cx,
                    y1: top - unit,
                    x2: cx + unit,
                    y2: top - unit * 3,
                    color: STEM,
                },
                DrawOp::FilledCircle {
                    cx,
                    cy: top - unit,
                    radius: unit as u32,
                    color,
                },
            ],
            Topping::Sprinkles => palette::SPRINKLE_COLORS
                .iter()
                .enumerate()
                .map(|(i, &color)| DrawOp::Rect {
                    x: cx - unit * 2 + (i as i32) * unit,
                    y: top - unit + (i as i32 % 2) * (unit / 2),
                    width: (unit / 2).max(1) as u32,
                    height: unit as u32,
                    color,
                })
                .collect(),
            Topping::Candy => vec![
                DrawOp::Triangle {
                    a: (cx - unit * 2, top - unit * 2),
                    b: (cx - unit * 2, top),
                    c: (cx, top - unit),
                    color,
                },
                DrawOp::Triangle {
                    a: (cx + unit * 2, top - unit * 2),
                    b: (cx + unit * 2, top),
                    c: (cx, top - unit),
                    color,
                },
                DrawOp::FilledCircle {
                    cx,
                    cy: top - unit,
                    radius: unit as u32,
                    color,
                },
                DrawOp::FilledCircle {
                    cx,
                    cy: top - unit,
                    radius: (unit / 3).max(1) as u32,
                    color: Rgba::WHITE,
                },
            ],
        }
    }
}

/// Filled outline of a shape centred on (cx, cy) spanning `half` each way
fn shape_ops(shape: Shape, cx: i32, cy: i32, half: i32, color: Rgba) -> Vec<DrawOp> {
    match shape {
        Shape::Square => vec![DrawOp::Rect {
            x: cx - half,
            y: cy - half,
            width: (half * 2) as u32,
            height: (half * 2) as u32,
            color,
        }],
        Shape::Circle => vec![DrawOp::FilledCircle {
            cx,
            cy,
            radius: half as u32,
            color,
        }],
        Shape::Heart => {
            let lobe = half / 2;
            let shoulder = cy - lobe / 2;
            vec![
                DrawOp::FilledCircle { cx: cx - lobe, cy: shoulder, radius: lobe as u32, color },
                DrawOp::FilledCircle { cx: cx + lobe, cy: shoulder, radius: lobe as u32, color },
                DrawOp::Triangle {
                    a: (cx - half, shoulder),
                    b: (cx + half, shoulder),
                    c: (cx, cy + half),
                    color,
                },
            ]
        }
    }
}
