/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Opaque colour from 0xRRGGBB
    pub const fn hex(value: u32) -> Self {
        Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// 2D drawing operations for canvas
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fill entire canvas
    Clear(Rgba),

    /// Filled axis-aligned rectangle
    Rect { x: i32, y: i32, width: u32, height: u32, color: Rgba },

    /// Filled circle at (cx, cy)
    FilledCircle { cx: i32, cy: i32, radius: u32, color: Rgba },

    /// Filled triangle with corners a, b, c
    Triangle { a: (i32, i32), b: (i32, i32), c: (i32, i32), color: Rgba },

    /// One-pixel line from (x1, y1) to (x2, y2)
    Line { x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba },
}

/// Canvas state - RGBA pixel buffer with queued draw operations
///
/// Coordinates are signed so shapes may hang off the edge; pixels outside
/// the canvas are dropped.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Vec<u8>,
    operations: Vec<DrawOp>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create transparent canvas with dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; (width * height * 4) as usize],
            operations: Vec::new(),
            width,
            height,
        }
    }

    /// Add draw operation - functional style
    pub fn draw(mut self, op: DrawOp) -> Self {
        self.operations.push(op);
        self
    }

    /// Add several operations in order
    pub fn draw_all(mut self, ops: impl IntoIterator<Item = DrawOp>) -> Self {
        self.operations.extend(ops);
        self
    }

    /// Execute all pending operations and return new canvas
    pub fn execute_ops(&self) -> Self {
        let mut canvas = Self {
            pixels: self.pixels.clone(),
            operations: Vec::new(),
            width: self.width,
            height: self.height,
        };

        for op in &self.operations {
            canvas.execute_op(op);
        }

        canvas
    }

    fn execute_op(&mut self, op: &DrawOp) {
        match *op {
            DrawOp::Clear(color) => self.clear(color),
            DrawOp::Rect { x, y, width, height, color } => self.fill_rect(x, y, width, height, color),
            DrawOp::FilledCircle { cx, cy, radius, color } => self.fill_circle(cx, cy, radius, color),
            DrawOp::Triangle { a, b, c, color } => self.fill_triangle(a, b, c, color),
            DrawOp::Line { x1, y1, x2, y2, color } => self.draw_line(x1, y1, x2, y2, color),
        }
    }

    fn clear(&mut self, color: Rgba) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&color.to_array());
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }

        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
        for dy in 0..height as i32 {
            for dx in 0..width as i32 {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Rgba) {
        let r = radius as i32;
        let r_sq = r * r;

        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r_sq {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Scan the bounding box and keep points on the inner side of all edges
    fn fill_triangle(&mut self, a: (i32, i32), b: (i32, i32), c: (i32, i32), color: Rgba) {
        let edge = |p: (i32, i32), q: (i32, i32), x: i32, y: i32| {
            (q.0 - p.0) * (y - p.1) - (q.1 - p.1) * (x - p.0)
        };

        let min_x = a.0.min(b.0).min(c.0);
        let max_x = a.0.max(b.0).max(c.0);
        let min_y = a.1.min(b.1).min(c.1);
        let max_y = a.1.max(b.1).max(c.1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let w0 = edge(b, c, x, y);
                let w1 = edge(c, a, x, y);
                let w2 = edge(a, b, x, y);
                let inside = (w0 >= 0 && w1 >= 0 && w2 >= 0) || (w0 <= 0 && w1 <= 0 && w2 <= 0);
                if inside {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Bresenham
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba) {
        let (mut x, mut y) = (x1, y1);

        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x, y, color);

            if x == x2 && y == y2 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Colour at (x, y), if inside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        let px = &self.pixels[idx..idx + 4];
        Some(Rgba::new(px[0], px[1], px[2], px[3]))
    }

    /// Get pixel buffer
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get canvas dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
