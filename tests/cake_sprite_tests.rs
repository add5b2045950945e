use cake_factory::game::{Batter, CakeOrder, Icing, Shape, Topping};
use cake_factory::render::{palette, BaseLayout, CakeSprite, Canvas, DrawOp, Rgba};

fn sprite() -> CakeSprite {
    CakeSprite::new(128)
}

fn base_only(shape: Shape, batter: Option<Batter>) -> CakeOrder {
    CakeOrder {
        shape: Some(shape),
        batter,
        ..CakeOrder::new()
    }
}

// ============================================================================
// Base Layer Tests
// ============================================================================

#[test]
fn test_no_shape_means_blank_sprite() {
    // Batter and toppings alone never show without a base
    let order = CakeOrder {
        shape: None,
        batter: Some(Batter::Chocolate),
        icing: Some(Icing::Vanilla),
        topping: Some(Topping::Cherry),
    };
    let canvas = sprite().render(&order);

    assert!(canvas.pixels().chunks_exact(4).all(|px| px[3] == 0));
}

#[test]
fn test_unbaked_base_uses_placeholder() {
    let sprite = sprite();
    let BaseLayout { cx, cy, .. } = sprite.layout();
    let canvas = sprite.render(&base_only(Shape::Square, None));

    assert_eq!(canvas.pixel(cx as u32, cy as u32), Some(palette::UNBAKED));
}

#[test]
fn test_every_batter_colours_the_base() {
    let sprite = sprite();
    let BaseLayout { cx, cy, .. } = sprite.layout();

    for shape in Shape::ALL {
        for batter in Batter::ALL {
            let canvas = sprite.render(&base_only(shape, Some(batter)));
            assert_eq!(
                canvas.pixel(cx as u32, cy as u32),
                Some(palette::batter_color(batter)),
                "{:?} {:?}",
                shape,
                batter
            );
        }
    }
}

#[test]
fn test_shapes_differ_at_corner() {
    let sprite = sprite();
    let BaseLayout { cx, cy, half } = sprite.layout();
    let corner = ((cx - half + 1) as u32, (cy + half - 2) as u32);
    let vanilla = palette::batter_color(Batter::Vanilla);

    let square = sprite.render(&base_only(Shape::Square, Some(Batter::Vanilla)));
    let circle = sprite.render(&base_only(Shape::Circle, Some(Batter::Vanilla)));

    assert_eq!(square.pixel(corner.0, corner.1), Some(vanilla));
    assert_eq!(circle.pixel(corner.0, corner.1), Some(Rgba::TRANSPARENT));
}

// ============================================================================
// Icing & Topping Tests
// ============================================================================

#[test]
fn test_icing_colours_centre() {
    let sprite = sprite();
    let BaseLayout { cx, cy, .. } = sprite.layout();

    for icing in [Icing::Chocolate, Icing::Vanilla, Icing::Berry] {
        let order = CakeOrder::with(Shape::Circle, Batter::Chocolate, Some(icing), None);
        let canvas = sprite.render(&order);
        assert_eq!(canvas.pixel(cx as u32, cy as u32), Some(palette::icing_color(icing)));
    }
}

#[test]
fn test_circle_keeps_batter_rim_under_icing() {
    let sprite = sprite();
    let BaseLayout { cx, cy, half } = sprite.layout();
    let order = CakeOrder::with(Shape::Circle, Batter::Chocolate, Some(Icing::Vanilla), None);
    let canvas = sprite.render(&order);

    let rim_y = (cy + half * 9 / 10) as u32;
    assert_eq!(canvas.pixel(cx as u32, rim_y), Some(palette::batter_color(Batter::Chocolate)));
}

#[test]
fn test_cherry_sits_above_base() {
    let sprite = sprite();
    let BaseLayout { cx, cy, half } = sprite.layout();
    let order = CakeOrder::with(Shape::Square, Batter::Vanilla, None, Some(Topping::Cherry));
    let canvas = sprite.render(&order);

    let unit = 128 / 16;
    let cherry_y = (cy - half - unit) as u32;
    assert_eq!(canvas.pixel(cx as u32, cherry_y), Some(palette::topping_color(Topping::Cherry)));
}

#[test]
fn test_each_topping_adds_pixels() {
    let sprite = sprite();
    let plain = sprite.render(&base_only(Shape::Heart, Some(Batter::Vanilla)));
    let opaque = |canvas: &Canvas| canvas.pixels().chunks_exact(4).filter(|px| px[3] > 0).count();

    for topping in [Topping::Sprinkles, Topping::Cherry, Topping::Candy] {
        let order = CakeOrder::with(Shape::Heart, Batter::Vanilla, None, Some(topping));
        let decorated = sprite.render(&order);
        assert!(opaque(&decorated) > opaque(&plain), "{:?} drew nothing", topping);
    }
}

#[test]
fn test_ops_start_with_clear() {
    let ops = sprite().ops(&CakeOrder::new());
    assert_eq!(ops, vec![DrawOp::Clear(Rgba::TRANSPARENT)]);
}
