// hud.rs - egui projection of the session plus input buttons
use crate::game::{Action, Attribute, CakeOrder, GameSession, NotificationKind, Stage};
use crate::render::{palette, CakeSprite, Rgba};

use super::banner::NotificationBanner;

const SPRITE_PX: u32 = 128;
const BELT_WIDTH: f32 = 620.0;
const BELT_HEIGHT: f32 = 150.0;

fn color32(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// GPU copy of one cake sprite, re-uploaded only when the order changes
struct CachedCake {
    order: CakeOrder,
    handle: egui::TextureHandle,
}

/// Texture cache for the target and player cakes
pub struct CakeTextures {
    sprite: CakeSprite,
    target: Option<CachedCake>,
    player: Option<CachedCake>,
}

impl CakeTextures {
    pub fn new() -> Self {
        Self {
            sprite: CakeSprite::new(SPRITE_PX),
            target: None,
            player: None,
        }
    }

    fn refresh(
        sprite: &CakeSprite,
        slot: &mut Option<CachedCake>,
        ctx: &egui::Context,
        name: &str,
        order: &CakeOrder,
    ) -> egui::TextureId {
        match slot {
            Some(cached) if cached.order == *order => cached.handle.id(),
            Some(cached) => {
                cached.handle.set(Self::image(sprite, order), egui::TextureOptions::NEAREST);
                cached.order = *order;
                cached.handle.id()
            }
            None => {
                let handle =
                    ctx.load_texture(name, Self::image(sprite, order), egui::TextureOptions::NEAREST);
                let id = handle.id();
                *slot = Some(CachedCake { order: *order, handle });
                id
            }
        }
    }

    fn image(sprite: &CakeSprite, order: &CakeOrder) -> egui::ColorImage {
        let canvas = sprite.render(order);
        let (w, h) = canvas.dimensions();
        egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], canvas.pixels())
    }

    fn target(&mut self, ctx: &egui::Context, order: &CakeOrder) -> egui::TextureId {
        Self::refresh(&self.sprite, &mut self.target, ctx, "target-cake", order)
    }

    fn player(&mut self, ctx: &egui::Context, order: &CakeOrder) -> egui::TextureId {
        Self::refresh(&self.sprite, &mut self.player, ctx, "player-cake", order)
    }
}

impl Default for CakeTextures {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw the whole HUD; returns the actions clicked this frame
pub fn draw(
    ctx: &egui::Context,
    session: &GameSession,
    banner: &NotificationBanner,
    textures: &mut CakeTextures,
) -> Vec<Action> {
    let mut actions = Vec::new();
    let sprite_size = egui::vec2(SPRITE_PX as f32, SPRITE_PX as f32);

    egui::Window::new("Order")
        .title_bar(true)
        .resizable(false)
        .fixed_pos(egui::pos2(10.0, 10.0))
        .show(ctx, |ui| {
            let target_id = textures.target(ctx, session.target());
            ui.add(egui::Image::new((target_id, sprite_size)));
            ui.monospace(describe(session.target()));
        });

    egui::Window::new("Status")
        .title_bar(false)
        .resizable(false)
        .fixed_pos(egui::pos2(180.0, 10.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("Score: {}", session.score()))
                        .size(24.0)
                        .color(egui::Color32::from_rgb(74, 158, 255)),
                );
                ui.add_space(20.0);

                let time_color = if session.time_remaining() <= 10 {
                    egui::Color32::from_rgb(255, 100, 100)
                } else {
                    egui::Color32::GRAY
                };
                ui.label(
                    egui::RichText::new(format!("Time: {}s", session.time_remaining()))
                        .size(24.0)
                        .color(time_color),
                );
            });
        });

    egui::Window::new("Conveyor")
        .title_bar(false)
        .resizable(false)
        .fixed_pos(egui::pos2(10.0, 230.0))
        .show(ctx, |ui| {
            let player_id = textures.player(ctx, session.cake());
            draw_belt(ui, session.stage(), player_id, sprite_size);

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(4.0);

            if let Some(kind) = session.stage().edits() {
                ui.label(
                    egui::RichText::new(format!("Choose {}", session.stage().label()))
                        .size(16.0)
                        .color(egui::Color32::from_rgb(200, 150, 100)),
                );
                ui.horizontal(|ui| {
                    for (slot, attribute) in Attribute::choices(kind).into_iter().enumerate() {
                        if choice_button(ui, slot, attribute, session.cake().holds(attribute)) {
                            actions.push(Action::Select(attribute));
                        }
                    }
                });
            } else {
                ui.label(egui::RichText::new("Checking order...").size(16.0));
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let can_advance = !session.is_over() && !session.awaiting_reset();
                if ui
                    .add_enabled(can_advance, egui::Button::new("Next station ▶ (Space)"))
                    .clicked()
                {
                    actions.push(Action::Advance);
                }
                if ui.button("Restart (R)").clicked() {
                    actions.push(Action::Restart);
                }
            });
        });

    draw_banner(ctx, banner);

    actions
}

fn draw_belt(ui: &mut egui::Ui, stage: Stage, cake: egui::TextureId, sprite_size: egui::Vec2) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(BELT_WIDTH, BELT_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);

    let belt = egui::Rect::from_min_max(
        egui::pos2(rect.left(), rect.bottom() - 14.0),
        rect.right_bottom(),
    );
    painter.rect_filled(belt, 3.0, egui::Color32::from_gray(70));

    // Finish sits past the last station, so scale by 120% of the belt
    let x_for = |s: Stage| rect.left() + rect.width() * s.belt_position() / 120.0;

    for station in Stage::ALL {
        let marker = egui::pos2(x_for(station), belt.top());
        let color = if station == stage {
            egui::Color32::from_rgb(100, 200, 100)
        } else {
            egui::Color32::GRAY
        };
        painter.text(
            marker,
            egui::Align2::CENTER_BOTTOM,
            station.label(),
            egui::FontId::proportional(12.0),
            color,
        );
    }

    let centre = egui::pos2(x_for(stage), belt.top() - 16.0 - sprite_size.y / 2.0);
    egui::Image::new((cake, sprite_size))
        .paint_at(ui, egui::Rect::from_center_size(centre, sprite_size));
}

fn choice_button(ui: &mut egui::Ui, slot: usize, attribute: Attribute, selected: bool) -> bool {
    let text = format!("{} {}", slot + 1, palette::attribute_label(attribute));
    let response = ui.add(egui::Button::new(text).selected(selected));

    if let Some(swatch) = palette::attribute_swatch(attribute) {
        let dot = egui::pos2(response.rect.right() - 6.0, response.rect.top() + 6.0);
        ui.painter().circle_filled(dot, 4.0, color32(swatch));
    }

    response.clicked()
}

fn draw_banner(ctx: &egui::Context, banner: &NotificationBanner) {
    let Some(note) = banner.current() else {
        return;
    };

    let color = match note.kind {
        NotificationKind::Warning => egui::Color32::from_rgb(255, 200, 100),
        NotificationKind::Matched => egui::Color32::from_rgb(100, 255, 100),
        NotificationKind::Mismatched => egui::Color32::from_rgb(255, 100, 100),
        NotificationKind::Summary => egui::Color32::from_rgb(74, 158, 255),
    }
    .gamma_multiply(banner.opacity());

    egui::Area::new(egui::Id::new("notification-banner"))
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 120.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new(&note.message).size(22.0).color(color));
            });
        });
}

/// One-line text form of an order, for the order card
pub fn describe(order: &CakeOrder) -> String {
    let shape = order.shape.map(palette::shape_label).unwrap_or("?");
    let batter = order.batter.map(palette::batter_label).unwrap_or("?");
    let icing = order.icing.map(palette::icing_label).unwrap_or("no icing");
    let topping = order
        .topping
        .map(|t| format!("{} {}", palette::topping_glyph(t), palette::topping_label(t)))
        .unwrap_or_else(|| "no topping".to_string());

    format!("{shape} / {batter} / {icing} / {topping}")
}
