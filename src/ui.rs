//! Shared widgets — the card face, the pulse ring and the icon glyph set.

use egui::epaint::{Mesh, Vertex, WHITE_UV};
use egui::{
    Align2, Color32, FontId, Painter, Rect, Response, Rounding, Sense, Shape, Stroke, Ui,
};

use crate::cards::Card;

pub const CARD_SIZE: egui::Vec2 = egui::vec2(300.0, 180.0);
const CARD_ROUNDING: f32 = 20.0;

/// Seconds per pulse cycle.
pub const PULSE_PERIOD: f32 = 1.2;
const PULSE_MAX_GROWTH: f32 = 0.3;

/// Map an icon key to its glyph. Unknown keys get a neutral fallback.
pub fn icon_glyph(key: &str) -> &'static str {
    match key {
        "creditcard.fill" => "💳",
        "bolt.fill" => "⚡",
        "sun.max.fill" => "☀",
        "gearshape.fill" => "⚙",
        "questionmark.circle.fill" => "❓",
        "person.crop.circle.fill" => "👤",
        _ => "▢",
    }
}

/// Paint one card face (gradient fill, icon glyph, name, balance) and
/// report clicks on it.
pub fn card_face(ui: &mut Ui, card: &Card) -> Response {
    let (rect, response) = ui.allocate_exact_size(CARD_SIZE, Sense::click());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let painter = ui.painter();
    let rounding = Rounding::same(CARD_ROUNDING);

    // Drop shadow
    painter.rect_filled(
        rect.translate(egui::vec2(0.0, 4.0)),
        rounding,
        Color32::from_black_alpha(60),
    );

    // Base fill plus a top-to-center highlight. egui has no rounded gradient
    // fill, so the highlight mesh is inset past the corner radius.
    painter.rect_filled(rect, rounding, card.color.bottom());
    let grad = Rect::from_min_max(
        egui::pos2(rect.left() + CARD_ROUNDING, rect.top()),
        egui::pos2(rect.right() - CARD_ROUNDING, rect.center().y),
    );
    let top = card.color.top();
    let faded = Color32::from_rgba_unmultiplied(top.r(), top.g(), top.b(), 0);
    let mut mesh = Mesh::default();
    for (pos, color) in [
        (grad.left_top(), top),
        (grad.right_top(), top),
        (grad.left_bottom(), faded),
        (grad.right_bottom(), faded),
    ] {
        mesh.vertices.push(Vertex {
            pos,
            uv: WHITE_UV,
            color,
        });
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(2, 1, 3);
    painter.add(Shape::mesh(mesh));

    // Icon top-left, name and balance bottom-left
    let inset = 16.0;
    painter.text(
        rect.left_top() + egui::vec2(inset, inset),
        Align2::LEFT_TOP,
        icon_glyph(card.icon),
        FontId::proportional(30.0),
        Color32::WHITE,
    );
    painter.text(
        egui::pos2(rect.left() + inset, rect.bottom() - inset - 26.0),
        Align2::LEFT_BOTTOM,
        &card.name,
        FontId::proportional(15.0),
        Color32::WHITE,
    );
    painter.text(
        egui::pos2(rect.left() + inset, rect.bottom() - inset),
        Align2::LEFT_BOTTOM,
        &card.balance,
        FontId::proportional(21.0),
        Color32::WHITE,
    );

    response
}

/// Ease-out cubic.
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Phase in `[0, 1)` of the repeating pulse at `elapsed` seconds.
pub fn pulse_phase(elapsed: f32) -> f32 {
    ease_out((elapsed % PULSE_PERIOD) / PULSE_PERIOD)
}

/// Draw the outward pulse ring around `rect`: scale 1.0 → 1.3 while fading
/// out, repeating as long as the detail screen stays visible. Purely
/// cosmetic, no state beyond the elapsed time.
pub fn pulse_ring(painter: &Painter, rect: Rect, elapsed: f32) {
    let phase = pulse_phase(elapsed);
    let scaled = Rect::from_center_size(rect.center(), rect.size() * (1.0 + PULSE_MAX_GROWTH * phase));
    let alpha = ((1.0 - phase) * 153.0) as u8;
    let color = Color32::from_rgba_unmultiplied(60, 120, 255, alpha);
    painter.rect_stroke(scaled, Rounding::same(CARD_ROUNDING), Stroke::new(3.0, color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_glyphs() {
        assert_eq!(icon_glyph("creditcard.fill"), "💳");
        assert_eq!(icon_glyph("bolt.fill"), "⚡");
        assert_eq!(icon_glyph("sun.max.fill"), "☀");
    }

    #[test]
    fn test_icon_glyph_fallback() {
        assert_eq!(icon_glyph("does.not.exist"), "▢");
        assert_eq!(icon_glyph(""), "▢");
    }

    #[test]
    fn test_pulse_phase_cycle() {
        assert_eq!(pulse_phase(0.0), 0.0);
        // Grows within a cycle…
        assert!(pulse_phase(0.3) > pulse_phase(0.1));
        assert!(pulse_phase(1.1) > 0.9);
        // …and wraps back at the period boundary.
        assert!(pulse_phase(PULSE_PERIOD + 0.01) < 0.1);
    }

    #[test]
    fn test_pulse_phase_bounded() {
        for i in 0..240 {
            let phase = pulse_phase(i as f32 * 0.05);
            assert!((0.0..1.0).contains(&phase));
        }
    }
}
