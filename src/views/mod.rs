pub mod blog;
pub mod contact;
pub mod gallery;
pub mod highlights;
pub mod modal;
pub mod nav;
pub mod resume;
pub mod style;

use egui::{Context, Id, Rect, Ui, Vec2};

/// Fade a section in the first time it scrolls into view. One-shot:
/// once seen, a section stays at full opacity even after scrolling back
/// off-screen. Decorative only; content is laid out either way.
pub fn reveal<R>(
    ui: &mut Ui,
    id_salt: impl std::hash::Hash,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> R {
    let id = ui.id().with(id_salt);
    let probe = Rect::from_min_size(ui.cursor().min, Vec2::splat(1.0));
    let seen = mark_seen(ui.ctx(), id, ui.is_rect_visible(probe));
    let opacity = ui.ctx().animate_bool_with_time(id.with("fade"), seen, 0.6);
    ui.scope(|ui| {
        ui.set_opacity(opacity.max(0.05));
        add_contents(ui)
    })
    .inner
}

/// Latches per-id visibility: flips to true the first time `visible`
/// is, and never resets for the lifetime of the app.
fn mark_seen(ctx: &Context, id: Id, visible: bool) -> bool {
    ctx.data_mut(|d| {
        let seen = d.get_temp_mut_or(id, false);
        *seen |= visible;
        *seen
    })
}

/// Section heading shared by every page block. The response doubles as
/// the nav scroll anchor.
pub fn section_heading(ui: &mut Ui, text: &str) -> egui::Response {
    ui.add_space(24.0);
    let response = ui.label(style::header_accent(text));
    ui.add_space(8.0);
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seen_latches_on_first_visibility() {
        let ctx = Context::default();
        let id = Id::new("section");
        assert!(!mark_seen(&ctx, id, false));
        assert!(mark_seen(&ctx, id, true));
        assert!(mark_seen(&ctx, id, false));
    }

    #[test]
    fn sections_latch_independently() {
        let ctx = Context::default();
        assert!(mark_seen(&ctx, Id::new("a"), true));
        assert!(!mark_seen(&ctx, Id::new("b"), false));
    }
}
