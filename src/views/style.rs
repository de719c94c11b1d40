use egui::{
    text::LayoutJob, Color32, Context, CornerRadius, FontFamily, FontId, Frame, Margin, Stroke,
    TextFormat, Ui, Visuals, WidgetText,
};

pub const COLOR_ACCENT: Color32 = Color32::from_rgb(20, 164, 77);
pub const COLOR_ACCENT_SOFT: Color32 = Color32::from_rgba_premultiplied(20, 164, 77, 150);
pub const COLOR_ACCENT_FILL: Color32 = Color32::from_rgba_premultiplied(10, 82, 38, 64);

pub const COLOR_BG: Color32 = Color32::from_rgb(10, 18, 13);
pub const COLOR_CARD: Color32 = Color32::from_rgb(17, 28, 21);
pub const COLOR_TEXT: Color32 = Color32::from_rgb(232, 243, 236);
pub const COLOR_MUTED: Color32 = Color32::from_rgb(155, 183, 168);
pub const COLOR_SUBTLE: Color32 = Color32::from_rgb(170, 199, 182);
pub const COLOR_GRID: Color32 = Color32::from_rgba_premultiplied(255, 255, 255, 20);

// Background particle field.
pub const COLOR_VEIL: Color32 = Color32::from_rgba_premultiplied(1, 8, 4, 13);
pub const COLOR_LINK: Color32 = Color32::from_rgba_premultiplied(4, 33, 15, 20);
pub const COLOR_DOT: Color32 = Color32::from_rgba_premultiplied(7, 57, 27, 90);

pub const HEADING_SIZE: f32 = 24.0;

/// Install the page palette on the egui context. Called once at start.
pub fn apply(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = COLOR_BG;
    visuals.window_fill = COLOR_CARD;
    visuals.override_text_color = Some(COLOR_TEXT);
    visuals.hyperlink_color = COLOR_ACCENT;
    visuals.selection.bg_fill = COLOR_ACCENT_FILL;
    visuals.selection.stroke = Stroke::new(1.0, COLOR_ACCENT);
    ctx.set_visuals(visuals);
}

pub fn header_accent(text: &str) -> impl Into<WidgetText> {
    let mut job = LayoutJob::default();
    job.append(
        text,
        0.0,
        TextFormat {
            font_id: FontId::new(HEADING_SIZE, FontFamily::Proportional),
            color: COLOR_ACCENT,
            ..Default::default()
        },
    );
    WidgetText::from(job)
}

/// Card container used by the gallery, carousel and blog list.
pub fn card_frame() -> Frame {
    Frame::new()
        .fill(COLOR_CARD)
        .stroke(Stroke::new(1.0, COLOR_GRID))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(12))
}

/// Small pill label for a tool name.
pub fn badge(ui: &mut Ui, text: &str) {
    Frame::new()
        .fill(COLOR_ACCENT_FILL)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(text)
                    .size(11.0)
                    .color(COLOR_SUBTLE),
            );
        });
}
