use egui::{Align, Image, RichText, ScrollArea, Ui, Vec2};

use super::style;
use crate::carousel::{self, CarouselState};
use crate::config;
use crate::content::Project;

const SLIDE_WIDTH: f32 = 340.0;
const THUMB_HEIGHT: f32 = 140.0;

/// Featured-project carousel: prev/next buttons around a horizontal
/// strip of up to three slides.
pub fn show(ui: &mut Ui, projects: &[Project], state: &mut CarouselState) {
    let slides = carousel::slides(projects);
    state.clamp(slides.len());
    if slides.is_empty() {
        ui.label(RichText::new("No featured projects yet.").color(style::COLOR_MUTED));
        return;
    }

    let mut moved = false;
    ui.horizontal(|ui| {
        if ui.button("◀").clicked() {
            state.retreat();
            moved = true;
        }
        if ui.button("▶").clicked() {
            state.advance(slides.len());
            moved = true;
        }
        ui.label(
            RichText::new(format!("{} / {}", state.idx() + 1, slides.len()))
                .color(style::COLOR_MUTED),
        );
    });
    ui.add_space(6.0);

    ScrollArea::horizontal()
        .id_salt("highlights-strip")
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for (i, project) in slides.iter().enumerate() {
                    let response = slide(ui, project);
                    if moved && i == state.idx() {
                        response.scroll_to_me(Some(Align::Min));
                    }
                }
            });
        });
}

fn slide(ui: &mut Ui, project: &Project) -> egui::Response {
    style::card_frame()
        .show(ui, |ui| {
            ui.set_width(SLIDE_WIDTH);
            ui.add(
                Image::new(config::asset_uri(project.thumbnail()))
                    .fit_to_exact_size(Vec2::new(SLIDE_WIDTH, THUMB_HEIGHT))
                    .show_loading_spinner(false),
            );
            ui.add_space(6.0);
            ui.label(RichText::new(&project.title).strong());
            ui.label(
                RichText::new(&project.problem)
                    .size(12.0)
                    .color(style::COLOR_MUTED),
            );
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                for tool in &project.tools {
                    style::badge(ui, tool);
                }
            });
        })
        .response
}
