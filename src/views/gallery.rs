use egui::{Image, RichText, Sense, Ui, UiBuilder, Vec2};

use super::style;
use crate::config;
use crate::content::Project;
use crate::filter::{self, CategoryFilter};

const CARD_WIDTH: f32 = 300.0;
const THUMB_HEIGHT: f32 = 120.0;

/// Filter chips plus the project grid. Clicking a card reports the
/// project id so the app can open the detail modal.
pub fn show(
    ui: &mut Ui,
    projects: &[Project],
    filter: &mut CategoryFilter,
) -> Option<String> {
    chips_row(ui, projects, filter);
    ui.add_space(12.0);
    grid(ui, &filter.apply(projects))
}

fn chips_row(ui: &mut Ui, projects: &[Project], filter: &mut CategoryFilter) {
    ui.horizontal_wrapped(|ui| {
        if ui.selectable_label(filter.is_all(), "All").clicked() {
            filter.select_all();
        }
        for category in filter::chips(projects) {
            if ui
                .selectable_label(filter.is_active(&category), &category)
                .clicked()
            {
                filter.select(&category);
            }
        }
    });
}

fn grid(ui: &mut Ui, visible: &[&Project]) -> Option<String> {
    let mut clicked = None;
    let cols = ((ui.available_width() / (CARD_WIDTH + 12.0)) as usize).max(1);
    for row in visible.chunks(cols) {
        ui.horizontal(|ui| {
            for project in row {
                if card(ui, project).clicked() {
                    clicked = Some(project.id.clone());
                }
            }
        });
        ui.add_space(10.0);
    }
    clicked
}

fn card(ui: &mut Ui, project: &Project) -> egui::Response {
    ui.scope_builder(
        UiBuilder::new()
            .id_salt(("project-card", &project.id))
            .sense(Sense::click()),
        |ui| {
            ui.set_width(CARD_WIDTH);
            style::card_frame().show(ui, |ui| {
                ui.set_width(CARD_WIDTH - 24.0);
                ui.add(
                    Image::new(config::asset_uri(project.thumbnail()))
                        .fit_to_exact_size(Vec2::new(CARD_WIDTH - 24.0, THUMB_HEIGHT))
                        .show_loading_spinner(false),
                );
                ui.add_space(6.0);
                ui.label(RichText::new(&project.title).strong());
                if !project.description.is_empty() {
                    ui.label(
                        RichText::new(&project.description)
                            .size(12.0)
                            .color(style::COLOR_MUTED),
                    );
                }
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    for tool in &project.tools {
                        style::badge(ui, tool);
                    }
                });
            });
        },
    )
    .response
}
