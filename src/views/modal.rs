use egui::{Context, Image, RichText, Vec2, Window};

use super::style;
use crate::config;
use crate::content::Project;

/// Narrative shown in the case-study column; empty fields render as a
/// dash instead of disappearing.
pub fn detail_rows(project: &Project) -> [(&'static str, &str); 3] {
    fn or_dash(s: &str) -> &str {
        if s.is_empty() {
            "-"
        } else {
            s
        }
    }
    [
        ("Problem", or_dash(&project.problem)),
        ("Solution", or_dash(&project.solution)),
        ("Outcome", or_dash(&project.outcome)),
    ]
}

/// The project detail window. Opening an id that is not in the list is
/// a silent no-op.
#[derive(Debug, Default)]
pub struct ProjectModal {
    open_id: Option<String>,
}

impl ProjectModal {
    pub fn open(&mut self, id: impl Into<String>) {
        self.open_id = Some(id.into());
    }

    pub fn close(&mut self) {
        self.open_id = None;
    }

    pub fn is_open(&self) -> bool {
        self.open_id.is_some()
    }

    pub fn show(&mut self, ctx: &Context, projects: &[Project]) {
        let Some(id) = self.open_id.clone() else {
            return;
        };
        let Some(project) = projects.iter().find(|p| p.id == id) else {
            self.close();
            return;
        };

        let mut open = true;
        Window::new(RichText::new(&project.title).size(18.0).strong())
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .max_width(560.0)
            .show(ctx, |ui| {
                if !project.description.is_empty() {
                    ui.label(RichText::new(&project.description).color(style::COLOR_SUBTLE));
                    ui.add_space(8.0);
                }

                ui.label(style::header_accent("Case Study"));
                for (label, text) in detail_rows(project) {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new(format!("{label}:")).strong());
                        ui.label(text);
                    });
                }

                ui.add_space(6.0);
                ui.horizontal_wrapped(|ui| {
                    for tool in &project.tools {
                        style::badge(ui, tool);
                    }
                });

                if let Some(url) = project.github_link() {
                    ui.hyperlink_to("GitHub", url);
                }
                if let Some(url) = project.demo_link() {
                    ui.hyperlink_to("Live demo", url);
                }

                if !project.visuals.is_empty() {
                    ui.add_space(8.0);
                    ui.horizontal_wrapped(|ui| {
                        for visual in &project.visuals {
                            ui.add(
                                Image::new(config::asset_uri(visual))
                                    .fit_to_exact_size(Vec2::new(200.0, 140.0))
                                    .show_loading_spinner(false),
                            );
                        }
                    });
                }
            });
        if !open {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::samples;

    #[test]
    fn empty_narrative_renders_dashes() {
        let project = Project::default();
        let rows = detail_rows(&project);
        assert!(rows.iter().all(|(_, text)| *text == "-"));
    }

    #[test]
    fn plant_ml_detail_carries_its_narrative() {
        let projects = samples::projects();
        let p = projects.iter().find(|p| p.id == "plant-ml").unwrap();
        assert_eq!(p.title, "Plant Health Prediction using ML");
        let rows = detail_rows(p);
        assert_eq!(rows[0].1, "Early disease detection in crops is complex.");
        assert_eq!(rows[1].1, "Image-based classification model with explainability.");
        assert_eq!(rows[2].1, ">85% accuracy; supports proactive treatment.");
    }

    #[test]
    fn open_and_close_track_state() {
        let mut modal = ProjectModal::default();
        assert!(!modal.is_open());
        modal.open("plant-ml");
        assert!(modal.is_open());
        modal.close();
        assert!(!modal.is_open());
    }
}
