use egui::{Context, RichText, TopBottomPanel, Ui};

use super::style;

/// Below this window width the nav collapses into a toggle menu.
const COMPACT_WIDTH: f32 = 700.0;

/// Page sections reachable from the nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Highlights,
    Portfolio,
    Skills,
    Blog,
    Resume,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::Highlights,
        Section::Portfolio,
        Section::Skills,
        Section::Blog,
        Section::Resume,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Highlights => "Highlights",
            Section::Portfolio => "Portfolio",
            Section::Skills => "Skills",
            Section::Blog => "Blog",
            Section::Resume => "Résumé",
            Section::Contact => "Contact",
        }
    }
}

/// Open/closed state of the compact menu. Activating any entry closes
/// the menu again.
#[derive(Debug, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Draw the nav bar; returns the section the user picked, if any.
    pub fn show(&mut self, ctx: &Context) -> Option<Section> {
        let mut picked = None;
        TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.add_space(6.0);
            let compact = ui.available_width() < COMPACT_WIDTH;
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Portfolio")
                        .size(18.0)
                        .strong()
                        .color(style::COLOR_ACCENT),
                );
                ui.add_space(12.0);
                if compact {
                    if ui.button("☰").clicked() {
                        self.toggle();
                    }
                } else {
                    picked = Self::links_row(ui);
                }
            });
            if compact && self.open {
                ui.vertical(|ui| {
                    for section in Section::ALL {
                        if ui.link(section.label()).clicked() {
                            picked = Some(section);
                        }
                    }
                });
            }
            ui.add_space(6.0);
        });
        if picked.is_some() {
            self.close();
        }
        picked
    }

    fn links_row(ui: &mut Ui) -> Option<Section> {
        let mut picked = None;
        for section in Section::ALL {
            if ui.link(section.label()).clicked() {
                picked = Some(section);
            }
        }
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggles_and_closes() {
        let mut menu = NavMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }
}
