use egui::{OpenUrl, RichText, Ui};

use super::style;
use crate::config::Sources;
use crate::content::Project;

const EXCERPT_PROJECTS: usize = 4;
const EXCERPT_TOOLS: usize = 3;

/// One line per excerpt project: title plus its first few tools.
pub fn excerpt(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .take(EXCERPT_PROJECTS)
        .map(|p| {
            let tools: Vec<&str> = p
                .tools
                .iter()
                .take(EXCERPT_TOOLS)
                .map(String::as_str)
                .collect();
            if tools.is_empty() {
                p.title.clone()
            } else {
                format!("{} – {}", p.title, tools.join(", "))
            }
        })
        .collect()
}

/// Résumé section: project excerpt list plus download/print actions.
/// Returns a timestamp to persist when the résumé was downloaded.
pub fn show(ui: &mut Ui, projects: &[Project], sources: &Sources) -> Option<String> {
    for line in excerpt(projects) {
        ui.label(RichText::new(format!("• {line}")).color(style::COLOR_SUBTLE));
    }
    ui.add_space(10.0);

    let mut downloaded_at = None;
    ui.horizontal(|ui| {
        if ui.button("Download résumé").clicked() {
            ui.ctx()
                .open_url(OpenUrl::new_tab(resume_url(&sources.resume)));
            downloaded_at = Some(chrono::Local::now().to_rfc3339());
        }
        // No page to print; hand the document to the system viewer and
        // let the user print from there.
        if ui.button("Print").clicked() {
            ui.ctx()
                .open_url(OpenUrl::new_tab(resume_url(&sources.resume)));
        }
    });
    downloaded_at
}

fn resume_url(path: &str) -> String {
    crate::config::asset_uri(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::samples;

    #[test]
    fn excerpt_takes_first_four_projects_and_three_tools() {
        let lines = excerpt(&samples::projects());
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "AI Career Roadmap Generator – Python, Pandas, scikit-learn"
        );
        assert_eq!(lines[1], "Plant Health Prediction using ML – Python, scikit-learn");
    }

    #[test]
    fn short_lists_yield_short_excerpts() {
        let projects = vec![Project {
            title: "Solo".into(),
            ..Default::default()
        }];
        assert_eq!(excerpt(&projects), vec!["Solo".to_owned()]);
    }

    #[test]
    fn empty_list_yields_no_lines() {
        assert!(excerpt(&[]).is_empty());
    }
}
