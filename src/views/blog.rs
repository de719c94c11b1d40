use egui::{RichText, Ui};

use super::style;
use crate::content::Post;

/// Blog list, in source order.
pub fn show(ui: &mut Ui, posts: &[Post]) {
    if posts.is_empty() {
        ui.label(RichText::new("Nothing published yet.").color(style::COLOR_MUTED));
        return;
    }
    for post in posts {
        style::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&post.title).strong());
                if !post.date.is_empty() {
                    ui.label(
                        RichText::new(&post.date)
                            .size(11.0)
                            .color(style::COLOR_MUTED),
                    );
                }
            });
            if !post.excerpt.is_empty() {
                ui.label(RichText::new(&post.excerpt).color(style::COLOR_MUTED));
            }
            if !post.url.is_empty() {
                ui.hyperlink_to("Read more", &post.url);
            }
        });
        ui.add_space(8.0);
    }
}
