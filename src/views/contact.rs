use egui::{RichText, TextEdit, Ui};

use super::style;
use crate::mailto;

/// Contact form state. Submission builds a `mailto:` URI; nothing is
/// sent from here and nothing confirms delivery.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Draw the form; returns the mail URI when the user submits.
    pub fn show(&mut self, ui: &mut Ui, recipient: &str) -> Option<String> {
        ui.add(
            TextEdit::singleline(&mut self.name)
                .hint_text("Your name")
                .desired_width(320.0),
        );
        ui.add(
            TextEdit::singleline(&mut self.email)
                .hint_text("Your email")
                .desired_width(320.0),
        );
        ui.add(
            TextEdit::multiline(&mut self.message)
                .hint_text("Message")
                .desired_rows(4)
                .desired_width(320.0),
        );
        ui.add_space(6.0);

        let mut uri = None;
        ui.horizontal(|ui| {
            if ui.button("Send").clicked() {
                uri = Some(self.submit(recipient));
            }
            ui.label(
                RichText::new("Opens your mail client.")
                    .size(11.0)
                    .color(style::COLOR_MUTED),
            );
        });
        uri
    }

    pub fn submit(&self, recipient: &str) -> String {
        mailto::contact_uri(recipient, &self.name, &self.email, &self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_builds_the_contact_uri() {
        let form = ContactForm {
            name: "A".into(),
            email: "a@b.com".into(),
            message: "Hi".into(),
        };
        let uri = form.submit("you@example.com");
        assert!(uri.contains("subject=Portfolio%20contact%3A%20A"));
        assert!(uri.ends_with("Hi"));
    }
}
