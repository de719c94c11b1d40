use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

const SUBJECT_PREFIX: &str = "Portfolio contact: ";

fn encode(s: &str) -> String {
    utf8_percent_encode(s, NON_ALPHANUMERIC).to_string()
}

/// Build the `mailto:` URI the contact form hands to the OS opener.
/// Subject and body are percent-encoded; there is no delivery
/// confirmation and no validation beyond what the form imposes.
pub fn contact_uri(recipient: &str, name: &str, email: &str, message: &str) -> String {
    let subject = format!("{SUBJECT_PREFIX}{name}");
    let body = format!("Name: {name}\nEmail: {email}\n\n{message}");
    format!(
        "mailto:{recipient}?subject={}&body={}",
        encode(&subject),
        encode(&body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_and_body_are_encoded() {
        let uri = contact_uri("you@example.com", "A", "a@b.com", "Hi");
        assert!(uri.starts_with("mailto:you@example.com?"));
        assert!(uri.contains("subject=Portfolio%20contact%3A%20A"));
        assert!(uri.contains("body=Name%3A%20A%0AEmail%3A%20a%40b%2Ecom%0A%0AHi"));
    }

    #[test]
    fn newlines_in_message_survive_as_percent_0a() {
        let uri = contact_uri("you@example.com", "B", "b@c.com", "line1\nline2");
        assert!(uri.contains("line1%0Aline2"));
    }

    #[test]
    fn empty_fields_still_build_a_uri() {
        let uri = contact_uri("you@example.com", "", "", "");
        assert!(uri.contains("subject=Portfolio%20contact%3A"));
        assert!(uri.contains("body=Name%3A%20%0AEmail%3A%20%0A%0A"));
    }
}
