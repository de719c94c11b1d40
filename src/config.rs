/// Where the page pulls its content from. Sources may be http(s) URLs
/// or local file paths; either way a failed load falls back to the
/// bundled samples.
#[derive(Debug, Clone)]
pub struct Sources {
    pub projects: String,
    pub posts: String,
    pub contact_email: String,
    pub resume: String,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            projects: "data/projects.json".to_owned(),
            posts: "data/blog.json".to_owned(),
            contact_email: "youremail@example.com".to_owned(),
            resume: "assets/resume.pdf".to_owned(),
        }
    }
}

/// Storage key for the best-effort résumé download marker.
pub const RESUME_DOWNLOADED_AT_KEY: &str = "resume_downloaded_at";

/// Turn a site-relative visual path into a URI the image loaders
/// understand. Relative paths are anchored on the crate directory so
/// assets resolve no matter where the binary is launched from; absolute
/// URLs pass through untouched.
pub fn asset_uri(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("file://") {
        path.to_owned()
    } else {
        format!(
            "file://{}/{}",
            env!("CARGO_MANIFEST_DIR"),
            path.trim_start_matches('/')
        )
    }
}
