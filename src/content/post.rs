use serde::{Deserialize, Serialize};

/// One blog entry. The list order of the source is preserved as-is;
/// the UI never re-sorts posts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub excerpt: String,
}
