mod post;
mod project;
mod retriever;
pub mod samples;

pub use post::Post;
pub use project::{Links, Project, PLACEHOLDER_VISUAL};
pub use retriever::{dedupe_projects, ContentBundle, ContentRetriever};
