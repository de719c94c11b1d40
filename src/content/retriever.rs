use std::collections::HashSet;

use crossbeam::channel::Sender;
use log::{info, warn};
use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;

use super::{samples, Post, Project};
use crate::config::Sources;

/// Everything the page needs, delivered in one message once both
/// resources have resolved. `*_live` records whether the data came from
/// the source or from the bundled fallback.
#[derive(Debug, Clone)]
pub struct ContentBundle {
    pub projects: Vec<Project>,
    pub posts: Vec<Post>,
    pub projects_live: bool,
    pub posts_live: bool,
}

impl ContentBundle {
    /// Fully bundled content, used when the retriever task dies without
    /// reporting back.
    pub fn fallback() -> Self {
        Self {
            projects: samples::projects(),
            posts: samples::posts(),
            projects_live: false,
            posts_live: false,
        }
    }
}

/// Fetches the project and post resources on a background task and
/// reports the result over a channel polled by the UI each frame.
///
/// Any failure (network, status, I/O, parse) is logged as a warning and
/// masked by the bundled samples; the retriever never errors out.
pub struct ContentRetriever {
    client: reqwest::Client,
    results: Sender<ContentBundle>,
}

impl ContentRetriever {
    pub fn new(results: Sender<ContentBundle>) -> Self {
        Self {
            client: reqwest::Client::new(),
            results,
        }
    }

    pub fn run(self, sources: Sources) -> JoinHandle<()> {
        tokio::spawn(async move {
            // Sequential on purpose: posts are not requested until the
            // project resource has resolved, success or fallback alike.
            let (projects, projects_live) = self
                .fetch_or(&sources.projects, samples::projects())
                .await;
            let (posts, posts_live) = self.fetch_or(&sources.posts, samples::posts()).await;

            info!(
                "content resolved: {} projects (live: {}), {} posts (live: {})",
                projects.len(),
                projects_live,
                posts.len(),
                posts_live
            );

            let bundle = ContentBundle {
                projects: dedupe_projects(projects),
                posts,
                projects_live,
                posts_live,
            };
            if self.results.send(bundle).is_err() {
                warn!("content arrived after the app stopped listening");
            }
        })
    }

    async fn fetch_or<T: DeserializeOwned>(
        &self,
        source: &str,
        fallback: Vec<T>,
    ) -> (Vec<T>, bool) {
        match self.fetch(source).await {
            Ok(items) => (items, true),
            Err(err) => {
                warn!("using bundled fallback for {source}: {err}");
                (fallback, false)
            }
        }
    }

    /// Retrieve and parse a JSON array from an http(s) URL or a local
    /// file path.
    async fn fetch<T: DeserializeOwned>(&self, source: &str) -> Result<Vec<T>, String> {
        if source.starts_with("http://") || source.starts_with("https://") {
            let res = self
                .client
                .get(source)
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !res.status().is_success() {
                return Err(format!("HTTP {}", res.status()));
            }
            res.json().await.map_err(|e| format!("invalid json: {e}"))
        } else {
            let data = tokio::fs::read(source).await.map_err(|e| e.to_string())?;
            serde_json::from_slice(&data).map_err(|e| format!("invalid json: {e}"))
        }
    }
}

/// Drops records whose id was already seen, keeping the first
/// occurrence. Ids are the modal lookup key and must stay unique.
pub fn dedupe_projects(mut projects: Vec<Project>) -> Vec<Project> {
    let mut seen: HashSet<String> = HashSet::new();
    projects.retain(|p| {
        let fresh = seen.insert(p.id.clone());
        if !fresh {
            warn!("dropping project with duplicate id: {}", p.id);
        }
        fresh
    });
    projects
}
