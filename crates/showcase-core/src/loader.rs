//! Ordered model-URL fallback with a placeholder on exhaustion.

use crate::error::{ShowcaseError, ShowcaseResult};
use std::fmt::Display;
use std::future::Future;

/// Progress reported to the loading indicator.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadStatus {
    Loading(String),
    Loaded,
    Failed,
}

impl LoadStatus {
    pub fn message(&self) -> String {
        match self {
            LoadStatus::Loading(url) => format!("Loading model: {}", url),
            LoadStatus::Loaded => "3D model loaded".to_string(),
            LoadStatus::Failed => "Model failed. Debug mesh active.".to_string(),
        }
    }
}

/// Where a load lands: the scene for the model, the indicator for status.
pub trait ModelSink<S> {
    fn status(&mut self, status: LoadStatus);
    fn insert_model(&mut self, url: &str, model: &S);
    fn insert_placeholder(&mut self);
}

#[derive(Debug)]
pub struct LoadedModel<S> {
    pub url: String,
    /// 1-based attempt number that succeeded.
    pub attempts: usize,
    pub model: S,
}

/// Try each candidate in order until one loads.
///
/// Every failure is logged and the next candidate is tried. When all fail the
/// placeholder is inserted once and `AllCandidatesFailed` is returned.
pub async fn load_with_fallback<S, E, F, Fut, K>(
    candidates: &[&str],
    mut load: F,
    sink: &mut K,
) -> ShowcaseResult<LoadedModel<S>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<S, E>>,
    E: Display,
    K: ModelSink<S>,
{
    let mut failures = Vec::new();
    for (i, url) in candidates.iter().enumerate() {
        sink.status(LoadStatus::Loading(url.to_string()));
        match load(url.to_string()).await {
            Ok(model) => {
                sink.insert_model(url, &model);
                sink.status(LoadStatus::Loaded);
                log::info!("[model] loaded {} (attempt {})", url, i + 1);
                return Ok(LoadedModel {
                    url: url.to_string(),
                    attempts: i + 1,
                    model,
                });
            }
            Err(e) => {
                let err = ShowcaseError::ModelLoad {
                    url: url.to_string(),
                    reason: e.to_string(),
                };
                log::warn!("[model] {}", err);
                failures.push(err);
            }
        }
    }

    sink.insert_placeholder();
    sink.status(LoadStatus::Failed);
    if failures.is_empty() {
        log::error!("[model] no candidates to load");
        return Err(ShowcaseError::NoCandidates);
    }
    log::error!("[model] all {} candidates failed", failures.len());
    Err(ShowcaseError::AllCandidatesFailed {
        attempts: failures.len(),
    })
}

/// Message for pages opened straight from disk, where module imports and
/// model fetches are blocked.
pub fn file_protocol_warning(protocol: &str) -> Option<&'static str> {
    (protocol == "file:")
        .then_some("Use a local server: python3 -m http.server 4173, then open http://localhost:4173")
}
