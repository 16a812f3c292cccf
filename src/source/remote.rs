// src/source/remote.rs
use crate::{
    config::options::SourceKind,
    core::net::{self, HttpUrl},
    error::LoadError,
    model::ResultSet,
    progress::Progress,
};

use super::{DataSource, Format};

/// Plain-HTTP document, parsed as tabular results or as a report dump.
pub struct RemoteSource {
    url: String,
    kind: SourceKind,
}

impl RemoteSource {
    pub fn new(url: &str, kind: SourceKind) -> Self {
        Self { url: s!(url.trim()), kind }
    }
}

impl DataSource for RemoteSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn load(&self, mut progress: Option<&mut dyn Progress>) -> Result<ResultSet, LoadError> {
        let url = HttpUrl::parse(&self.url).map_err(|e| LoadError::Fetch(e.to_string()))?;
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching {}…", self.url));
        }

        let body = net::http_get(&url).map_err(|e| {
            loge!("Load: fetch {} failed: {}", self.url, e);
            LoadError::Fetch(e.to_string())
        })?;
        logf!("Load: fetched {} ({} bytes)", self.url, body.len());

        let ext = url.path.rsplit_once('.').map(|(_, e)| e);
        Format::resolve(self.kind, ext, &body).parse(&body, progress)
    }
}
