use std::fs;
use std::path::PathBuf;

use scene::model::LoadEvent;

use crate::manifest::ModelManifest;

/// Produces the delivery stream for one model fetch: zero or more
/// `Progress` events followed by exactly one `Loaded` or `Failed`.
///
/// The error text inside `Failed` is diagnostic; presentation layers show
/// their own fixed user-facing message.
pub trait ModelSource {
    fn load(&self, asset_path: &str) -> Vec<LoadEvent>;
}

/// Reads model manifests from a directory tree.
///
/// Progress is reported per read chunk so consumers see the same shape of
/// delivery a remote fetch would produce.
#[derive(Debug, Clone)]
pub struct FileModelSource {
    root: PathBuf,
    chunk_size: usize,
}

impl FileModelSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            chunk_size: 64 * 1024,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    fn resolve(&self, asset_path: &str) -> PathBuf {
        // Asset paths are site-absolute ("/BodyPillow.glb").
        self.root.join(asset_path.trim_start_matches('/'))
    }
}

impl ModelSource for FileModelSource {
    fn load(&self, asset_path: &str) -> Vec<LoadEvent> {
        let path = self.resolve(asset_path);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                return vec![LoadEvent::Failed(format!(
                    "failed to read {}: {err}",
                    path.display()
                ))];
            }
        };

        let total = bytes.len() as u64;
        let mut events = Vec::new();
        let mut loaded = 0u64;
        while loaded < total {
            loaded = (loaded + self.chunk_size as u64).min(total);
            events.push(LoadEvent::Progress {
                bytes_loaded: loaded,
                bytes_total: total,
            });
        }

        let payload = match String::from_utf8(bytes) {
            Ok(payload) => payload,
            Err(err) => {
                events.push(LoadEvent::Failed(format!(
                    "{} is not valid UTF-8: {err}",
                    path.display()
                )));
                return events;
            }
        };

        match ModelManifest::from_json_str(&payload).and_then(|m| m.to_model_data()) {
            Ok(data) => events.push(LoadEvent::Loaded(data)),
            Err(err) => events.push(LoadEvent::Failed(format!("{}: {err}", path.display()))),
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::{FileModelSource, ModelSource};
    use scene::model::LoadEvent;

    const SAMPLE: &str = r#"{
        "version": "1.0",
        "name": "pillow",
        "bounds_min": [-1.0, -1.0, -1.0],
        "bounds_max": [1.0, 1.0, 1.0],
        "meshes": [{ "vertex_count": 8 }]
    }"#;

    #[test]
    fn emits_chunked_progress_then_loaded() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("pillow.glb"), SAMPLE).expect("write");

        let source = FileModelSource::new(dir.path()).with_chunk_size(64);
        let events = source.load("/pillow.glb");

        let mut last = 0u64;
        let mut saw_loaded = false;
        for event in &events {
            match event {
                LoadEvent::Progress {
                    bytes_loaded,
                    bytes_total,
                } => {
                    assert!(*bytes_loaded > last, "progress must advance");
                    assert_eq!(*bytes_total, SAMPLE.len() as u64);
                    last = *bytes_loaded;
                }
                LoadEvent::Loaded(data) => {
                    assert_eq!(data.name, "pillow");
                    saw_loaded = true;
                }
                LoadEvent::Failed(msg) => panic!("unexpected failure: {msg}"),
            }
        }
        assert_eq!(last, SAMPLE.len() as u64);
        assert!(saw_loaded);
    }

    #[test]
    fn missing_file_fails_without_progress() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = FileModelSource::new(dir.path());
        let events = source.load("/nope.glb");
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], LoadEvent::Failed(_)));
    }

    #[test]
    fn bad_manifest_fails_after_progress() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("broken.glb"), "{ not json").expect("write");

        let source = FileModelSource::new(dir.path());
        let events = source.load("/broken.glb");
        assert!(matches!(events.last(), Some(LoadEvent::Failed(_))));
    }
}
