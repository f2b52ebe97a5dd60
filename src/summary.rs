// ABOUTME: Builds flat container summaries from the runtime's container list.
// ABOUTME: Converts any runtime failure into an error message instead of propagating it.

use crate::runtime::{
    self, ContainerFilters, ContainerOps, ContainerRecord, ContainerSource, ImageOps,
    RuntimeConfig, RuntimeError,
};
use crate::types::{ContainerId, SHORT_ID_LEN, truncate_chars};
use serde::Serialize;

/// A normalized, per-request view of one container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerSummary {
    /// Full container ID; shortened only when rendered.
    pub id: ContainerId,
    /// Container name without the runtime's leading slash.
    pub name: String,
    /// First image tag, or the shortened image ID for untagged images.
    pub image: String,
    /// Lifecycle label exactly as the runtime reports it.
    pub status: String,
}

/// Outcome of one query: the summaries, or the reason there are none.
///
/// `error` is `Some` only when `containers` is empty because the runtime
/// could not be queried.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContainerListing {
    pub containers: Vec<ContainerSummary>,
    pub error: Option<String>,
}

/// The runtime could not be reached or queried.
#[derive(Debug, thiserror::Error)]
#[error("{source}")]
pub struct RuntimeUnavailable {
    #[from]
    source: RuntimeError,
}

impl RuntimeUnavailable {
    pub fn cause(&self) -> &RuntimeError {
        &self.source
    }
}

/// Connect to the configured runtime and summarize every container on it.
pub async fn fetch_listing(config: &RuntimeConfig) -> ContainerListing {
    match runtime::connect(config) {
        Ok(runtime) => get_containers(&runtime).await,
        Err(e) => recover(Err(e.into())),
    }
}

/// Summarize every container `runtime` knows about, running or not.
///
/// Never fails: a runtime error is logged and reported through
/// [`ContainerListing::error`] with an empty container list.
pub async fn get_containers<R>(runtime: &R) -> ContainerListing
where
    R: ContainerSource + ?Sized,
{
    recover(summarize(runtime).await)
}

/// Summarize every container, failing as a whole if any lookup fails.
pub async fn summarize<R>(runtime: &R) -> Result<Vec<ContainerSummary>, RuntimeUnavailable>
where
    R: ContainerSource + ?Sized,
{
    let records = runtime
        .list_containers(&ContainerFilters::all())
        .await
        .map_err(RuntimeError::from)?;

    let mut summaries = Vec::with_capacity(records.len());
    for record in records {
        let image = image_display(runtime, &record).await?;
        summaries.push(ContainerSummary {
            id: record.id,
            name: normalize_name(&record.name).to_string(),
            image,
            status: record.state,
        });
    }
    Ok(summaries)
}

fn recover(result: Result<Vec<ContainerSummary>, RuntimeUnavailable>) -> ContainerListing {
    match result {
        Ok(containers) => ContainerListing {
            containers,
            error: None,
        },
        Err(e) => {
            tracing::error!(kind = ?e.cause().kind(), "Error getting containers: {e}");
            ContainerListing {
                containers: Vec::new(),
                error: Some(e.to_string()),
            }
        }
    }
}

async fn image_display<R>(runtime: &R, record: &ContainerRecord) -> Result<String, RuntimeError>
where
    R: ImageOps + ?Sized,
{
    // Some runtimes omit the image ID; the reference is all there is then.
    if record.image_id.as_str().is_empty() {
        return Ok(record.image.clone());
    }

    let tags = runtime
        .image_tags(&record.image_id)
        .await
        .map_err(|source| RuntimeError::ImageLookup {
            image: record.image_id.to_string(),
            source,
        })?;

    Ok(resolve_image(&tags, record.image_id.as_str()))
}

/// Strip exactly one leading `/` from a runtime-reported name.
pub fn normalize_name(name: &str) -> &str {
    name.strip_prefix('/').unwrap_or(name)
}

/// First tag in runtime order, else the first twelve characters of the image ID.
pub fn resolve_image(tags: &[String], image_id: &str) -> String {
    match tags.first() {
        Some(tag) => tag.clone(),
        None => truncate_chars(image_id, SHORT_ID_LEN).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::traits::sealed::Sealed;
    use crate::runtime::{ContainerError, ImageError};
    use crate::types::ImageId;
    use async_trait::async_trait;
    use proptest::prelude::*;
    use std::collections::HashMap;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Log sink shared between a test and the subscriber it installs.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn error_lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes)
                .lines()
                .filter(|l| l.contains("ERROR"))
                .map(str::to_string)
                .collect()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Route this thread's tracing output into a fresh buffer.
    fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        (logs, tracing::subscriber::set_default(subscriber))
    }

    /// In-memory runtime with canned containers and image tags.
    #[derive(Default)]
    struct FakeRuntime {
        containers: Vec<ContainerRecord>,
        tags: HashMap<String, Vec<String>>,
        fail_list: Option<String>,
        list_calls: AtomicUsize,
    }

    impl FakeRuntime {
        fn with(mut self, name: &str, image_id: &str, state: &str) -> Self {
            self.containers.push(ContainerRecord {
                id: ContainerId::new(format!("{:0<64}", self.containers.len())),
                name: name.to_string(),
                image: "ref".to_string(),
                image_id: ImageId::new(image_id),
                state: state.to_string(),
            });
            self
        }

        fn tagged(mut self, image_id: &str, tags: &[&str]) -> Self {
            self.tags.insert(
                image_id.to_string(),
                tags.iter().map(|t| t.to_string()).collect(),
            );
            self
        }
    }

    impl Sealed for FakeRuntime {}

    #[async_trait]
    impl ContainerOps for FakeRuntime {
        async fn list_containers(
            &self,
            filters: &ContainerFilters,
        ) -> Result<Vec<ContainerRecord>, ContainerError> {
            assert!(filters.all, "summaries must include stopped containers");
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            match &self.fail_list {
                Some(msg) => Err(ContainerError::ConnectionFailed(msg.clone())),
                None => Ok(self.containers.clone()),
            }
        }
    }

    #[async_trait]
    impl ImageOps for FakeRuntime {
        async fn image_tags(&self, id: &ImageId) -> Result<Vec<String>, ImageError> {
            self.tags
                .get(id.as_str())
                .cloned()
                .ok_or_else(|| ImageError::NotFound(id.to_string()))
        }
    }

    #[test]
    fn strips_one_leading_slash() {
        assert_eq!(normalize_name("/web-1"), "web-1");
        assert_eq!(normalize_name("web-1"), "web-1");
        assert_eq!(normalize_name("//web"), "/web");
        assert_eq!(normalize_name("/a/b"), "a/b");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn first_tag_wins() {
        let tags = vec!["myapp:latest".to_string(), "myapp:v2".to_string()];
        assert_eq!(resolve_image(&tags, "sha256:whatever"), "myapp:latest");
    }

    #[test]
    fn untagged_image_uses_short_id() {
        assert_eq!(resolve_image(&[], "sha256:abcdef0123456789"), "sha256:abcde");
        assert_eq!(resolve_image(&[], "0123456789abcdef"), "0123456789ab");
        assert_eq!(resolve_image(&[], "abc"), "abc");
    }

    #[tokio::test]
    async fn summarizes_all_containers_in_runtime_order() {
        let runtime = FakeRuntime::default()
            .with("/web-1", "sha256:aaa", "running")
            .with("db", "sha256:bbbbbbbbbbbbbbbb", "exited")
            .tagged("sha256:aaa", &["myapp:latest", "myapp:v2"])
            .tagged("sha256:bbbbbbbbbbbbbbbb", &[]);

        let listing = get_containers(&runtime).await;

        assert_eq!(listing.error, None);
        assert_eq!(listing.containers.len(), 2);

        let web = &listing.containers[0];
        assert_eq!(web.name, "web-1");
        assert_eq!(web.image, "myapp:latest");
        assert_eq!(web.status, "running");
        assert_eq!(web.id.as_str().len(), 64);

        let db = &listing.containers[1];
        assert_eq!(db.name, "db");
        assert_eq!(db.image, "sha256:bbbbb");
        assert_eq!(db.status, "exited");
    }

    #[tokio::test]
    async fn status_is_passed_through_verbatim() {
        let runtime = FakeRuntime::default()
            .with("/x", "img", "Running")
            .tagged("img", &["x:1"]);

        let listing = get_containers(&runtime).await;
        assert_eq!(listing.containers[0].status, "Running");
    }

    #[tokio::test]
    async fn empty_runtime_is_not_an_error() {
        let listing = get_containers(&FakeRuntime::default()).await;
        assert_eq!(listing, ContainerListing::default());
    }

    #[tokio::test]
    async fn list_failure_becomes_error_message() {
        let runtime = FakeRuntime {
            fail_list: Some("connection refused".to_string()),
            ..Default::default()
        };

        let listing = get_containers(&runtime).await;

        assert!(listing.containers.is_empty());
        let error = listing.error.expect("error should be reported");
        assert!(error.contains("connection refused"), "got: {error}");
        assert_eq!(runtime.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failure_is_logged_exactly_once() {
        let (logs, _guard) = capture_logs();
        let runtime = FakeRuntime {
            fail_list: Some("connection refused".to_string()),
            ..Default::default()
        };

        let listing = get_containers(&runtime).await;

        let errors = logs.error_lines();
        assert_eq!(errors.len(), 1, "got: {errors:?}");
        assert!(errors[0].contains("connection refused"), "got: {}", errors[0]);
        assert!(errors[0].contains(listing.error.as_deref().unwrap()));
    }

    #[tokio::test]
    async fn success_logs_no_errors() {
        let (logs, _guard) = capture_logs();
        let runtime = FakeRuntime::default()
            .with("/web", "img", "running")
            .tagged("img", &["web:1"]);

        let listing = get_containers(&runtime).await;

        assert_eq!(listing.error, None);
        assert!(logs.error_lines().is_empty());
    }

    #[tokio::test]
    async fn image_lookup_failure_drops_whole_list() {
        let runtime = FakeRuntime::default()
            .with("/ok", "tagged", "running")
            .with("/orphan", "sha256:gone", "exited")
            .tagged("tagged", &["ok:1"]);

        let listing = get_containers(&runtime).await;

        assert!(listing.containers.is_empty());
        assert!(listing.error.unwrap().contains("sha256:gone"));
    }

    #[tokio::test]
    async fn missing_image_id_falls_back_to_reference() {
        let runtime = FakeRuntime::default().with("/x", "", "created");
        let listing = get_containers(&runtime).await;
        assert_eq!(listing.containers[0].image, "ref");
    }

    #[test]
    fn summary_serializes_with_flat_keys() {
        let summary = ContainerSummary {
            id: ContainerId::new("abc"),
            name: "web".to_string(),
            image: "nginx:latest".to_string(),
            status: "running".to_string(),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "abc",
                "name": "web",
                "image": "nginx:latest",
                "status": "running",
            })
        );
    }

    proptest! {
        #[test]
        fn normalized_name_never_loses_more_than_one_char(name in ".*") {
            let out = normalize_name(&name);
            prop_assert!(name.ends_with(out));
            prop_assert!(name.len() - out.len() <= 1);
        }

        #[test]
        fn untagged_image_is_id_prefix(id in "[a-z0-9:]{0,40}") {
            let out = resolve_image(&[], &id);
            prop_assert!(id.starts_with(&out));
            prop_assert_eq!(out.chars().count(), id.chars().count().min(12));
        }
    }
}
