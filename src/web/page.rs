// ABOUTME: HTML rendering for the container overview page.
// ABOUTME: Fills the askama page template from a listing, request headers and a timestamp.

use crate::summary::ContainerSummary;
use askama::Template;

/// Everything the overview page shows.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub containers: &'a [ContainerSummary],
    pub error: Option<&'a str>,
    /// Request headers; rendered in slice order.
    pub headers: &'a [(String, String)],
    pub timestamp: &'a str,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    headers: &'a [(String, String)],
    count: usize,
    error: Option<&'a str>,
    rows: Vec<ContainerRow<'a>>,
    timestamp: &'a str,
}

/// One container block, with display-only values precomputed.
struct ContainerRow<'a> {
    name: &'a str,
    status: &'a str,
    status_class: String,
    image: &'a str,
    short_id: &'a str,
}

impl<'a> From<&'a ContainerSummary> for ContainerRow<'a> {
    fn from(summary: &'a ContainerSummary) -> Self {
        Self {
            name: &summary.name,
            status: &summary.status,
            status_class: status_class(&summary.status),
            image: &summary.image,
            short_id: summary.id.short(),
        }
    }
}

/// Render the full overview document. All values are HTML-escaped.
pub fn render_page(ctx: &PageContext<'_>) -> Result<String, askama::Error> {
    PageTemplate {
        headers: ctx.headers,
        count: ctx.containers.len(),
        error: ctx.error,
        rows: ctx.containers.iter().map(ContainerRow::from).collect(),
        timestamp: ctx.timestamp,
    }
    .render()
}

/// CSS class for a runtime status label.
///
/// Only `status-running` and `status-exited` have styles; any other label
/// yields a class with no decoration.
pub fn status_class(status: &str) -> String {
    format!("status-{}", status.to_lowercase())
}
