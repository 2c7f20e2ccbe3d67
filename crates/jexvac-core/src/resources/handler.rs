use tracing::{error, info};

use crate::progress::{Progress, ProgressReporter};
use crate::resources::errors::ResourceError;
use crate::resources::operations::{clamp_page_limit, parse_page, resource_path, resources_path};
use crate::resources::types::{ListOptions, ResourceCatalog};
use crate::transport::{Endpoint, HttpTransport, Method};

/// Fetch the full resource catalog, one page at a time, until the service
/// reports `has_more: false`.
///
/// Without `options.max_pages` there is no client-side page cap: a service
/// that never reports completion is paginated forever.
pub fn list_resources(
    transport: &dyn HttpTransport,
    endpoint: &Endpoint,
    token: &str,
    options: ListOptions,
    reporter: &dyn ProgressReporter,
) -> Result<ResourceCatalog, ResourceError> {
    let limit = clamp_page_limit(options.limit);
    info!(
        event = "core.resources.list_started",
        limit = limit,
        max_pages = ?options.max_pages
    );

    let mut resources = Vec::new();
    let mut page: u32 = 1;

    loop {
        let url = endpoint.url(&resources_path(token, limit, page));
        let response = transport.send(Method::Get, &url)?;

        if !response.is_success() {
            error!(
                event = "core.resources.list_failed",
                page = page,
                status = response.status
            );
            return Err(ResourceError::ListFailed {
                page,
                status: response.status,
            });
        }

        let parsed = parse_page(&response.body)
            .map_err(|message| ResourceError::InvalidResponse { page, message })?;

        let items = parsed.items.len();
        resources.extend(parsed.items);

        reporter.report(Progress::PageFetched {
            page,
            items,
            total: resources.len(),
            has_more: parsed.has_more,
        });

        if !parsed.has_more {
            break;
        }

        if let Some(max_pages) = options.max_pages
            && page >= max_pages
        {
            error!(
                event = "core.resources.page_limit_exceeded",
                max_pages = max_pages
            );
            return Err(ResourceError::PageLimitExceeded { max_pages });
        }

        page += 1;
    }

    info!(
        event = "core.resources.list_completed",
        pages = page,
        total = resources.len()
    );

    Ok(ResourceCatalog::new(resources))
}

/// Delete `ids` in order, stopping at the first failure.
///
/// Returns the deleted ids. On failure, ids after the failing one are never
/// attempted and earlier deletions stay applied.
pub fn delete_resources(
    transport: &dyn HttpTransport,
    endpoint: &Endpoint,
    token: &str,
    ids: &[String],
    reporter: &dyn ProgressReporter,
) -> Result<Vec<String>, ResourceError> {
    info!(event = "core.resources.delete_started", count = ids.len());

    let mut deleted = Vec::with_capacity(ids.len());

    for (index, id) in ids.iter().enumerate() {
        reporter.report(Progress::Deleting {
            index: index + 1,
            total: ids.len(),
            id: id.clone(),
        });

        let url = endpoint.url(&resource_path(id, token));
        let outcome = match transport.send(Method::Delete, &url) {
            Ok(response) if response.is_success() => Ok(()),
            Ok(response) => Err(format!("HTTP status {}", response.status)),
            Err(e) => Err(e.to_string()),
        };

        if let Err(message) = outcome {
            error!(
                event = "core.resources.delete_failed",
                id = %id,
                completed = deleted.len(),
                error = %message
            );
            return Err(ResourceError::DeleteFailed {
                id: id.clone(),
                completed: deleted.len(),
                message,
            });
        }

        reporter.report(Progress::Deleted { id: id.clone() });
        deleted.push(id.clone());
    }

    info!(event = "core.resources.delete_completed", count = deleted.len());

    Ok(deleted)
}
