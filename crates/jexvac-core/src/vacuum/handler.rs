use tracing::{error, info};

use crate::archive::scan_archive;
use crate::auth::authorize;
use crate::cleanup::{find_orphans, select_for_deletion};
use crate::discovery::resolve_port;
use crate::progress::Progress;
use crate::resources::{ListOptions, delete_resources, list_resources};
use crate::transport::Endpoint;
use crate::vacuum::errors::VacuumError;
use crate::vacuum::types::{VacuumContext, VacuumOutcome, VacuumRequest};

/// Run one vacuum pass.
///
/// Deletes nothing unless `request.confirm` is set and the export passes the
/// integrity check. Any error aborts the run at the step that produced it.
pub fn run(request: &VacuumRequest, ctx: &VacuumContext<'_>) -> Result<VacuumOutcome, VacuumError> {
    info!(
        event = "core.vacuum.run_started",
        archive = %request.archive_path.display(),
        confirm = request.confirm,
        scope = ?request.scope
    );

    let host = ctx.config.service.host();
    let port = match request.port {
        Some(port) => port,
        None => {
            let ports = ctx.config.service.port_range();
            resolve_port(ctx.transport, host, ports.clone(), ctx.reporter).ok_or_else(|| {
                error!(event = "core.vacuum.port_not_found");
                VacuumError::PortNotFound {
                    host: host.to_string(),
                    start: ports.start,
                    end: ports.end,
                }
            })?
        }
    };
    let endpoint = Endpoint::new(host, port);

    let authorized = authorize(
        ctx.transport,
        &endpoint,
        request.token.as_deref(),
        ctx.token_store,
        ctx.approval,
    )?;
    ctx.reporter.report(Progress::TokenResolved {
        source: authorized.source,
    });

    let referenced = scan_archive(&request.archive_path)?;
    ctx.reporter.report(Progress::ArchiveScanned {
        referenced: referenced.len(),
    });

    let options = ListOptions {
        limit: request.limit.or(ctx.config.listing.page_limit()),
        max_pages: ctx.config.listing.max_pages(),
    };
    let catalog = list_resources(
        ctx.transport,
        &endpoint,
        &authorized.token,
        options,
        ctx.reporter,
    )?;

    let report = find_orphans(&referenced, &catalog)?;

    if report.is_empty() {
        info!(event = "core.vacuum.nothing_to_do");
        return Ok(VacuumOutcome::NothingToDo { report });
    }

    if !request.confirm {
        info!(event = "core.vacuum.dry_run_completed", orphaned = report.len());
        return Ok(VacuumOutcome::DryRun { report });
    }

    let ids = select_for_deletion(&report, request.scope);
    let deleted = delete_resources(
        ctx.transport,
        &endpoint,
        &authorized.token,
        &ids,
        ctx.reporter,
    )?;

    info!(event = "core.vacuum.run_completed", deleted = deleted.len());

    Ok(VacuumOutcome::Deleted { report, deleted })
}
