use std::ops::Range;

use tracing::{debug, info, warn};

use crate::progress::{Progress, ProgressReporter};
use crate::transport::{Endpoint, HttpTransport, Method};

/// Body Joplin's clipper service returns from `GET /ping`.
pub const PING_SIGNATURE: &str = "JoplinClipperServer";

/// Probe `ports` in ascending order and return the first one that answers
/// `/ping` with status 200 and the clipper signature.
///
/// Probe failures of any kind just move on to the next port. Returns `None`
/// once the range is exhausted.
pub fn resolve_port(
    transport: &dyn HttpTransport,
    host: &str,
    ports: Range<u16>,
    reporter: &dyn ProgressReporter,
) -> Option<u16> {
    info!(
        event = "core.discovery.scan_started",
        host = host,
        start = ports.start,
        end = ports.end
    );

    for port in ports {
        let url = Endpoint::new(host, port).url("/ping");

        match transport.send(Method::Get, &url) {
            Ok(response) if response.is_success() && response.body == PING_SIGNATURE => {
                reporter.report(Progress::PortProbed { port, found: true });
                info!(event = "core.discovery.port_found", port = port);
                return Some(port);
            }
            Ok(response) => {
                debug!(
                    event = "core.discovery.probe_mismatch",
                    port = port,
                    status = response.status
                );
            }
            Err(e) => {
                debug!(
                    event = "core.discovery.probe_failed",
                    port = port,
                    error = %e
                );
            }
        }

        reporter.report(Progress::PortProbed { port, found: false });
    }

    warn!(event = "core.discovery.port_not_found");
    None
}
