use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{error, info, warn};

use jexvac_core::events;
use jexvac_core::vacuum;
use jexvac_core::{
    DeletionScope, FileTokenStore, JexvacConfig, JexvacError, ReqwestTransport, VacuumContext,
    VacuumOutcome, VacuumRequest,
};

use crate::prompt::TerminalApprovalGate;
use crate::report::{ConsoleReporter, print_report};

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> JexvacConfig {
    match JexvacConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.jexvac/config.toml and ./.jexvac/config.toml for errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                error_code = e.error_code(),
                "Config load failed, using defaults"
            );
            JexvacConfig::default()
        }
    }
}

fn build_request(matches: &ArgMatches) -> VacuumRequest {
    let archive = matches
        .get_one::<String>("archive")
        .map(PathBuf::from)
        .unwrap_or_default();

    let scope = if matches.get_flag("test-del-1") {
        DeletionScope::SingleItem
    } else {
        DeletionScope::All
    };

    // Port 0 means "discover", like leaving --port out.
    let port = matches.get_one::<u16>("port").copied().filter(|&p| p != 0);

    // Negative or oversized limits become 0, which the lister replaces with
    // the default page size.
    let limit = matches
        .get_one::<i64>("limit")
        .map(|&limit| u32::try_from(limit).unwrap_or(0));

    VacuumRequest {
        port,
        token: matches.get_one::<String>("token").cloned(),
        limit,
        confirm: matches.get_flag("confirm"),
        scope,
        ..VacuumRequest::new(archive)
    }
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let config = load_config_with_warning();
    let request = build_request(matches);

    if request.scope == DeletionScope::SingleItem && !request.confirm {
        println!("Note: --test-del-1 has no effect without --confirm.");
    }

    let token_file = matches
        .get_one::<String>("token-file")
        .map(PathBuf::from)
        .unwrap_or_else(|| config.auth.token_file());

    info!(
        event = "cli.vacuum_started",
        archive = %request.archive_path.display(),
        token_file = %token_file.display(),
        confirm = request.confirm
    );

    let transport = ReqwestTransport::new(config.service.request_timeout())?;
    let token_store = FileTokenStore::new(token_file);
    let ctx = VacuumContext {
        config: &config,
        transport: &transport,
        token_store: &token_store,
        approval: &TerminalApprovalGate,
        reporter: &ConsoleReporter,
    };

    match vacuum::run(&request, &ctx) {
        Ok(outcome) => {
            print_report(outcome.report());

            match &outcome {
                VacuumOutcome::NothingToDo { .. } => {
                    println!("✅ No need to vacuum - every attachment is referenced.");
                }
                VacuumOutcome::DryRun { report } => {
                    println!(
                        "Confirm flag (--confirm) not set. Exiting without deleting {} attachment(s).",
                        report.len()
                    );
                }
                VacuumOutcome::Deleted { deleted, .. } => {
                    println!("✅ Done. Deleted {} attachment(s).", deleted.len());
                }
            }

            info!(
                event = "cli.vacuum_completed",
                orphaned = outcome.report().len()
            );

            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Vacuum failed: {}", e);

            error!(
                event = "cli.vacuum_failed",
                error = %e,
                error_code = e.error_code()
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
