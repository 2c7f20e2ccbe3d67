use jexvac_core::{OrphanReport, Progress, ProgressReporter, TokenSource};

const RULE_WIDTH: usize = 38;

/// Prints run progress to stdout as it happens.
pub struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn report(&self, progress: Progress) {
        match progress {
            Progress::PortProbed { port, found: true } => {
                println!("Trying port {port}... found Joplin");
            }
            Progress::PortProbed { port, found: false } => {
                println!("Trying port {port}... not the port, skipping");
            }
            Progress::TokenResolved { source } => match source {
                TokenSource::Provided => println!("Using provided token"),
                TokenSource::Cached => println!("Loaded token from cache"),
                TokenSource::Handshake => println!("Access granted, token saved"),
            },
            Progress::ArchiveScanned { referenced } => {
                println!("Archive references {referenced} attachment(s)");
            }
            Progress::PageFetched {
                page,
                items,
                total,
                has_more,
            } => {
                println!("Page {page}: got {items}, total {total}, has_more {has_more}");
            }
            Progress::Deleting { index, total, id } => {
                println!("Deleting {index} of {total}, id={id}");
            }
            Progress::Deleted { id } => {
                println!("   deleted {id}");
            }
        }
    }
}

/// Print the comparison summary and the orphan list.
pub fn print_report(report: &OrphanReport) {
    println!(
        "Referenced: {}, all: {}",
        report.referenced_count, report.catalog_count
    );
    println!("Orphaned count: {}", report.len());

    if report.is_empty() {
        return;
    }

    println!();
    println!("id - filename");
    println!("{}", "-".repeat(RULE_WIDTH));
    for orphan in &report.orphans {
        println!("{orphan}");
    }
    println!("{}", "-".repeat(RULE_WIDTH));
    println!();
}
