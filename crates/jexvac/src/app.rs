use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("jexvac")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Remove Joplin attachments that are no longer referenced by any note")
        .long_about(
            "Compares the attachments of a running Joplin instance with a JEX export of your notes.\n\
            Joplin only exports attachments that notes still reference, so anything missing from\n\
            the export is orphaned.\n\n\
            By default only the list of orphaned attachments is printed (dry run). Nothing is\n\
            deleted unless --confirm is given.\n\n\
            On first use an API token is requested from Joplin and cached in .joplin_token;\n\
            later runs reuse it.\n\n\
            Always back up before deleting anything.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("archive")
                .help("Path to the JEX file (Joplin Export File)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .help("Port of the Joplin Web Clipper service (default: auto-detect)")
                .value_parser(value_parser!(u16)),
        )
        .arg(
            Arg::new("token")
                .long("token")
                .help("API token to use instead of the cached one"),
        )
        .arg(
            Arg::new("token-file")
                .long("token-file")
                .help("Token cache location (overrides config, default: .joplin_token)"),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .help("Page size when listing attachments, 1-100; anything else uses 50")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("confirm")
                .long("confirm")
                .help("Actually delete the orphaned attachments")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("test-del-1")
                .long("test-del-1")
                .help("Delete only one orphaned attachment, for testing (requires --confirm)")
                .action(ArgAction::SetTrue),
        )
}
