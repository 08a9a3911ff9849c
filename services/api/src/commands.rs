use crate::infra::InMemoryListingStore;
use clap::Args;
use family_directory::config::AppConfig;
use family_directory::error::AppError;
use family_directory::import::{template_csv, write_error_report, ImportResult, ListingImporter};
use family_directory::listings::ListingKind;
use family_directory::telemetry;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ImportArgs {
    /// Listing kind: tutoring-provider, summer-camp, internship or job
    #[arg(long, value_parser = parse_kind)]
    pub(crate) kind: ListingKind,
    /// CSV file with a header row followed by one listing per line
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Write rejected rows to this CSV file
    #[arg(long)]
    pub(crate) errors_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct TemplateArgs {
    /// Listing kind: tutoring-provider, summer-camp, internship or job
    #[arg(long, value_parser = parse_kind)]
    pub(crate) kind: ListingKind,
}

pub(crate) fn parse_kind(raw: &str) -> Result<ListingKind, String> {
    raw.parse::<ListingKind>().map_err(|err| err.to_string())
}

pub(crate) fn run_import(args: ImportArgs) -> Result<(), AppError> {
    let ImportArgs {
        kind,
        file,
        errors_csv,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let csv = std::fs::read_to_string(&file)?;
    let store = Arc::new(InMemoryListingStore::default());
    let importer = ListingImporter::new(store.clone());
    let result = importer.import(kind, &csv);

    print!("{}", render_import_summary(kind, &result, &store));

    if let Some(path) = errors_csv {
        let output = std::fs::File::create(&path)?;
        write_error_report(&result, output)?;
        println!("Rejected rows written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_template(args: TemplateArgs) -> Result<(), AppError> {
    print!("{}", template_csv(args.kind)?);
    Ok(())
}

fn render_import_summary(
    kind: ListingKind,
    result: &ImportResult,
    store: &InMemoryListingStore,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} import", kind.label());
    let _ = writeln!(
        out,
        "- {} created, {} rejected",
        result.success,
        result.failed()
    );
    let _ = writeln!(
        out,
        "- {} awaiting approval",
        store.pending_count(kind)
    );

    let listings = store.listings();
    if !listings.is_empty() {
        let _ = writeln!(out, "\nCreated listings");
        for (id, listing) in &listings {
            let _ = writeln!(out, "- {} | {}", id, listing.title);
        }
    }

    if !result.is_clean() {
        let _ = writeln!(out, "\nErrors");
        for error in &result.errors {
            let _ = writeln!(out, "- {error}");
        }
    }

    out
}
