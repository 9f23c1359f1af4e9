use super::{json_pretty, CommandError, EXIT_SUCCESS};
use depotcat_catalog::{parse_config_file, publish_release, resolve, CatalogLayout, ResolvedVersion};
use depotcat_manifest::parse_report_file;
use std::path::Path;

pub fn run(
    manifest: &Path,
    config: &Path,
    out: &Path,
    release: Option<&str>,
    json: bool,
) -> Result<u8, CommandError> {
    let config = parse_config_file(config)?;
    let report = parse_report_file(manifest)?;
    let resolved = match release {
        Some(label) => ResolvedVersion::pinned(label),
        None => resolve(&config.versions, &report.header.manifest_id)?,
    };

    let layout = CatalogLayout::new(out);
    let outcome = publish_release(&layout, &config, &report, &resolved)?;

    if json {
        println!("{}", json_pretty(&outcome)?);
    } else {
        println!(
            "published {} ({}) with {} objects",
            outcome.label, outcome.channel, outcome.objects
        );
        println!("catalog: {}", outcome.catalog_path.display());
        println!("history: {}", outcome.history_path.display());
        if outcome.duplicate {
            println!("note: manifest id was already present in the history");
        }
    }
    Ok(EXIT_SUCCESS)
}
