use crate::catalog::CatalogDocument;
use crate::config::CatalogConfig;
use crate::history::{ReleaseHistory, ReleaseRecord};
use crate::layout::CatalogLayout;
use crate::resolver::ResolvedVersion;
use crate::version::Channel;
use crate::CatalogError;
use chrono::Utc;
use depotcat_manifest::DepotReport;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// What one publish run wrote, for callers that report results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishOutcome {
    pub label: String,
    pub channel: Channel,
    pub objects: usize,
    pub catalog_path: PathBuf,
    pub history_path: PathBuf,
    /// The manifest id was already recorded; a duplicate record was
    /// prepended anyway.
    pub duplicate: bool,
}

/// Publishes one parsed report under its resolved version.
///
/// The catalog document and the updated history are both computed before
/// either file is touched, so a failure anywhere leaves the output directory
/// as it was. The per-version catalog file is overwritten on rerun; the
/// history file is fully replaced.
pub fn publish_release(
    layout: &CatalogLayout,
    config: &CatalogConfig,
    report: &DepotReport,
    resolved: &ResolvedVersion,
) -> Result<PublishOutcome, CatalogError> {
    let document = CatalogDocument::from_entries(&report.entries);

    let history_path = layout.history_path();
    let mut history = if history_path.exists() {
        ReleaseHistory::read_from_file(&history_path)?
    } else {
        ReleaseHistory::seeded(&config.latest)
    };

    let duplicate = history.contains_manifest(&report.header.manifest_id);
    if duplicate {
        warn!(
            "manifest id {} is already recorded; prepending a duplicate entry",
            report.header.manifest_id
        );
    }

    history.record(ReleaseRecord {
        id: resolved.label.clone(),
        channel: resolved.channel,
        time: discovery_time(),
        release_time: report.header.manifest_date.clone(),
        manifest_id: report.header.manifest_id.clone(),
        url: format!(
            "{}/{}.json",
            config.catalog_base_url.trim_end_matches('/'),
            resolved.label
        ),
    });

    layout.initialize()?;
    let catalog_path = layout.catalog_path(&resolved.label);
    document.write_to_file(&catalog_path)?;
    history.write_to_file(&history_path)?;

    info!(
        "published {} ({} objects) for depot {}",
        resolved.label,
        document.objects.len(),
        report.header.depot_id
    );

    Ok(PublishOutcome {
        label: resolved.label.clone(),
        channel: resolved.channel,
        objects: document.objects.len(),
        catalog_path,
        history_path,
        duplicate,
    })
}

/// Current UTC time at second precision with an explicit offset, matching
/// the release-time normalization.
fn discovery_time() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S+00:00").to_string()
}
