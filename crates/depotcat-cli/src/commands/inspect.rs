use super::{json_pretty, CommandError, EXIT_SUCCESS};
use depotcat_manifest::parse_report_file;
use std::path::Path;

pub fn run(manifest: &Path, json: bool) -> Result<u8, CommandError> {
    let report = parse_report_file(manifest)?;
    if json {
        let summary = serde_json::json!({
            "header": report.header,
            "entries": report.entries.len(),
        });
        println!("{}", json_pretty(&summary)?);
    } else {
        let header = &report.header;
        println!("depot_id:         {}", header.depot_id);
        println!("manifest_id:      {}", header.manifest_id);
        println!("manifest_date:    {}", header.manifest_date);
        println!("files:            {}", header.num_files);
        println!("chunks:           {}", header.num_chunks);
        println!("bytes_disk:       {}", header.bytes_disk);
        println!("bytes_compressed: {}", header.bytes_compressed);
        println!("entries:          {}", report.entries.len());
    }
    Ok(EXIT_SUCCESS)
}
