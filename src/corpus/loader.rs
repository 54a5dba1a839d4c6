// Text loader: one plain-text file per brand per sector.
//
// The brand key is the file stem. Files are read as bytes and decoded
// lossily so a stray invalid byte never drops a brand. A missing sector
// directory is a warning, not an error: the sector simply has nothing to
// analyze. An unreadable file drops that brand only.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use super::{Document, Sector};

/// Load every `*.txt` file in `dir` into a brand -> text map.
///
/// Brands iterate in lexicographic order. Duplicate stems (e.g. `Nike.txt`
/// and `Nike.TXT`) overwrite each other; the last file read wins.
pub fn load_sector(dir: &Path) -> Result<BTreeMap<String, String>> {
    let mut texts = BTreeMap::new();

    if !dir.is_dir() {
        warn!(dir = %dir.display(), "Data directory does not exist");
        return Ok(texts);
    }

    let mut paths: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("Failed to list {}", dir.display()))?
        .filter_map(|entry| match entry {
            Ok(e) => Some(e.path()),
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Failed to read directory entry, skipping");
                None
            }
        })
        .filter(|p| p.is_file() && is_text_file(p))
        .collect();
    paths.sort();

    for path in paths {
        let Some(brand) = path.file_stem().and_then(|s| s.to_str()) else {
            warn!(path = %path.display(), "Skipping file with non-UTF-8 name");
            continue;
        };
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(
                    brand,
                    path = %path.display(),
                    error = %e,
                    "Failed to read brand file, skipping"
                );
                continue;
            }
        };
        let text = String::from_utf8_lossy(&bytes).into_owned();

        if texts.insert(brand.to_string(), text).is_some() {
            debug!(brand, "Duplicate brand file, keeping the last one read");
        }
    }

    info!(dir = %dir.display(), brands = texts.len(), "Loaded brand texts");
    Ok(texts)
}

/// Load a sector's documents from `<data_dir>/<Sector>`.
pub fn load_documents(data_dir: &Path, sector: Sector) -> Result<Vec<Document>> {
    let texts = load_sector(&data_dir.join(sector.as_str()))?;
    Ok(texts
        .into_iter()
        .map(|(brand, text)| Document {
            brand,
            sector,
            text,
        })
        .collect())
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
}
