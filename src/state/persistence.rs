use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{PlannerError, Result};
use crate::models::SavedSelection;

/// Default single-slot save file, relative to the working directory.
pub const DEFAULT_SAVE_FILE: &str = "receipt.json";

/// Write the selection record, overwriting any previous save.
pub fn save_selection<P: AsRef<Path>>(path: P, selection: &SavedSelection) -> Result<()> {
    let json = serde_json::to_string_pretty(selection)?;
    fs::write(path.as_ref(), json)?;

    tracing::info!(path = %path.as_ref().display(), "selection saved");
    Ok(())
}

/// Read the selection record back.
///
/// A missing file yields `SaveNotFound`; content that is not the expected
/// keyed record yields `CorruptSave`.
pub fn load_selection<P: AsRef<Path>>(path: P) -> Result<SavedSelection> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(PlannerError::SaveNotFound(path.to_path_buf()));
        }
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            return Err(PlannerError::CorruptSave(e.to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let selection: SavedSelection =
        serde_json::from_str(&content).map_err(|e| PlannerError::CorruptSave(e.to_string()))?;

    tracing::info!(path = %path.display(), "selection loaded");
    Ok(selection)
}
