use std::path::{Path, PathBuf};

use eyre::Result;
use serde::Serialize;

pub fn user_config_source(path: &Path) -> config::File<config::FileSourceFile, config::FileFormat> {
    config::File::from(path.to_path_buf())
        .format(crate::PREFS_FILE_FORMAT)
        .required(false)
}

pub fn save(path: &Path, prefs_data: &impl Serialize) -> Result<()> {
    if let Some(p) = path.parent() {
        std::fs::create_dir_all(p)?;
    }
    serde_norway::to_writer(std::fs::File::create(path)?, prefs_data)?;
    Ok(())
}

/// Returns the path that a preferences file is moved to when it cannot be
/// loaded.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().unwrap_or_default().to_owned();
    file_name.push(".bak");
    path.with_file_name(file_name)
}

pub fn backup_prefs_file(path: &Path) {
    if !path.exists() {
        return;
    }
    let backup = backup_path(path);
    match std::fs::rename(path, &backup) {
        Ok(()) => log::warn!("Moved invalid preferences file to {}", backup.display()),
        Err(e) => log::error!("Error backing up preferences file: {e}"),
    }
}
