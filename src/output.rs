//! Writes split layers to `.scss` files.

use crate::error::OutputError;
use crate::splitter::LayerMap;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension given to every layer file.
pub const LAYER_FILE_EXTENSION: &str = "scss";

/// File name for the given layer key, e.g. `base` -> `base.scss`.
pub fn layer_file_name(key: &str) -> String {
    format!("{}.{}", key, LAYER_FILE_EXTENSION)
}

/// Write a single layer's content to `<out_dir>/<key>.scss`.
///
/// An existing file is overwritten.
pub fn write_layer(out_dir: &Path, key: &str, content: &str) -> Result<PathBuf, OutputError> {
    let path = out_dir.join(layer_file_name(key));
    fs::write(&path, content).map_err(|e| OutputError::write(&path, e))?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(path)
}

/// Write every layer into `out_dir`, one file per key, in map order.
///
/// The directory must already exist. `on_written` is called with the key and
/// path right after each file is written. Writing stops at the first failure;
/// files written before it are left in place.
///
/// # Returns
/// The paths of the files written, in the order they were written.
pub fn write_layers<F>(
    layers: &LayerMap,
    out_dir: &Path,
    mut on_written: F,
) -> Result<Vec<PathBuf>, OutputError>
where
    F: FnMut(&str, &Path),
{
    let mut written = Vec::with_capacity(layers.len());

    for (key, content) in layers {
        let path = write_layer(out_dir, key, content)?;
        on_written(key.as_str(), &path);
        written.push(path);
    }

    Ok(written)
}
