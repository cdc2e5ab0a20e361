use log::info;
use std::fs;
use std::io;
use std::path::Path;

/// Writes the lines verbatim, newline-separated, replacing any existing file.
pub fn save_labels(path: impl AsRef<Path>, lines: &[String]) -> io::Result<()> {
    let path = path.as_ref();
    fs::write(path, lines.join("\n"))?;
    info!("Labels written to file: {}", path.display());
    Ok(())
}
