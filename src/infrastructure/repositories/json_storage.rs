use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::domain::entities::task::Task;
use crate::domain::repositories::StorageFault;

// Save to JSON
pub fn save_tasks(tasks: &[Task], file_path: &Path) -> Result<(), StorageFault> {
    let json = to_json_pretty(tasks)?;
    write_atomic(file_path, &json)?;
    Ok(())
}

// Load from JSON. A missing or blank file is an empty list.
pub fn load_tasks(file_path: &Path) -> Result<Vec<Task>, StorageFault> {
    let data = match fs::read_to_string(file_path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    if data.trim().is_empty() {
        return Ok(Vec::new());
    }
    let tasks: Vec<Task> = serde_json::from_str(&data)?;
    Ok(tasks)
}

/// Pretty JSON with 4-space indentation.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Replace `file_path` with `contents` via a synced temp file in the same
/// directory and a rename, so the old content survives a failed write.
/// The parent directory must already exist.
pub fn write_atomic(file_path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    // keep the mode of the file being replaced instead of the temp file's 0600
    if let Ok(meta) = fs::metadata(file_path) {
        temp.as_file().set_permissions(meta.permissions())?;
    }
    temp.write_all(contents)?;
    temp.as_file().sync_all()?;
    temp.persist(file_path)?;
    Ok(())
}
