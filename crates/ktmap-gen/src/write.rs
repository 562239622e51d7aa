use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::GenError;

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Write `contents` to `path` via a sibling temp file and a rename.
///
/// Readers see either the previous file or the complete new one. The temp file is removed if
/// anything fails before the rename lands.
pub(crate) fn atomic_write(path: &Path, contents: &[u8]) -> Result<(), GenError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(GenError::io(parent))?;

    let (tmp_path, mut file) = open_unique_tmp_file(path, parent).map_err(GenError::io(path))?;
    let write_result = file.write_all(contents).and_then(|()| file.sync_all());
    drop(file);

    let result = write_result.and_then(|()| replace(&tmp_path, path));
    if let Err(err) = result {
        if let Err(remove_err) = fs::remove_file(&tmp_path) {
            if remove_err.kind() != io::ErrorKind::NotFound {
                tracing::debug!(
                    target: "ktmap.gen",
                    path = %tmp_path.display(),
                    error = %remove_err,
                    "failed to remove temporary file after write failure"
                );
            }
        }
        return Err(GenError::Io {
            path: path.to_path_buf(),
            source: err,
        });
    }
    Ok(())
}

fn replace(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        // `rename` doesn't overwrite on Windows.
        Err(err) if cfg!(windows) && to.exists() => {
            fs::remove_file(to)?;
            fs::rename(from, to).map_err(|_| err)
        }
        other => other,
    }
}

fn open_unique_tmp_file(dest: &Path, parent: &Path) -> io::Result<(PathBuf, fs::File)> {
    let file_name = dest
        .file_name()
        .ok_or_else(|| io::Error::other("destination path has no file name"))?;
    let pid = std::process::id();

    loop {
        let counter = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut tmp_name = file_name.to_os_string();
        tmp_name.push(format!(".tmp.{pid}.{counter}"));
        let tmp_path = parent.join(tmp_name);

        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
        {
            Ok(file) => return Ok((tmp_path, file)),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(err),
        }
    }
}
