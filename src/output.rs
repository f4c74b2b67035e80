//! Writing the database, the status file and the bonus lists.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::config::OutputFiles;
use crate::dedup::Status;
use crate::error::{Error, Result};
use crate::pipeline::Build;
use crate::sense::Headwords;

/// Write `headwords` as JSON with four-space indentation and a trailing newline.
pub fn write_headwords(path: &Path, headwords: &Headwords) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(256 * 1024, file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    headwords.serialize(&mut serializer).map_err(Error::Output)?;

    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write `<digest> <status>` lines, replacing the file unless `append`.
pub fn write_statuses(path: &Path, statuses: &[(String, Status)], append: bool) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)?;
    let mut writer = BufWriter::new(file);
    for (digest, status) in statuses {
        writeln!(writer, "{} {}", digest, status)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

/// Warning shown before a run replaces files a curator may have edited.
pub fn overwrite_warning(files: &OutputFiles, append_statuses: bool) -> String {
    if append_statuses {
        format!("WARNING: This run will overwrite {}!", files.headwords)
    } else {
        format!("WARNING: This run will overwrite {} and {}!", files.headwords, files.statuses)
    }
}

/// Paths written by [`write_build`].
#[derive(Debug, Default, Clone)]
pub struct Written {
    pub headwords: PathBuf,
    pub statuses: PathBuf,
    pub bonus: Vec<PathBuf>,
}

/// Write every output of `build` into `dir`, creating it if needed.
pub fn write_build(dir: &Path, files: &OutputFiles, build: &Build, append_statuses: bool) -> Result<Written> {
    fs::create_dir_all(dir)?;

    let mut written = Written {
        headwords: dir.join(&files.headwords),
        statuses: dir.join(&files.statuses),
        bonus: Vec::new(),
    };
    write_headwords(&written.headwords, &build.headwords)?;
    write_statuses(&written.statuses, &build.statuses, append_statuses)?;

    let Some(diagnostics) = &build.diagnostics else {
        return Ok(written);
    };

    let lists = [
        (&files.multiword, &diagnostics.multiword),
        (&files.hyphenated, &diagnostics.hyphenated),
        (&files.twowords, &diagnostics.twowords),
        (&files.redlinks, &diagnostics.redlinks),
        (&files.orphans, &diagnostics.orphans),
    ];
    for (name, lines) in lists {
        let path = dir.join(name);
        write_lines(&path, lines)?;
        tracing::debug!(path = %path.display(), lines = lines.len(), "wrote bonus list");
        written.bonus.push(path);
    }
    Ok(written)
}
