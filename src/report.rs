//! Fixed width text report, one row per grid resolution.
//!
//! ```text
//! nboxes    boxlen                   iboxlen                  count     boxdim
//! 1         20.000000000000000       0.050000000000000        1         -0.000000000000000
//! 4         10.000000000000000       0.100000000000000        2         -0.301029995663981
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::config::ReportOptions;
use crate::error::{BoxDimError, Result};
use crate::estimator::ResultRecord;

const INT_WIDTH: usize = 10;
const FLOAT_WIDTH: usize = 25;
const PRECISION: usize = 15;

/// Written in place of an undefined dimension estimate.
pub const UNDEFINED: &str = "nan";

fn header(options: &ReportOptions) -> String {
    let mut line = format!(
        "{:<iw$}{:<fw$}{:<fw$}{:<iw$}",
        "nboxes",
        "boxlen",
        "iboxlen",
        "count",
        iw = INT_WIDTH,
        fw = FLOAT_WIDTH
    );
    if options.include_dimension {
        line.push_str("boxdim");
    }
    line.trim_end().to_string()
}

fn row(record: &ResultRecord, options: &ReportOptions) -> String {
    let mut line = format!(
        "{:<iw$}{:<fw$.p$}{:<fw$.p$}{:<iw$}",
        record.nboxes,
        record.boxlen,
        record.inverse_boxlen,
        record.count,
        iw = INT_WIDTH,
        fw = FLOAT_WIDTH,
        p = PRECISION
    );
    if options.include_dimension {
        match record.dimension {
            Some(d) => line.push_str(&format!("{:.p$}", d, p = PRECISION)),
            None => line.push_str(UNDEFINED),
        }
    }
    line.trim_end().to_string()
}

/// Write the report table for `records` to `writer`.
pub fn write_report(
    mut writer: impl Write,
    records: &[ResultRecord],
    options: &ReportOptions,
) -> Result<()> {
    writeln!(writer, "{}", header(options))?;
    for record in records {
        writeln!(writer, "{}", row(record, options))?;
    }
    writer.flush()?;
    Ok(())
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write the report to `path`.
///
/// The table is written to a temporary sibling file first and renamed into place once complete,
/// so `path` never holds a partial report.
pub fn save_report(
    path: impl AsRef<Path>,
    records: &[ResultRecord],
    options: &ReportOptions,
) -> Result<()> {
    let path = path.as_ref();
    let tmp = temporary_path(path);
    let io_err = |p: &Path| {
        let p = p.to_path_buf();
        move |source| BoxDimError::Io { path: p, source }
    };

    let written = File::create(&tmp)
        .map_err(io_err(&tmp))
        .and_then(|file| write_report(BufWriter::new(file), records, options))
        .and_then(|_| fs::rename(&tmp, path).map_err(io_err(path)));
    if written.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    written?;

    info!("wrote {} rows to {}", records.len(), path.display());
    Ok(())
}
