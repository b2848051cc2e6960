// crates/dbs26-scheduler/src/writer.rs

//! Concatenates completed task buffers into raw little-endian-free
//! (native-endian) `u64` output.
//!
//! Mirrors the reference writer's policy exactly:
//! - Nothing is written unless the run produced every one of
//!   [`dbs26_core::TOTAL_SEQUENCES`] sequences — a partial run (some
//!   task failed to allocate or count-mismatched) writes nothing rather
//!   than a truncated file.
//! - A named output file logs a "Saving to ..." line; standard output
//!   does not.
//! - A write failure stops output immediately; a named file also
//!   reports the error, standard output does not (a broken downstream
//!   pipe there is an ordinary occurrence, not a fault to surface).
//! - Failing to open the named output file degrades to "nothing
//!   written", not a hard error — the search itself already succeeded.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use dbs26_core::TOTAL_SEQUENCES;
use tracing::{info, warn};

/// Where completed sequences should be written.
#[derive(Clone, Debug)]
pub enum Sink {
    /// Standard output, in binary mode.
    Stdout,
    /// A named file on disk, truncated and created if missing.
    File(PathBuf),
}

impl Sink {
    /// Resolve a CLI-style output argument: `-` means [`Sink::Stdout`],
    /// anything else is a named file.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

/// Write every completed task buffer, in catalog order, to `sink`.
///
/// No-op if `sink` is `None` (benchmark mode) or `total` is short of
/// [`TOTAL_SEQUENCES`] (an incomplete run).
///
/// # Errors
///
/// Only returns `Err` if `sink` names a file and that file cannot be
/// created; every other failure (fwrite, a vanished pipe) degrades to
/// "stop writing" rather than propagating, matching the reference
/// writer.
pub fn write_sequences(
    results: &[Option<Vec<u64>>],
    total: u64,
    sink: Option<&Sink>,
) -> anyhow::Result<()> {
    let Some(sink) = sink else {
        return Ok(());
    };
    if total != TOTAL_SEQUENCES {
        return Ok(());
    }

    let mut out: Box<dyn Write> = match sink {
        Sink::Stdout => Box::new(io::stdout().lock()),
        Sink::File(path) => match open_for_write(path) {
            Some(w) => w,
            None => return Ok(()),
        },
    };

    'tasks: for buf in results.iter().flatten() {
        for &seq in buf {
            if let Err(e) = out.write_all(&seq.to_ne_bytes()) {
                if matches!(sink, Sink::File(_)) {
                    warn!(error = %e, "fwrite failed, discarding remaining output");
                }
                break 'tasks;
            }
        }
    }

    if let Sink::File(_) = sink {
        let _ = out.flush();
    }

    Ok(())
}

fn open_for_write(path: &Path) -> Option<Box<dyn Write>> {
    match File::create(path) {
        Ok(f) => {
            info!("Saving to {}", path.display());
            Some(Box::new(BufWriter::new(f)))
        }
        Err(e) => {
            warn!(error = %e, path = %path.display(), "failed to open output file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn incomplete_total_writes_nothing() {
        let dir = std::env::temp_dir().join("dbs26_writer_test_incomplete");
        let sink = Sink::File(dir.clone());
        let results = vec![Some(vec![1u64, 2, 3])];
        write_sequences(&results, 2, Some(&sink)).unwrap();
        assert!(!dir.exists() || std::fs::metadata(&dir).unwrap().len() == 0);
        let _ = std::fs::remove_file(&dir);
    }

    #[test]
    fn complete_total_writes_native_endian_bytes_in_catalog_order() {
        let dir = std::env::temp_dir().join("dbs26_writer_test_complete.bin");
        let sink = Sink::File(dir.clone());
        let results = vec![Some(vec![1u64, 2]), None, Some(vec![3u64])];
        write_sequences(&results, 3, Some(&sink)).unwrap();

        let mut bytes = Vec::new();
        File::open(&dir).unwrap().read_to_end(&mut bytes).unwrap();
        let mut expected = Vec::new();
        for v in [1u64, 2, 3] {
            expected.extend_from_slice(&v.to_ne_bytes());
        }
        assert_eq!(bytes, expected);
        let _ = std::fs::remove_file(&dir);
    }

    #[test]
    fn sink_from_arg_recognizes_dash_as_stdout() {
        assert!(matches!(Sink::from_arg("-"), Sink::Stdout));
        assert!(matches!(Sink::from_arg("out.bin"), Sink::File(_)));
    }
}
