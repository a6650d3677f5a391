use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use noid_core::EntryRecord;

use crate::HarvestError;

pub const HEADER: [&str; 4] = ["id", "lemma", "category", "definition"];

/// Write entries as TSV, sorted by identifier. Returns the number of data rows.
pub fn write_tsv<'a, W, I>(writer: W, entries: I) -> Result<usize, csv::Error>
where
    W: Write,
    I: IntoIterator<Item = &'a EntryRecord>,
{
    let mut entries: Vec<&EntryRecord> = entries.into_iter().collect();
    entries.sort_by(|a, b| a.noid().cmp(b.noid()));

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    writer.write_record(HEADER)?;
    for entry in &entries {
        let definition = entry.definition();
        writer.write_record([
            entry.noid(),
            entry.lemma(),
            entry.lexical_category(),
            definition.as_str(),
        ])?;
    }
    writer.flush()?;

    Ok(entries.len())
}

/// Create (or truncate) `path` and write the whole file in one go
pub fn save_tsv<'a, I>(path: &Path, entries: I) -> Result<usize, HarvestError>
where
    I: IntoIterator<Item = &'a EntryRecord>,
{
    let to_export_error = |source: csv::Error| HarvestError::Export {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|e| to_export_error(e.into()))?;
    let mut out = BufWriter::new(file);
    let rows = write_tsv(&mut out, entries).map_err(to_export_error)?;
    out.flush().map_err(|e| to_export_error(e.into()))?;

    Ok(rows)
}
