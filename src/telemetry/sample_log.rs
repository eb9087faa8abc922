use super::sink::{SampleRow, SampleStore, SinkError};
use csv::{Writer, WriterBuilder};
use std::{fs::File, path::Path};

/// Tabular sample log backed by a CSV file.
///
/// The header is written once on open. Rows are buffered and only reach the file
/// when the buffer fills or on [`flush`](SampleStore::flush).
pub(crate) struct CsvSampleLog {
    writer: Writer<File>,
}

impl CsvSampleLog {
    /// Creates (or truncates) the log at `path` and writes the header row.
    pub(crate) fn create<P: AsRef<Path>>(path: P) -> Result<Self, SinkError> {
        let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
        writer.write_record(SampleRow::HEADER)?;
        Ok(Self { writer })
    }
}

impl SampleStore for CsvSampleLog {
    fn write_sample(&mut self, row: &SampleRow) -> Result<(), SinkError> {
        self.writer.serialize(row)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        Ok(())
    }
}
