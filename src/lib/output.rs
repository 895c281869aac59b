use super::error::Error;
use log::warn;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub trait Output {
    fn record_count(&self) -> usize;
    fn write_csv_to(&self, writer: &mut dyn Write) -> Result<(), Error>;
    fn write_json_to(&self, writer: &mut dyn Write) -> Result<(), Error>;

    /// Writes the records to a new CSV file and returns how many were written.
    /// Nothing is created for an empty collection.
    fn write_csv(&self, path: &Path) -> Result<usize, Error> {
        if self.record_count() == 0 {
            warn!("no records, skipping {}", path.display());
            return Ok(0);
        }
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_csv_to(&mut writer)?;
        writer.flush()?;
        Ok(self.record_count())
    }

    /// Like [`Output::write_csv`], as a pretty printed JSON array.
    fn write_json(&self, path: &Path) -> Result<usize, Error> {
        if self.record_count() == 0 {
            warn!("no records, skipping {}", path.display());
            return Ok(0);
        }
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_json_to(&mut writer)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(self.record_count())
    }
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

impl<T: Serialize> Output for [T] {
    fn record_count(&self) -> usize {
        self.len()
    }

    fn write_csv_to(&self, writer: &mut dyn Write) -> Result<(), Error> {
        let values = self
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<Value>, _>>()?;
        let columns: BTreeSet<&str> = values
            .iter()
            .filter_map(Value::as_object)
            .flat_map(|object| object.keys().map(String::as_str))
            .collect();

        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(&columns)?;
        for value in &values {
            csv.write_record(columns.iter().map(|column| cell(value.get(*column))))?;
        }
        csv.flush()?;
        Ok(())
    }

    fn write_json_to(&self, writer: &mut dyn Write) -> Result<(), Error> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
