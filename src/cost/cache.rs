//! Persisted forms of the bigram table. These are caches only: a table read
//! back must equal the one that was written, and a malformed file is an error,
//! never a partially filled table.

use super::table::{bigram_index, BigramCostTable, TABLE_SIZE, UNREGISTERED};
use crate::error::{TpResult, TypePassError};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Writes the flat `(a<<5)+b` array as a JSON list of integers.
pub fn save_json<P: AsRef<Path>>(table: &BigramCostTable, path: P) -> TpResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, table.as_slice())?;
    writer.flush()?;
    info!("💾 Saved bigram table to {:?}", path.as_ref());
    Ok(())
}

pub fn load_json<P: AsRef<Path>>(path: P) -> TpResult<BigramCostTable> {
    let file = File::open(path.as_ref())?;
    let costs: Vec<u32> = serde_json::from_reader(BufReader::new(file))?;
    debug!("Read {} cached entries from {:?}", costs.len(), path.as_ref());
    BigramCostTable::from_flat(costs)
}

/// Writes `From,To,Cost` rows for every registered letter pair.
pub fn write_csv<W: Write>(table: &BigramCostTable, writer: W) -> TpResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["From", "To", "Cost"])?;

    let letters = table.letters();
    for &a in &letters {
        for &b in &letters {
            if let Some(cost) = table.cost_chars(a, b) {
                wtr.write_record(&[a.to_string(), b.to_string(), cost.to_string()])?;
            }
        }
    }
    wtr.flush()?;
    Ok(())
}

pub fn read_csv<R: Read>(reader: R) -> TpResult<BigramCostTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut costs = vec![UNREGISTERED; TABLE_SIZE];

    for (row, result) in rdr.records().enumerate() {
        let rec = result?;
        if rec.len() < 3 {
            return Err(TypePassError::Validation(format!(
                "Row {}: expected From,To,Cost",
                row + 1
            )));
        }
        let from = single_letter(&rec[0], row)?;
        let to = single_letter(&rec[1], row)?;
        let cost: u32 = rec[2].parse().map_err(|_| {
            TypePassError::Validation(format!("Row {}: bad cost '{}'", row + 1, &rec[2]))
        })?;

        let idx = bigram_index(from, to).ok_or_else(|| {
            TypePassError::Validation(format!("Row {}: pair outside the alphabet", row + 1))
        })?;
        costs[idx] = cost;
    }

    BigramCostTable::from_flat(costs)
}

pub fn save_csv<P: AsRef<Path>>(table: &BigramCostTable, path: P) -> TpResult<()> {
    let file = File::create(path.as_ref())?;
    write_csv(table, BufWriter::new(file))?;
    info!("💾 Saved bigram table to {:?}", path.as_ref());
    Ok(())
}

pub fn load_csv<P: AsRef<Path>>(path: P) -> TpResult<BigramCostTable> {
    read_csv(File::open(path)?)
}

fn single_letter(field: &str, row: usize) -> TpResult<u8> {
    match field.as_bytes() {
        [b] if b.is_ascii_lowercase() => Ok(*b),
        _ => Err(TypePassError::Validation(format!(
            "Row {}: '{}' is not a single lowercase letter",
            row + 1,
            field
        ))),
    }
}
