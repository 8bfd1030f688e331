// src/data_input/sensor_parser.rs

use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::constants::CHANNEL_COUNT;
use crate::data_input::sensor_data::SensorLog;
use crate::error::SensorFileError;

/// Reads every record of a header-less, comma-delimited source.
///
/// Rows may have different field counts. Blank lines are skipped and fields are
/// trimmed. A source with no records at all is `Unreadable`.
pub fn read_raw_records<R: Read>(source: R) -> Result<Vec<StringRecord>, SensorFileError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    if records.is_empty() {
        return Err(SensorFileError::Unreadable);
    }
    Ok(records)
}

/// Field count of the widest record.
pub fn widest_row(records: &[StringRecord]) -> usize {
    records.iter().map(StringRecord::len).max().unwrap_or(0)
}

/// Numeric value of one channel cell. Empty, non-numeric and NaN cells are missing.
pub fn parse_channel_cell(cell: &str) -> Option<f64> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

/// First `CHANNEL_COUNT` fields of a record, if every one of them is numeric.
/// Fields past the sixth are ignored; a record shorter than six fields is rejected.
pub fn parse_channel_row(record: &StringRecord) -> Option<[f64; CHANNEL_COUNT]> {
    let mut row = [0.0; CHANNEL_COUNT];
    for (channel, value) in row.iter_mut().enumerate() {
        *value = parse_channel_cell(record.get(channel)?)?;
    }
    Some(row)
}

/// Keeps fully numeric rows in their original order. Returns the rows and the number dropped.
pub fn clean_records(records: &[StringRecord]) -> (Vec<[f64; CHANNEL_COUNT]>, usize) {
    let rows: Vec<[f64; CHANNEL_COUNT]> = records.iter().filter_map(parse_channel_row).collect();
    let dropped = records.len() - rows.len();
    (rows, dropped)
}

/// Parses and cleans one sensor log.
pub fn parse_sensor_log<R: Read>(source: R) -> Result<SensorLog, SensorFileError> {
    let records = read_raw_records(source)?;

    let widest = widest_row(&records);
    if widest < CHANNEL_COUNT {
        return Err(SensorFileError::InsufficientColumns { found: widest });
    }

    let (rows, dropped) = clean_records(&records);
    if rows.is_empty() {
        return Err(SensorFileError::NoValidRows);
    }

    Ok(SensorLog::from_rows(rows, dropped, widest))
}

/// Opens `path` and parses it with [`parse_sensor_log`]. The file is closed before returning.
pub fn load_sensor_log(path: &Path) -> Result<SensorLog, SensorFileError> {
    let file = File::open(path)?;
    parse_sensor_log(BufReader::new(file))
}
