// src/data_input/log_parser.rs

use csv::ReaderBuilder;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::constants::COMMENT_MARKER;
use crate::data_input::log_data::StickSample;

/// Channel column names, in `StickSample` field order.
pub const CHANNEL_HEADERS: [&str; 4] = ["Ail", "Ele", "Thr", "Rud"];

/// Parses the CSV log file and extracts the stick samples.
///
/// Columns are located by header name, so extra columns and arbitrary column
/// order are fine. Lines starting with `#` are ignored. Rows missing any of
/// the four channel values are dropped.
///
/// Returns the parsed samples and the number of dropped rows.
pub fn parse_log_file(input_file_path: &Path) -> Result<(Vec<StickSample>, usize), Box<dyn Error>> {
    let file = File::open(input_file_path).map_err(|e| {
        format!(
            "Error: cannot open input file '{}': {}",
            input_file_path.display(),
            e
        )
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .comment(Some(COMMENT_MARKER))
        .flexible(true)
        .from_reader(BufReader::new(file));

    // --- Header Index Mapping ---
    let header_record = reader.headers()?.clone();
    let channel_indices: Vec<Option<usize>> = CHANNEL_HEADERS
        .iter()
        .map(|&name| header_record.iter().position(|h| h.trim() == name))
        .collect();

    let missing: Vec<&str> = CHANNEL_HEADERS
        .iter()
        .zip(&channel_indices)
        .filter(|(_, idx)| idx.is_none())
        .map(|(&name, _)| name)
        .collect();
    if !missing.is_empty() {
        return Err(format!(
            "Error: missing required channel columns in '{}': {}. Aborting.",
            input_file_path.display(),
            missing.join(", ")
        )
        .into());
    }

    // --- Data Reading ---
    let mut samples: Vec<StickSample> = Vec::new();
    let mut dropped_rows = 0usize;
    for (row_index, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                let parse_channel = |slot: usize| -> Option<f64> {
                    channel_indices
                        .get(slot)
                        .and_then(|opt_csv_idx| opt_csv_idx.as_ref())
                        .and_then(|&csv_idx| record.get(csv_idx))
                        .and_then(|val_str| val_str.parse::<f64>().ok())
                };

                match (
                    parse_channel(0),
                    parse_channel(1),
                    parse_channel(2),
                    parse_channel(3),
                ) {
                    (Some(ail), Some(ele), Some(thr), Some(rud)) => {
                        samples.push(StickSample { ail, ele, thr, rud });
                    }
                    _ => dropped_rows += 1,
                }
            }
            Err(e) => {
                eprintln!(
                    "Warning: skipping row {} due to CSV read error: {}",
                    row_index + 1,
                    e
                );
                dropped_rows += 1;
            }
        }
    }

    Ok((samples, dropped_rows))
}

// src/data_input/log_parser.rs
