use common::model::{ConversionModel, ModelError};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::lookup_table::LookupTable;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Table length must be at least 1.")]
    EmptyTable,

    #[error("Table length {0} exceeds the temperature range of the model.")]
    TooLong(usize),

    #[error("Failed to compute table entry.")]
    Model(#[from] ModelError),

    /// Firmware reverse lookups need readings that never rise.
    #[error("Table is not monotonic, reading rises at {celsius} degC.")]
    NotMonotonic { celsius: usize },
}

/// Compute the expected reading for 0, 1, .. `length - 1` degC, in order.
#[tracing::instrument(skip(model))]
pub fn build_table(model: &ConversionModel, length: usize) -> Result<LookupTable, TableError> {
    if length == 0 {
        return Err(TableError::EmptyTable);
    }
    let last = i32::try_from(length - 1).map_err(|_| TableError::TooLong(length))?;

    let ceiling = model.constants().accumulated_max();
    let mut values = Vec::with_capacity(length);
    let mut saturated = 0usize;
    for celsius in 0..=last {
        let reading = model.expected_reading(celsius)?;
        if reading as u32 == ceiling || reading == 0 {
            debug!("Entry for {} degC is clamped at {}.", celsius, reading);
            saturated += 1;
        }
        values.push(reading);
    }

    let table = check_monotonic(LookupTable::new(values))?;

    info!("Built {} ({} clamped entries).", table, saturated);
    Ok(table)
}

/// Refuse a table whose readings rise anywhere.
fn check_monotonic(table: LookupTable) -> Result<LookupTable, TableError> {
    match table.first_rise() {
        Some(celsius) => Err(TableError::NotMonotonic { celsius }),
        None => Ok(table),
    }
}
