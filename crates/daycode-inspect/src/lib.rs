//! Day code inspection.
//!
//! Builds a table for a shared secret and reports the day codes and beacon
//! code seeds for a run of days. Used to compare this implementation against
//! other parties that derive from the same secret.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;

use std::io::Write;

use daycode_core::{DayCodeConfig, DayCodeProvider, FixedClock};
use daycode_crypto::{BeaconCodeSeed, Day, DayCode, Timestamp, day_code::calendar};
pub use error::InspectError;

/// Inspection request.
#[derive(Debug, Clone)]
pub struct InspectRequest {
    /// Shared secret bytes
    pub secret: Vec<u8>,
    /// Table configuration
    pub config: DayCodeConfig,
    /// Timestamp whose day starts the report
    pub at: Timestamp,
    /// Number of consecutive days to report
    pub days: usize,
}

/// One reported day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRow {
    /// Day index
    pub day: Day,
    /// Timestamp at which the day begins
    pub starts_at: Timestamp,
    /// Day code for the day
    pub code: DayCode,
    /// Beacon code seed for the day
    pub seed: BeaconCodeSeed,
}

/// Derive the report rows for a request.
///
/// Rows stop early at the end of the horizon.
///
/// # Errors
///
/// - `Config`: If `days` is zero or the horizon is invalid
/// - `DayCode`: If `at` falls outside the table
pub fn inspect(request: &InspectRequest) -> Result<Vec<ReportRow>, InspectError> {
    if request.days == 0 {
        return Err(InspectError::Config("day count must be at least 1".to_string()));
    }
    request.config.validate().map_err(|e| InspectError::Config(e.to_string()))?;

    let provider =
        DayCodeProvider::new(&request.secret, request.config, FixedClock::new(request.at))?;
    let first = provider.today()?;
    let table = provider.table();

    let last = first.index().saturating_add(request.days).min(table.horizon());
    if last - first.index() < request.days {
        tracing::warn!(
            requested = request.days,
            available = last - first.index(),
            "report truncated at end of horizon"
        );
    }

    (first.index()..last)
        .map(|index| -> Result<ReportRow, InspectError> {
            let day = Day::new(index);
            Ok(ReportRow {
                day,
                starts_at: calendar::day_start(day),
                code: table.code_for_day(day)?,
                seed: table.beacon_seed_for_day(day)?,
            })
        })
        .collect()
}

/// Write rows as one line per day.
pub fn write_report<W: Write>(out: &mut W, rows: &[ReportRow]) -> Result<(), InspectError> {
    for row in rows {
        writeln!(
            out,
            "day {:>4}  starts {}  code {:#018x}  seed {:#018x}",
            row.day,
            row.starts_at,
            row.code.value(),
            row.seed.value()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use daycode_crypto::{DayCodeError, DayCodeTable, EPOCH_UNIX_SECS, SECONDS_PER_DAY};

    use super::*;

    fn request(at_day: i64, days: usize) -> InspectRequest {
        InspectRequest {
            secret: b"inspect secret".to_vec(),
            config: DayCodeConfig { horizon_days: 10 },
            at: Timestamp::from_unix_secs(EPOCH_UNIX_SECS + at_day * SECONDS_PER_DAY + 5),
            days,
        }
    }

    #[test]
    fn rows_match_table() {
        let rows = inspect(&request(2, 3)).unwrap();
        let table = DayCodeTable::new(b"inspect secret", 10).unwrap();

        assert_eq!(rows.len(), 3);
        for (offset, row) in rows.iter().enumerate() {
            let day = Day::new(2 + offset);
            assert_eq!(row.day, day);
            assert_eq!(row.code, table.code_for_day(day).unwrap());
            assert_eq!(row.seed, table.beacon_seed_for_day(day).unwrap());
            assert_eq!(row.starts_at, calendar::day_start(day));
        }
    }

    #[test]
    fn report_stops_at_horizon() {
        let rows = inspect(&request(8, 5)).unwrap();
        assert_eq!(rows.iter().map(|r| r.day.index()).collect::<Vec<_>>(), vec![8, 9]);
    }

    #[test]
    fn zero_days_is_config_error() {
        assert!(matches!(inspect(&request(0, 0)), Err(InspectError::Config(_))));
    }

    #[test]
    fn zero_horizon_is_config_error() {
        let mut req = request(0, 1);
        req.config.horizon_days = 0;
        assert!(matches!(inspect(&req), Err(InspectError::Config(_))));
    }

    #[test]
    fn oversized_horizon_is_config_error() {
        let mut req = request(0, 1);
        req.config.horizon_days = usize::MAX;
        assert!(matches!(inspect(&req), Err(InspectError::Config(_))));
    }

    #[test]
    fn timestamp_before_epoch_is_out_of_range() {
        assert!(matches!(
            inspect(&request(-1, 1)),
            Err(InspectError::DayCode(DayCodeError::OutOfRange { day: -1, horizon: 10 }))
        ));
    }

    #[test]
    fn report_formats_one_line_per_day() {
        let rows = inspect(&request(0, 2)).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &rows).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("day    0  starts 1577836800  code 0x"));
        assert!(lines[1].starts_with("day    1  starts 1577923200  code 0x"));
    }
}
