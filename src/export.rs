//! CSV export of schedule entries.
//!
//! Columns: `Machine,Task,Job,Start,Finish,Is_Critical`, one row per entry
//! in commit order.

use std::io;

use serde::Serialize;

use crate::models::{Schedule, ScheduleEntry};

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Machine")]
    machine: &'a str,
    #[serde(rename = "Task")]
    task: &'a str,
    #[serde(rename = "Job")]
    job: &'a str,
    #[serde(rename = "Start")]
    start: i64,
    #[serde(rename = "Finish")]
    finish: i64,
    #[serde(rename = "Is_Critical")]
    is_critical: bool,
}

impl<'a> From<&'a ScheduleEntry> for CsvRow<'a> {
    fn from(e: &'a ScheduleEntry) -> Self {
        Self {
            machine: &e.machine,
            task: &e.operation,
            job: &e.job_id,
            start: e.start,
            finish: e.finish,
            is_critical: e.is_critical,
        }
    }
}

/// Writes the schedule as CSV (with header) to `writer`.
pub fn write_csv<W: io::Write>(schedule: &Schedule, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    if schedule.is_empty() {
        wtr.write_record(["Machine", "Task", "Job", "Start", "Finish", "Is_Critical"])?;
    }
    for entry in &schedule.entries {
        wtr.serialize(CsvRow::from(entry))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Renders the schedule as a CSV string.
pub fn to_csv_string(schedule: &Schedule) -> Result<String, csv::Error> {
    let mut buf = Vec::new();
    write_csv(schedule, &mut buf)?;
    String::from_utf8(buf)
        .map_err(|e| csv::Error::from(io::Error::new(io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_rows() {
        let mut s = Schedule::new();
        s.add_entry(ScheduleEntry::new("M1", "J1_T1", "J1", 0, 2).with_critical(true));
        s.add_entry(ScheduleEntry::new("M2", "J2_T1", "J2", 0, 1));

        let csv = to_csv_string(&s).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Machine,Task,Job,Start,Finish,Is_Critical");
        assert_eq!(lines[1], "M1,J1_T1,J1,0,2,true");
        assert_eq!(lines[2], "M2,J2_T1,J2,0,1,false");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_csv_empty_has_header() {
        let csv = to_csv_string(&Schedule::new()).unwrap();
        assert_eq!(csv.trim_end(), "Machine,Task,Job,Start,Finish,Is_Critical");
    }
}
