//! Job-shop domain models.
//!
//! Provides the data types for describing a job-shop problem and the
//! timetable produced for it.
//!
//! # Domain Mappings
//!
//! | u-jobshop | Manufacturing | Classic JSSP |
//! |-----------|--------------|--------------|
//! | Job | Order / Routing | Job J_j |
//! | Operation | Work step | O_ij |
//! | Machine | Work center | Machine M_i |
//! | Schedule | Production plan | Solution |

mod job;
mod operation;
mod schedule;

pub use job::{operations_of, Job, Step};
pub use operation::{Operation, OperationSpec};
pub use schedule::{CriticalPath, Schedule, ScheduleEntry};
