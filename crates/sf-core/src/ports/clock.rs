//! Clock port, so date-sensitive logic stays testable.

use chrono::{DateTime, NaiveDate, Utc};

pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Today's date in UTC, used for stay validation.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
