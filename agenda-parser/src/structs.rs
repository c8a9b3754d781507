use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub name: String,
    pub anchor: NaiveDate,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub title: String,
    pub day: i64,
    pub start_hour: i64,
    pub duration_in_hours: i64,
}

impl Event {
    pub fn date(&self, anchor: NaiveDate) -> Option<NaiveDate> {
        anchor.checked_add_signed(Duration::try_days(self.day)?)
    }

    // Hour fields are unbounded, values past 24 roll over into the
    // following days.
    pub fn starts_at(&self, anchor: NaiveDate) -> Option<NaiveDateTime> {
        self.date(anchor)?
            .and_hms_opt(0, 0, 0)?
            .checked_add_signed(Duration::try_hours(self.start_hour)?)
    }

    pub fn ends_at(&self, anchor: NaiveDate) -> Option<NaiveDateTime> {
        self.starts_at(anchor)?
            .checked_add_signed(Duration::try_hours(self.duration_in_hours)?)
    }
}
