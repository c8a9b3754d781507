use chrono::NaiveDate;
use ics::properties::{DtEnd, DtStart, Summary};

use crate::{Event, Schedule};

impl Schedule {
    #[must_use]
    pub fn to_ics(&self) -> ics::ICalendar<'_> {
        let mut icalendar = ics::ICalendar::new("2.0", &self.name);

        for event in &self.events {
            if let Some(ics_event) = event.to_ics(self.anchor) {
                icalendar.add_event(ics_event);
            }
        }

        icalendar
    }
}

impl Event {
    // The contract carries no timezone, timestamps are emitted floating.
    #[must_use]
    pub fn to_ics(&self, anchor: NaiveDate) -> Option<ics::Event<'_>> {
        let start = self.starts_at(anchor)?.format("%Y%m%dT%H%M%S").to_string();
        let end = self.ends_at(anchor)?.format("%Y%m%dT%H%M%S").to_string();

        let id = format!("{}_{}", start, self.title.replace(' ', "-"));

        let mut ics_event = ics::Event::new(id, start.clone());

        ics_event.push(DtStart::new(start));
        ics_event.push(DtEnd::new(end));
        ics_event.push(Summary::new(&self.title));

        Some(ics_event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> Schedule {
        Schedule {
            name: "Team calendar".into(),
            anchor: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            events: vec![
                Event {
                    title: "Sprint review".into(),
                    day: 1,
                    start_hour: 9,
                    duration_in_hours: 2,
                },
                Event {
                    title: "Never".into(),
                    day: i64::MAX,
                    start_hour: 0,
                    duration_in_hours: 0,
                },
            ],
        }
    }

    #[test]
    fn renders_floating_timestamps() {
        let ics = schedule().to_ics().to_string();

        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(ics.contains("DTSTART:20240402T090000"));
        assert!(ics.contains("DTEND:20240402T110000"));
        assert!(ics.contains("SUMMARY:Sprint review"));
        assert!(!ics.contains("TZID"));
    }

    #[test]
    fn derives_uid_from_start_and_title() {
        let ics = schedule().to_ics().to_string();
        assert!(ics.contains("UID:20240402T090000_Sprint-review"));
    }

    #[test]
    fn skips_unresolvable_events() {
        let ics = schedule().to_ics().to_string();

        assert!(!ics.contains("Never"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
    }
}
