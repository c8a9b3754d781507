use chrono::NaiveDate;
use serde::Deserialize;

use crate::{Event, Schedule};

// Wire format: `{ "name": ..., "anchor": "YYYY-MM-DD", "events": [...] }`
// where each event carries `title`, `day`, `startHour`, `durationInHours`.
// `name` and `anchor` may be omitted.
#[derive(Deserialize)]
struct Feed {
    name: Option<String>,
    anchor: Option<NaiveDate>,
    events: Vec<Event>,
}

pub fn parse_schedule<S: AsRef<str>>(s: S, default_anchor: NaiveDate) -> Option<Schedule> {
    let feed: Feed = serde_json::from_str(s.as_ref()).ok()?;

    let mut events = feed.events;

    for event in &mut events {
        event.title = event.title.trim().to_string();
    }

    events.sort_by_key(|event| (event.day, event.start_hour));

    Some(Schedule {
        name: feed.name.unwrap_or_default().trim().to_string(),
        anchor: feed.anchor.unwrap_or(default_anchor),
        events,
    })
}
