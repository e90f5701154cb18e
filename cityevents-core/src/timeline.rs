//! Classifying events relative to a reference instant.

use chrono::NaiveDateTime;
use std::cmp::Reverse;
use std::fmt;

use crate::event::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventState {
    Future,
    Ongoing,
    Past,
}

impl fmt::Display for EventState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventState::Future => write!(f, "Upcoming"),
            EventState::Ongoing => write!(f, "Happening now"),
            EventState::Past => write!(f, "Past"),
        }
    }
}

impl Event {
    /// Start is inclusive, end is exclusive: an event is ongoing at its start
    /// instant and past at its end instant.
    pub fn state_at(&self, now: NaiveDateTime) -> EventState {
        if now < self.start {
            EventState::Future
        } else if now < self.end() {
            EventState::Ongoing
        } else {
            EventState::Past
        }
    }
}

/// Events split into the three listing buckets.
///
/// `ongoing` and `future` are ordered by start time, soonest first; `past`
/// is ordered most recent first.
#[derive(Debug, Default)]
pub struct Timeline<'a> {
    pub ongoing: Vec<&'a Event>,
    pub future: Vec<&'a Event>,
    pub past: Vec<&'a Event>,
}

impl<'a> Timeline<'a> {
    pub fn at<I>(events: I, now: NaiveDateTime) -> Self
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let mut timeline = Timeline::default();

        for event in events {
            match event.state_at(now) {
                EventState::Ongoing => timeline.ongoing.push(event),
                EventState::Future => timeline.future.push(event),
                EventState::Past => timeline.past.push(event),
            }
        }

        timeline.ongoing.sort_by_key(|e| e.start);
        timeline.future.sort_by_key(|e| e.start);
        timeline.past.sort_by_key(|e| Reverse(e.start));
        timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Category, EventId};
    use chrono::{Duration, NaiveDate};

    fn jan_first(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn event(id: u32, start: NaiveDateTime, duration_hours: u32) -> Event {
        Event {
            id: EventId(id),
            name: format!("event {id}"),
            address: "Centro".to_string(),
            category: Category::Other,
            start,
            description: String::new(),
            duration_hours,
        }
    }

    #[test]
    fn two_hour_event_at_ten() {
        let e = event(1, jan_first(10, 0), 2);

        assert_eq!(e.state_at(jan_first(9, 0)), EventState::Future);
        assert_eq!(e.state_at(jan_first(11, 0)), EventState::Ongoing);
        assert_eq!(e.state_at(jan_first(13, 0)), EventState::Past);
    }

    #[test]
    fn boundaries() {
        let e = event(1, jan_first(10, 0), 2);

        assert_eq!(e.state_at(jan_first(10, 0)), EventState::Ongoing);
        assert_eq!(e.state_at(jan_first(12, 0)), EventState::Past);
        assert_eq!(
            e.state_at(jan_first(10, 0) - Duration::seconds(1)),
            EventState::Future
        );
    }

    #[test]
    fn zero_duration_is_never_ongoing() {
        let e = event(1, jan_first(10, 0), 0);

        assert_eq!(e.state_at(jan_first(9, 59)), EventState::Future);
        assert_eq!(e.state_at(jan_first(10, 0)), EventState::Past);
    }

    #[test]
    fn exactly_one_state_across_a_sweep() {
        for duration_hours in [0, 1, 3] {
            let e = event(1, jan_first(10, 0), duration_hours);
            let mut now = jan_first(8, 0);
            while now <= jan_first(15, 0) {
                let state = e.state_at(now);
                let future = now < e.start;
                let ongoing = now >= e.start && now < e.end();
                let past = now >= e.end();
                assert_eq!(
                    [future, ongoing, past].iter().filter(|b| **b).count(),
                    1
                );
                assert_eq!(state == EventState::Future, future);
                assert_eq!(state == EventState::Ongoing, ongoing);
                assert_eq!(state == EventState::Past, past);
                now += Duration::minutes(15);
            }
        }
    }

    #[test]
    fn buckets_are_sorted() {
        let events = vec![
            event(1, jan_first(8, 0), 1),
            event(2, jan_first(18, 0), 1),
            event(3, jan_first(6, 0), 1),
            event(4, jan_first(11, 0), 2),
            event(5, jan_first(15, 0), 1),
            event(6, jan_first(10, 0), 4),
        ];

        let timeline = Timeline::at(&events, jan_first(12, 0));
        let ids = |bucket: &[&Event]| bucket.iter().map(|e| e.id.0).collect::<Vec<_>>();

        assert_eq!(ids(&timeline.ongoing), vec![6, 4]);
        assert_eq!(ids(&timeline.future), vec![5, 2]);
        assert_eq!(ids(&timeline.past), vec![1, 3]);
    }

    #[test]
    fn empty_input_gives_empty_timeline() {
        let events: Vec<Event> = Vec::new();
        let timeline = Timeline::at(&events, jan_first(12, 0));
        assert!(timeline.ongoing.is_empty());
        assert!(timeline.future.is_empty());
        assert!(timeline.past.is_empty());
    }
}
