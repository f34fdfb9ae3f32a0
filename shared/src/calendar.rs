//! Month grid generation and day bucketing.
//!
//! A month is always shown as six full weeks starting on a Sunday, so the
//! grid has a fixed size of 42 cells whatever the month length.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::family::{find_member, FamilyMember};
use crate::models::Event;

pub const GRID_CELLS: usize = 42;

pub const WEEKDAY_HEADERS: [&str; 7] = ["Søn", "Man", "Tir", "Ons", "Tor", "Fre", "Lør"];

const MONTH_NAMES: [&str; 12] = [
    "januar",
    "februar",
    "mars",
    "april",
    "mai",
    "juni",
    "juli",
    "august",
    "september",
    "oktober",
    "november",
    "desember",
];

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The Sunday on or before the first day of the displayed month.
pub fn grid_start(displayed: NaiveDate) -> NaiveDate {
    let first = first_of_month(displayed);
    let back = u64::from(first.weekday().num_days_from_sunday());
    first - Days::new(back)
}

pub fn month_grid(displayed: NaiveDate) -> [NaiveDate; GRID_CELLS] {
    let start = grid_start(displayed);
    std::array::from_fn(|i| start + Days::new(i as u64))
}

/// Inclusive date range covered by a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridWindow {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl GridWindow {
    pub fn for_month(displayed: NaiveDate) -> Self {
        let first = grid_start(displayed);
        Self {
            first,
            last: first + Days::new(GRID_CELLS as u64 - 1),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }

    /// Cell index of `date`, if it falls inside the window.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        if !self.contains(date) {
            return None;
        }
        usize::try_from((date - self.first).num_days()).ok()
    }
}

pub fn previous_month(displayed: NaiveDate) -> NaiveDate {
    let first = first_of_month(displayed);
    first.checked_sub_months(Months::new(1)).unwrap_or(first)
}

pub fn next_month(displayed: NaiveDate) -> NaiveDate {
    let first = first_of_month(displayed);
    first.checked_add_months(Months::new(1)).unwrap_or(first)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub events: Vec<Event>,
}

/// Everything the calendar card renders for one displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub displayed: NaiveDate,
    pub window: GridWindow,
    pub cells: Vec<GridCell>,
}

impl MonthView {
    pub fn build(displayed: NaiveDate, today: NaiveDate, events: &[Event]) -> Self {
        let displayed = first_of_month(displayed);
        let window = GridWindow::for_month(displayed);
        let buckets = bucket_by_grid(&window, events);

        let cells = month_grid(displayed)
            .into_iter()
            .zip(buckets)
            .map(|(date, events)| GridCell {
                date,
                in_current_month: date.month() == displayed.month()
                    && date.year() == displayed.year(),
                is_today: date == today,
                events,
            })
            .collect();

        Self {
            displayed,
            window,
            cells,
        }
    }

    pub fn title(&self) -> String {
        format_month_title(self.displayed)
    }
}

/// Split events into one bucket per grid cell.
///
/// Each event lands in at most one bucket; events outside the window are
/// dropped. Buckets are sorted by time.
pub fn bucket_by_grid(window: &GridWindow, events: &[Event]) -> Vec<Vec<Event>> {
    let mut buckets = vec![Vec::new(); GRID_CELLS];
    for event in events {
        if let Some(idx) = window.index_of(event.date) {
            buckets[idx].push(event.clone());
        }
    }
    for bucket in &mut buckets {
        sort_by_time(bucket);
    }
    buckets
}

pub fn sort_by_time(events: &mut [Event]) {
    events.sort_by(|a, b| a.time.cmp(&b.time));
}

/// Events on exactly `date`, ordered by time.
pub fn events_on(events: &[Event], date: NaiveDate) -> Vec<Event> {
    let mut day: Vec<Event> = events.iter().filter(|e| e.date == date).cloned().collect();
    sort_by_time(&mut day);
    day
}

/// Events grouped per day, days ascending, each day ordered by time.
pub fn group_by_date(events: &[Event]) -> BTreeMap<NaiveDate, Vec<Event>> {
    let mut groups: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
    for event in events {
        groups.entry(event.date).or_default().push(event.clone());
    }
    for day in groups.values_mut() {
        sort_by_time(day);
    }
    groups
}

/// Colours of the members attending events on `date`, without repeats.
pub fn member_colors_for_date(
    events: &[Event],
    date: NaiveDate,
    members: &[FamilyMember],
) -> Vec<String> {
    let mut colors: Vec<String> = Vec::new();
    for event in events_on(events, date) {
        for attendee in &event.attendees {
            if let Some(member) = find_member(members, &attendee.name) {
                if !colors.contains(&member.color) {
                    colors.push(member.color.clone());
                }
            }
        }
    }
    colors
}

pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

pub fn is_tomorrow(date: NaiveDate, today: NaiveDate) -> bool {
    today.succ_opt() == Some(date)
}

pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayLabel {
    Today,
    Tomorrow,
    Past,
    Upcoming,
}

impl DayLabel {
    pub fn of(date: NaiveDate, today: NaiveDate) -> Self {
        if is_today(date, today) {
            DayLabel::Today
        } else if is_tomorrow(date, today) {
            DayLabel::Tomorrow
        } else if is_past(date, today) {
            DayLabel::Past
        } else {
            DayLabel::Upcoming
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            DayLabel::Today => "I dag",
            DayLabel::Tomorrow => "I morgen",
            DayLabel::Past => "Tidligere",
            DayLabel::Upcoming => "Kommende",
        }
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "mandag",
        Weekday::Tue => "tirsdag",
        Weekday::Wed => "onsdag",
        Weekday::Thu => "torsdag",
        Weekday::Fri => "fredag",
        Weekday::Sat => "lørdag",
        Weekday::Sun => "søndag",
    }
}

fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// `søndag 18. oktober 2026`
pub fn format_long(date: NaiveDate) -> String {
    format!(
        "{} {}. {} {}",
        weekday_name(date.weekday()),
        date.day(),
        month_name(date),
        date.year()
    )
}

/// `oktober 2026`
pub fn format_month_title(date: NaiveDate) -> String {
    format!("{} {}", month_name(date), date.year())
}

/// `18.10.2026`
pub fn format_short(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// `1 hendelse`, `3 hendelser`
pub fn count_events(n: usize) -> String {
    if n == 1 {
        "1 hendelse".to_string()
    } else {
        format!("{} hendelser", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::default_family_members;
    use crate::models::{Attendee, EventType};
    use chrono::Utc;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(on: NaiveDate, time: &str, attendees: &[&str]) -> Event {
        Event {
            id: Uuid::new_v4(),
            title: format!("event {}", time),
            date: on,
            time: time.to_string(),
            event_type: EventType::Family,
            attendees: attendees.iter().map(|a| Attendee::new(*a)).collect(),
            description: None,
            location: None,
            reminder: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_grid_starts_on_sunday_before_first() {
        // 1 October 2026 is a Thursday
        let grid = month_grid(date(2026, 10, 18));
        assert_eq!(grid[0], date(2026, 9, 27));
        assert_eq!(grid[0].weekday(), Weekday::Sun);
        assert_eq!(grid[GRID_CELLS - 1], date(2026, 11, 7));
    }

    #[test]
    fn test_grid_for_month_starting_on_sunday() {
        // 1 February 2026 is a Sunday
        let grid = month_grid(date(2026, 2, 10));
        assert_eq!(grid[0], date(2026, 2, 1));
        assert_eq!(grid[41], date(2026, 3, 14));
    }

    #[test]
    fn test_grid_is_consecutive() {
        for month in 1..=12 {
            let grid = month_grid(date(2024, month, 1));
            for pair in grid.windows(2) {
                assert_eq!(pair[0].succ_opt(), Some(pair[1]));
            }
            assert!(grid.contains(&date(2024, month, 1)));
        }
    }

    #[test]
    fn test_window_index_of() {
        let window = GridWindow::for_month(date(2026, 10, 1));
        assert_eq!(window.index_of(date(2026, 9, 27)), Some(0));
        assert_eq!(window.index_of(date(2026, 10, 1)), Some(4));
        assert_eq!(window.index_of(date(2026, 11, 7)), Some(41));
        assert_eq!(window.index_of(date(2026, 9, 26)), None);
        assert_eq!(window.index_of(date(2026, 11, 8)), None);
    }

    #[test]
    fn test_month_navigation_across_years() {
        assert_eq!(previous_month(date(2026, 1, 31)), date(2025, 12, 1));
        assert_eq!(next_month(date(2026, 12, 15)), date(2027, 1, 1));
        assert_eq!(next_month(date(2026, 1, 31)), date(2026, 2, 1));
    }

    #[test]
    fn test_bucketing_places_each_event_once() {
        let window = GridWindow::for_month(date(2026, 10, 1));
        let events = vec![
            event(date(2026, 10, 18), "18:00", &[]),
            event(date(2026, 10, 18), "08:15", &[]),
            event(date(2026, 9, 27), "12:00", &[]),
            event(date(2026, 12, 24), "17:00", &[]),
        ];
        let buckets = bucket_by_grid(&window, &events);
        assert_eq!(buckets.len(), GRID_CELLS);
        assert_eq!(buckets.iter().map(Vec::len).sum::<usize>(), 3);

        let oct18 = window.index_of(date(2026, 10, 18)).unwrap();
        let times: Vec<_> = buckets[oct18].iter().map(|e| e.time.as_str()).collect();
        assert_eq!(times, vec!["08:15", "18:00"]);
        assert_eq!(buckets[0].len(), 1);
    }

    #[test]
    fn test_month_view_flags() {
        let today = date(2026, 10, 18);
        let view = MonthView::build(date(2026, 10, 5), today, &[]);
        assert_eq!(view.displayed, date(2026, 10, 1));
        assert_eq!(view.cells.len(), GRID_CELLS);
        assert!(!view.cells[0].in_current_month);
        assert!(view.cells[4].in_current_month);
        assert_eq!(view.cells.iter().filter(|c| c.is_today).count(), 1);
        assert_eq!(view.title(), "oktober 2026");
    }

    #[test]
    fn test_month_view_other_year_same_month_not_current() {
        let view = MonthView::build(date(2026, 12, 1), date(2026, 12, 1), &[]);
        let jan = view
            .cells
            .iter()
            .find(|c| c.date == date(2027, 1, 2))
            .unwrap();
        assert!(!jan.in_current_month);
    }

    #[test]
    fn test_day_labels() {
        let today = date(2026, 10, 18);
        assert_eq!(DayLabel::of(today, today), DayLabel::Today);
        assert_eq!(DayLabel::of(date(2026, 10, 19), today), DayLabel::Tomorrow);
        assert_eq!(DayLabel::of(date(2026, 10, 17), today), DayLabel::Past);
        assert_eq!(DayLabel::of(date(2026, 10, 20), today).text(), "Kommende");
    }

    #[test]
    fn test_tomorrow_across_month_end() {
        assert!(is_tomorrow(date(2026, 11, 1), date(2026, 10, 31)));
        assert!(!is_tomorrow(date(2026, 10, 31), date(2026, 10, 31)));
    }

    #[test]
    fn test_group_by_date_sorted() {
        let events = vec![
            event(date(2026, 10, 20), "09:00", &[]),
            event(date(2026, 10, 18), "20:00", &[]),
            event(date(2026, 10, 18), "07:00", &[]),
        ];
        let groups = group_by_date(&events);
        let days: Vec<_> = groups.keys().copied().collect();
        assert_eq!(days, vec![date(2026, 10, 18), date(2026, 10, 20)]);
        assert_eq!(groups[&date(2026, 10, 18)][0].time, "07:00");
    }

    #[test]
    fn test_member_colors_deduplicated() {
        let members = default_family_members();
        let day = date(2026, 10, 18);
        let events = vec![
            event(day, "10:00", &["lars", "noomi"]),
            event(day, "09:00", &["noomi", "ghost"]),
            event(date(2026, 10, 19), "09:00", &["marcus"]),
        ];
        let colors = member_colors_for_date(&events, day, &members);
        assert_eq!(colors, vec!["#8E44AD".to_string(), "#33A1FF".to_string()]);
    }

    #[test]
    fn test_norwegian_formatting() {
        let d = date(2026, 10, 18);
        assert_eq!(format_long(d), "søndag 18. oktober 2026");
        assert_eq!(format_short(date(2026, 3, 5)), "05.03.2026");
        assert_eq!(count_events(1), "1 hendelse");
        assert_eq!(count_events(0), "0 hendelser");
    }
}
