//! State of the add-event form.

use chrono::NaiveDate;
use thiserror::Error;

use crate::api::{validate_time, EventInput};
use crate::family::FamilyMember;
use crate::models::{Attendee, EventType};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Tittel er påkrevd")]
    MissingTitle,
    #[error("Ugyldig dato")]
    InvalidDate,
    #[error("Tidspunkt må være på formatet TT:MM")]
    InvalidTime,
}

/// What the user has typed so far. Text fields stay raw strings, the way the
/// browser inputs report them, until [`EventDraft::to_input`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`.
    pub date: String,
    pub time: String,
    pub event_type: EventType,
    pub attendees: Vec<String>,
}

impl EventDraft {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            title: String::new(),
            date: date.format("%Y-%m-%d").to_string(),
            time: String::new(),
            event_type: EventType::Family,
            attendees: Vec::new(),
        }
    }

    /// Blank form for `date`.
    pub fn reset(&mut self, date: NaiveDate) {
        *self = Self::new(date);
    }

    pub fn is_attending(&self, member_id: &str) -> bool {
        self.attendees.iter().any(|a| a == member_id)
    }

    pub fn toggle_attendee(&mut self, member_id: &str) {
        if self.is_attending(member_id) {
            self.attendees.retain(|a| a != member_id);
        } else {
            self.attendees.push(member_id.to_string());
        }
    }

    pub fn all_selected(&self, roster: &[FamilyMember]) -> bool {
        !roster.is_empty() && roster.iter().all(|m| self.is_attending(&m.id))
    }

    /// Select everyone, or clear the list when everyone already is.
    pub fn toggle_all(&mut self, roster: &[FamilyMember]) {
        if self.all_selected(roster) {
            self.attendees.clear();
        } else {
            self.attendees = roster.iter().map(|m| m.id.clone()).collect();
        }
    }

    pub fn select_all_label(&self, roster: &[FamilyMember]) -> &'static str {
        if self.all_selected(roster) {
            "Fjern alle"
        } else {
            "Velg alle"
        }
    }

    pub fn selected_count_label(&self) -> String {
        match self.attendees.len() {
            0 => "Ingen valgt".to_string(),
            1 => "1 deltaker valgt".to_string(),
            n => format!("{} deltakere valgt", n),
        }
    }

    pub fn to_input(&self) -> Result<EventInput, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| DraftError::InvalidDate)?;
        validate_time(&self.time).map_err(|_| DraftError::InvalidTime)?;

        Ok(EventInput {
            title: title.to_string(),
            date,
            time: self.time.clone(),
            event_type: self.event_type,
            attendees: self.attendees.iter().map(Attendee::new).collect(),
            description: None,
            location: None,
            reminder: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::default_family_members;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = EventDraft::new(day());
        assert_eq!(draft.date, "2026-10-18");
        assert_eq!(draft.event_type, EventType::Family);
        assert!(draft.attendees.is_empty());
        assert_eq!(draft.selected_count_label(), "Ingen valgt");
    }

    #[test]
    fn test_toggle_all() {
        let roster = default_family_members();
        let mut draft = EventDraft::new(day());
        draft.toggle_attendee("lars");
        assert_eq!(draft.select_all_label(&roster), "Velg alle");

        draft.toggle_all(&roster);
        assert_eq!(draft.attendees.len(), roster.len());
        assert_eq!(draft.select_all_label(&roster), "Fjern alle");
        assert_eq!(draft.selected_count_label(), "7 deltakere valgt");

        draft.toggle_all(&roster);
        assert!(draft.attendees.is_empty());
    }

    #[test]
    fn test_toggle_attendee_twice_removes() {
        let mut draft = EventDraft::new(day());
        draft.toggle_attendee("noomi");
        assert_eq!(draft.selected_count_label(), "1 deltaker valgt");
        draft.toggle_attendee("noomi");
        assert!(!draft.is_attending("noomi"));
    }

    #[test]
    fn test_to_input() {
        let mut draft = EventDraft::new(day());
        assert_eq!(draft.to_input(), Err(DraftError::MissingTitle));

        draft.title = " Tannlege ".to_string();
        assert_eq!(draft.to_input(), Err(DraftError::InvalidTime));

        draft.time = "09:15".to_string();
        draft.event_type = EventType::Appointment;
        draft.toggle_attendee("meline");
        let input = draft.to_input().unwrap();
        assert_eq!(input.title, "Tannlege");
        assert_eq!(input.date, day());
        assert_eq!(input.attendees, vec![Attendee::new("meline")]);

        draft.date = "18.10.2026".to_string();
        assert_eq!(draft.to_input(), Err(DraftError::InvalidDate));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut draft = EventDraft::new(day());
        draft.title = "Middag".to_string();
        draft.toggle_attendee("lars");
        let next = day().succ_opt().unwrap();
        draft.reset(next);
        assert_eq!(draft, EventDraft::new(next));
    }
}
