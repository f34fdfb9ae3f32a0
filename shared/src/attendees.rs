use crate::family::{capitalize, find_member, FamilyMember};
use crate::models::{Attendee, Event};

/// Display form of one attendee: `"🐶 Noomi"` when the member has an
/// emoji, otherwise the capitalised name.
pub fn attendee_label(members: &[FamilyMember], name: &str) -> String {
    match find_member(members, name) {
        Some(member) => match member.emoji.as_deref() {
            Some(emoji) if !emoji.is_empty() => format!("{} {}", emoji, member.name),
            _ => member.name.clone(),
        },
        None => capitalize(name.trim()),
    }
}

/// All attendees as a comma separated line.
pub fn render_attendees(members: &[FamilyMember], attendees: &[Attendee]) -> String {
    attendees
        .iter()
        .map(|a| attendee_label(members, &a.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Compact Norwegian summary used by the event overview.
pub fn summarize_attendees(members: &[FamilyMember], attendees: &[Attendee]) -> String {
    let names: Vec<String> = attendees
        .iter()
        .map(|a| {
            let name = a.name.trim();
            if name.is_empty() {
                "Ukjent".to_string()
            } else {
                find_member(members, name)
                    .map(|m| m.name.clone())
                    .unwrap_or_else(|| name.to_string())
            }
        })
        .collect();

    match names.as_slice() {
        [] => "Ingen deltakere".to_string(),
        [only] => only.clone(),
        [first, second] => format!("{} og {}", first, second),
        [first, second, third] => format!("{}, {} og {}", first, second, third),
        [first, second, rest @ ..] => {
            format!("{}, {} og {} andre", first, second, rest.len())
        }
    }
}

/// Case-insensitive match of `term` against the title and attendee summary.
/// An empty term matches everything.
pub fn matches_search(event: &Event, term: &str, members: &[FamilyMember]) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    event.title.to_lowercase().contains(&term)
        || summarize_attendees(members, &event.attendees)
            .to_lowercase()
            .contains(&term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::default_family_members;

    fn attendees(names: &[&str]) -> Vec<Attendee> {
        names.iter().map(|n| Attendee::new(*n)).collect()
    }

    #[test]
    fn test_label_uses_emoji_when_set() {
        let mut members = default_family_members();
        members[3].emoji = Some("🐱".to_string());
        assert_eq!(attendee_label(&members, "noomi"), "🐱 Noomi");
        assert_eq!(attendee_label(&members, "lars"), "Lars");
        assert_eq!(attendee_label(&members, "bestemor"), "Bestemor");
    }

    #[test]
    fn test_render_attendees_joins() {
        let members = default_family_members();
        assert_eq!(
            render_attendees(&members, &attendees(&["marcus", "lucas"])),
            "Marcus, Lucas"
        );
        assert_eq!(render_attendees(&members, &[]), "");
    }

    #[test]
    fn test_summary_shapes() {
        let members = default_family_members();
        assert_eq!(summarize_attendees(&members, &[]), "Ingen deltakere");
        assert_eq!(summarize_attendees(&members, &attendees(&["lars"])), "Lars");
        assert_eq!(
            summarize_attendees(&members, &attendees(&["lars", "noomi"])),
            "Lars og Noomi"
        );
        assert_eq!(
            summarize_attendees(&members, &attendees(&["lars", "noomi", "bailey"])),
            "Lars, Noomi og Bailey"
        );
        assert_eq!(
            summarize_attendees(
                &members,
                &attendees(&["lars", "noomi", "bailey", "marita", "meline"])
            ),
            "Lars, Noomi og 3 andre"
        );
        assert_eq!(
            summarize_attendees(&members, &attendees(&["", "lars"])),
            "Ukjent og Lars"
        );
    }

    #[test]
    fn test_search_matches_title_or_attendees() {
        use crate::models::EventType;
        use chrono::{NaiveDate, Utc};

        let members = default_family_members();
        let event = Event {
            id: uuid::Uuid::new_v4(),
            title: "Pianotime".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
            time: "16:00".to_string(),
            event_type: EventType::Appointment,
            attendees: attendees(&["meline"]),
            description: None,
            location: None,
            reminder: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(matches_search(&event, "PIANO", &members));
        assert!(matches_search(&event, "meli", &members));
        assert!(matches_search(&event, "  ", &members));
        assert!(!matches_search(&event, "fotball", &members));
    }
}
