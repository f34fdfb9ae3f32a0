//! Family roster and profile customization.
//!
//! The roster ids double as the attendee names stored on events, so they
//! are fixed. Colours and emojis are cosmetic and can be changed per
//! browser.

use serde::{Deserialize, Serialize};

/// Key under which a customized roster is kept in browser local storage.
pub const STORAGE_KEY: &str = "familyMembers";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl FamilyMember {
    fn new(id: &str, name: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            emoji: None,
        }
    }

    /// Emoji if set, else the first letter of the name.
    pub fn avatar(&self) -> String {
        match &self.emoji {
            Some(emoji) if !emoji.is_empty() => emoji.clone(),
            _ => self.name.chars().take(1).collect(),
        }
    }
}

pub fn default_family_members() -> Vec<FamilyMember> {
    vec![
        FamilyMember::new("marcus", "Marcus", "#28A745"),
        FamilyMember::new("lars", "Lars", "#33A1FF"),
        FamilyMember::new("lucas", "Lucas", "#FF5733"),
        FamilyMember::new("noomi", "Noomi", "#8E44AD"),
        FamilyMember::new("meline", "Meline", "#FFC107"),
        FamilyMember::new("bailey", "Bailey", "#E91E63"),
        FamilyMember::new("marita", "Marita", "#A0522D"),
    ]
}

/// Whether `name` is the id of a member of the default roster.
pub fn is_roster_id(name: &str) -> bool {
    default_family_members().iter().any(|m| m.id == name)
}

/// Look up a member by id or display name, ignoring case.
pub fn find_member<'a>(members: &'a [FamilyMember], name: &str) -> Option<&'a FamilyMember> {
    let needle = name.trim().to_lowercase();
    members
        .iter()
        .find(|m| m.id.to_lowercase() == needle || m.name.to_lowercase() == needle)
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parse a stored roster, falling back to the defaults when it is unreadable.
pub fn roster_from_json(stored: Option<&str>) -> Vec<FamilyMember> {
    stored
        .and_then(|raw| serde_json::from_str::<Vec<FamilyMember>>(raw).ok())
        .filter(|members| !members.is_empty())
        .unwrap_or_else(default_family_members)
}

pub const AVAILABLE_EMOJIS: &[&str] = &[
    // People
    "👨", "👩", "👦", "👧", "👶", "🧑", "👨‍🦰", "👩‍🦰", "👨‍🦱", "👩‍🦱",
    "👨‍🦳", "👩‍🦳", "👨‍🦲", "👩‍🦲", "🧔", "👱‍♂️", "👱‍♀️", "🧒", "👵", "👴",
    "🧑‍🎓", "🧑‍🏫", "🧑‍💻", "🧑‍🎨", "🧑‍🚀", "🧑‍🚒", "👮‍♂️", "👮‍♀️",
    // Faces
    "😀", "😊", "😎", "🤓", "😇", "🥰", "😍", "🤩", "😋", "😜",
    "😅", "😂", "😭", "😡", "😱", "🤯", "😴", "🤤", "😷", "🤒",
    // Animals
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯",
    "🦁", "🐮", "🐷", "🐸", "🐵", "🐔", "🐧", "🐦", "🐤", "🦄",
    "🐙", "🐢", "🐬", "🐳", "🦋", "🐝", "🐞", "🦀", "🐊",
    // Nature
    "⭐", "🌟", "✨", "💫", "🌈", "☀️", "🌙", "🌸", "🌺", "🌻",
    "🌼", "🌷", "🌹", "🌵", "🌴", "🍀", "🍁", "🍂", "🍃", "🔥",
];

pub const AVAILABLE_COLORS: &[&str] = &[
    // Reds and pinks
    "#e74c3c", "#FF6F61", "#DD4124", "#BC243C", "#9B2335", "#FF33A1", "#F7CAC9", "#C3447A",
    "#955251",
    // Oranges and yellows
    "#FFC300", "#f39c12", "#d35400", "#EFC050", "#f4d03f", "#FFEE93", "#FCF6B1",
    // Greens
    "#DAF7A6", "#88B04B", "#2ecc71", "#27ae60", "#16a085", "#009B77",
    // Cyans
    "#7DF9FF", "#98DDDE", "#1abc9c", "#45B8AC",
    // Blues
    "#3498db", "#2980b9", "#5B5EA6", "#92A8D1", "#6B5B95",
    // Purples
    "#8e44ad", "#9b59b6", "#B565A7", "#A569BD",
    // Neutrals
    "#DFCFBE", "#FFC09F", "#95a5a6", "#2c3e50", "#34495e",
];

/// Editing session of the character customization popup.
///
/// Works on a copy of the roster; nothing is visible outside until
/// [`MemberCustomizer::finish`] hands the edited roster back.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberCustomizer {
    original: Vec<FamilyMember>,
    edited: Vec<FamilyMember>,
    selected: Option<String>,
}

impl MemberCustomizer {
    pub fn open(members: &[FamilyMember]) -> Self {
        Self {
            original: members.to_vec(),
            edited: members.to_vec(),
            selected: members.first().map(|m| m.id.clone()),
        }
    }

    pub fn members(&self) -> &[FamilyMember] {
        &self.edited
    }

    pub fn selected(&self) -> Option<&FamilyMember> {
        let id = self.selected.as_deref()?;
        self.edited.iter().find(|m| m.id == id)
    }

    pub fn select(&mut self, member_id: &str) {
        if self.edited.iter().any(|m| m.id == member_id) {
            self.selected = Some(member_id.to_string());
        }
    }

    pub fn set_color(&mut self, member_id: &str, color: &str) {
        if let Some(member) = self.edited.iter_mut().find(|m| m.id == member_id) {
            member.color = color.to_string();
        }
    }

    /// An empty emoji clears it.
    pub fn set_emoji(&mut self, member_id: &str, emoji: &str) {
        if let Some(member) = self.edited.iter_mut().find(|m| m.id == member_id) {
            member.emoji = if emoji.is_empty() {
                None
            } else {
                Some(emoji.to_string())
            };
        }
    }

    pub fn reset(&mut self) {
        self.edited = self.original.clone();
    }

    pub fn is_dirty(&self) -> bool {
        self.edited != self.original
    }

    pub fn finish(self) -> Vec<FamilyMember> {
        self.edited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster_ids_are_lowercase_names() {
        let members = default_family_members();
        assert_eq!(members.len(), 7);
        for m in &members {
            assert_eq!(m.id, m.name.to_lowercase());
            assert!(m.emoji.is_none());
        }
    }

    #[test]
    fn test_find_member_by_id_or_name() {
        let members = default_family_members();
        assert_eq!(find_member(&members, "noomi").unwrap().name, "Noomi");
        assert_eq!(find_member(&members, " Lars ").unwrap().id, "lars");
        assert!(find_member(&members, "Jake").is_none());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("meline"), "Meline");
        assert_eq!(capitalize("ørjan"), "Ørjan");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_roster_from_json_falls_back_on_garbage() {
        assert_eq!(roster_from_json(None), default_family_members());
        assert_eq!(roster_from_json(Some("{not json")), default_family_members());
        assert_eq!(roster_from_json(Some("[]")), default_family_members());

        let mut custom = default_family_members();
        custom[0].emoji = Some("🐶".to_string());
        let raw = serde_json::to_string(&custom).unwrap();
        assert_eq!(roster_from_json(Some(&raw)), custom);
    }

    #[test]
    fn test_avatar_prefers_emoji() {
        let mut member = default_family_members().remove(0);
        assert_eq!(member.avatar(), "M");
        member.emoji = Some("🦊".to_string());
        assert_eq!(member.avatar(), "🦊");
    }

    #[test]
    fn test_customizer_edits_copy_until_finished() {
        let members = default_family_members();
        let mut session = MemberCustomizer::open(&members);
        assert_eq!(session.selected().unwrap().id, "marcus");

        session.select("lars");
        session.set_color("lars", "#3498db");
        session.set_emoji("lars", "🐻");
        assert!(session.is_dirty());
        assert_eq!(session.selected().unwrap().emoji.as_deref(), Some("🐻"));

        session.set_emoji("lars", "");
        assert_eq!(session.selected().unwrap().emoji, None);

        let saved = session.finish();
        assert_eq!(saved[1].color, "#3498db");
        assert_eq!(members[1].color, "#33A1FF");
    }

    #[test]
    fn test_customizer_reset_and_unknown_select() {
        let members = default_family_members();
        let mut session = MemberCustomizer::open(&members);
        session.set_color("marita", "#000000");
        session.select("nobody");
        assert_eq!(session.selected().unwrap().id, "marcus");
        session.reset();
        assert!(!session.is_dirty());
    }
}
