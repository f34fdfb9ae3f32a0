//! Game lobby: who plays and which game.

use crate::family::FamilyMember;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOption {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    /// `None` means any number of players.
    pub max_players: Option<usize>,
}

pub const FLAPPY_BIRD: &str = "flappy-bird";
pub const RACE: &str = "race";

pub const GAMES: [GameOption; 2] = [
    GameOption {
        id: FLAPPY_BIRD,
        name: "Flappy Bird",
        emoji: "🐦",
        max_players: Some(1),
    },
    GameOption {
        id: RACE,
        name: "Race",
        emoji: "🏃",
        max_players: None,
    },
];

pub fn find_game(id: &str) -> Option<&'static GameOption> {
    GAMES.iter().find(|g| g.id == id)
}

impl GameOption {
    pub fn is_locked(&self, player_count: usize) -> bool {
        self.max_players.map_or(false, |max| player_count > max)
    }

    pub fn lock_message(&self) -> Option<String> {
        let max = self.max_players?;
        let plural = if max == 1 { "" } else { "s" };
        Some(format!("Max {} player{}", max, plural))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lobby {
    players: Vec<String>,
    game: Option<&'static str>,
}

impl Lobby {
    pub fn new() -> Self {
        Self::default()
    }

    /// Players in the order they were picked.
    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn is_playing(&self, member_id: &str) -> bool {
        self.players.iter().any(|p| p == member_id)
    }

    pub fn toggle_player(&mut self, member_id: &str) {
        if self.is_playing(member_id) {
            self.players.retain(|p| p != member_id);
        } else {
            self.players.push(member_id.to_string());
        }
        // a game that no longer fits the party is dropped
        if self.selected_game().map_or(false, |g| g.is_locked(self.players.len())) {
            self.game = None;
        }
    }

    pub fn selected_game(&self) -> Option<&'static GameOption> {
        self.game.and_then(find_game)
    }

    /// Returns false when the game is unknown or locked for the current party.
    pub fn select_game(&mut self, game_id: &str) -> bool {
        match find_game(game_id) {
            Some(game) if !game.is_locked(self.players.len()) => {
                self.game = Some(game.id);
                true
            }
            _ => false,
        }
    }

    pub fn can_start(&self) -> bool {
        !self.players.is_empty() && self.selected_game().is_some()
    }

    pub fn selected_members<'a>(&self, members: &'a [FamilyMember]) -> Vec<&'a FamilyMember> {
        self.players
            .iter()
            .filter_map(|id| members.iter().find(|m| &m.id == id))
            .collect()
    }

    /// Emoji of the first player, used as the bird sprite.
    pub fn lead_emoji(&self, members: &[FamilyMember]) -> Option<String> {
        self.selected_members(members)
            .first()
            .and_then(|m| m.emoji.clone())
            .filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::default_family_members;

    #[test]
    fn test_flappy_locks_above_one_player() {
        let flappy = find_game(FLAPPY_BIRD).unwrap();
        assert!(!flappy.is_locked(0));
        assert!(!flappy.is_locked(1));
        assert!(flappy.is_locked(2));
        assert_eq!(flappy.lock_message().as_deref(), Some("Max 1 player"));

        let race = find_game(RACE).unwrap();
        assert!(!race.is_locked(7));
        assert_eq!(race.lock_message(), None);
    }

    #[test]
    fn test_toggle_player() {
        let mut lobby = Lobby::new();
        lobby.toggle_player("lucas");
        lobby.toggle_player("noomi");
        assert_eq!(lobby.players(), ["lucas", "noomi"]);
        lobby.toggle_player("lucas");
        assert_eq!(lobby.players(), ["noomi"]);
    }

    #[test]
    fn test_locked_game_cannot_be_selected_and_is_dropped() {
        let mut lobby = Lobby::new();
        lobby.toggle_player("lucas");
        assert!(lobby.select_game(FLAPPY_BIRD));
        assert!(lobby.can_start());

        lobby.toggle_player("lars");
        assert!(lobby.selected_game().is_none());
        assert!(!lobby.select_game(FLAPPY_BIRD));
        assert!(lobby.select_game(RACE));
        assert!(!lobby.select_game("chess"));
    }

    #[test]
    fn test_lead_emoji() {
        let mut members = default_family_members();
        members[2].emoji = Some("🦊".to_string());
        let mut lobby = Lobby::new();
        assert_eq!(lobby.lead_emoji(&members), None);
        lobby.toggle_player("lucas");
        assert_eq!(lobby.lead_emoji(&members).as_deref(), Some("🦊"));
        assert_eq!(lobby.selected_members(&members)[0].name, "Lucas");
    }
}
