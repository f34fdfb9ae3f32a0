//! Family roster persisted in the browser's local storage.

use gloo::storage::{LocalStorage, Storage};
use shared::family::{roster_from_json, FamilyMember, STORAGE_KEY};

/// The saved roster, or the default family when nothing usable is stored.
pub fn load_roster() -> Vec<FamilyMember> {
    let stored = LocalStorage::raw().get_item(STORAGE_KEY).ok().flatten();
    roster_from_json(stored.as_deref())
}

pub fn save_roster(members: &[FamilyMember]) -> Result<(), String> {
    LocalStorage::set(STORAGE_KEY, members).map_err(|e| e.to_string())?;
    tracing::info!(count = members.len(), "family roster saved");
    Ok(())
}
