//! # Character Files
//!
//! Save/load characters under the characters directory (default
//! `./characters/`). One pretty-printed JSON file per character, named after
//! the character with whitespace and path separators replaced by underscores.
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`) so a failed save
//! never truncates an existing sheet.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

use crate::core::character::Character;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// `"Sir Reginald"` → `"Sir_Reginald.json"`.
///
/// Path separators become underscores as well, so the file always lands
/// directly in the characters directory. A name with nothing usable left is
/// saved as `unnamed.json`.
pub fn file_name_for(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| if c.is_whitespace() || c == '/' || c == '\\' { '_' } else { c })
        .collect();
    if stem.chars().all(|c| c == '.' || c == '_') {
        return "unnamed.json".to_string();
    }
    format!("{}.json", stem)
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> Result<(), StoreError> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Save a character into `dir`, creating the directory if needed.
pub fn save_character(dir: &Path, character: &Character) -> Result<PathBuf, StoreError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name_for(&character.name));
    atomic_write_json(&path, character)?;
    info!("Saved character {:?} to {}", character.name, path.display());
    Ok(path)
}

/// Load a single character file, relinking any name-identified slots.
pub fn load_character(path: &Path) -> Result<Character, StoreError> {
    let json = fs::read_to_string(path)?;
    let mut character: Character = serde_json::from_str(&json)?;
    let relinked = character.relink_equipped();
    if relinked > 0 {
        debug!("Relinked {} equipped slots in {}", relinked, path.display());
    }
    Ok(character)
}

fn collect_json(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_json(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    Ok(())
}

/// Every `.json` file under `dir`, sorted by path. A missing directory
/// simply has no saved characters.
pub fn list_saved(dir: &Path) -> Result<Vec<PathBuf>, StoreError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    collect_json(dir, &mut files)?;
    files.sort();
    Ok(files)
}

/// Load the first saved character in `dir`, if there is one.
pub fn load_first(dir: &Path) -> Result<Option<Character>, StoreError> {
    match list_saved(dir)?.first() {
        Some(path) => load_character(path).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::character::{Item, SlotCategory};

    #[test]
    fn test_file_name_replaces_whitespace() {
        assert_eq!(file_name_for("Sir Reginald"), "Sir_Reginald.json");
        assert_eq!(file_name_for("A\tB  C"), "A_B__C.json");
        assert_eq!(file_name_for("Solo"), "Solo.json");
    }

    #[test]
    fn test_file_name_without_usable_characters() {
        assert_eq!(file_name_for(""), "unnamed.json");
        assert_eq!(file_name_for("   "), "unnamed.json");
        assert_eq!(file_name_for(".."), "unnamed.json");
    }

    #[test]
    fn test_file_name_replaces_separators() {
        assert_eq!(file_name_for("../x"), ".._x.json");
        assert_eq!(file_name_for("a\\b/c"), "a_b_c.json");
    }

    #[test]
    fn test_save_unnamed_character_can_be_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let mut character = Character::default();
        character.name = String::new();

        let path = save_character(dir.path(), &character).unwrap();
        assert_eq!(path.file_name().unwrap(), "unnamed.json");
        assert_eq!(load_first(dir.path()).unwrap(), Some(character));
    }

    #[test]
    fn test_save_stays_inside_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("characters");
        let mut character = Character::default();
        character.name = "../../escape".to_string();

        let path = save_character(&dir, &character).unwrap();
        assert_eq!(path.parent(), Some(dir.as_path()));
        assert_eq!(list_saved(&dir).unwrap(), vec![path]);
        assert!(!root.path().join("escape.json").exists());
    }

    #[test]
    fn test_save_creates_directory_and_leaves_no_tmp() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("characters");
        let path = save_character(&dir, &Character::default()).unwrap();

        assert_eq!(path, dir.join("New_Character.json"));
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
        let json = fs::read_to_string(&path).unwrap();
        assert!(json.contains("\n  \"name\": \"New Character\""));
    }

    #[test]
    fn test_list_saved_is_sorted_and_recursive() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("old")).unwrap();
        fs::write(root.path().join("b.json"), "{}").unwrap();
        fs::write(root.path().join("a.json"), "{}").unwrap();
        fs::write(root.path().join("notes.txt"), "").unwrap();
        fs::write(root.path().join("old").join("c.json"), "{}").unwrap();

        let files = list_saved(root.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.json"),
                PathBuf::from("b.json"),
                PathBuf::from("old").join("c.json")
            ]
        );
    }

    #[test]
    fn test_load_first_without_directory() {
        let root = tempfile::tempdir().unwrap();
        let loaded = load_first(&root.path().join("missing")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_malformed_file_is_json_error() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("broken.json"), "{\"name\": 3").unwrap();
        let err = load_first(root.path()).unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }

    #[test]
    fn test_round_trip_preserves_everything() {
        let root = tempfile::tempdir().unwrap();
        let mut character = Character::default();
        let mut helm = Item::new("Helm", SlotCategory::Head);
        helm.equipped = true;
        character.equipped.head = Some(helm.clone());
        character.inventory.push(helm);
        character.proficiencies.push("Common".to_string());

        let path = save_character(root.path(), &character).unwrap();
        let loaded = load_character(&path).unwrap();

        assert_eq!(loaded, character);
    }
}
