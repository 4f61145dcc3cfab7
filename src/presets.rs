use hashlink::LinkedHashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// File name of the preset store, located next to the executable.
pub const PRESETS_FILE: &str = "presets.json";

/// Preset name mapped to its commands. Iteration follows the order of the
/// file on disk, with newly added presets appended.
pub type Presets = LinkedHashMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Preset file not found at {}", .0.display())]
    NotFound(PathBuf),
    #[error("Preset file {} is not a JSON object of string arrays: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Preset '{0}' already exists, please choose a different name")]
    DuplicateName(String),
    #[error("{0}")]
    EmptyInput(&'static str),
}

/// Handle to the JSON document holding all presets.
///
/// The store only knows where the file lives; the in-memory [`Presets`]
/// mapping is owned by the caller and passed in explicitly.
#[derive(Debug, Clone)]
pub struct PresetStore {
    path: PathBuf,
}

impl PresetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the store file into a fresh mapping.
    pub fn load(&self) -> Result<Presets, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.path.clone()))
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let presets: Presets =
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(count = presets.len(), path = %self.path.display(), "loaded presets");
        Ok(presets)
    }

    /// Replace the store file with `presets`. The previous file stays intact
    /// if anything goes wrong.
    pub fn save(&self, presets: &Presets) -> Result<(), StoreError> {
        let mut json = serde_json::to_string_pretty(presets).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e.into(),
        })?;
        json.push('\n');
        atomic_write(&self.path, json.as_bytes()).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(count = presets.len(), path = %self.path.display(), "saved presets");
        Ok(())
    }

    /// Hand the store file to the OS default editor/viewer.
    pub fn open_in_editor(&self) -> Result<(), StoreError> {
        open::that(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

fn atomic_write(path: &Path, data: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    Ok(())
}

/// Split a comma separated command list, trimming each entry and dropping
/// empty ones.
pub fn parse_commands(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Insert a new preset built from a name and a comma separated command list.
///
/// `presets` is left untouched when an error is returned. The caller is
/// responsible for saving afterwards.
pub fn add_preset(presets: &mut Presets, name: &str, commands: &str) -> Result<(), StoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::EmptyInput("Preset name must not be empty"));
    }
    if presets.contains_key(name) {
        return Err(StoreError::DuplicateName(name.to_owned()));
    }
    let commands = parse_commands(commands);
    if commands.is_empty() {
        return Err(StoreError::EmptyInput("Preset needs at least one command"));
    }
    presets.insert(name.to_owned(), commands);
    Ok(())
}

/// Remove `name` if present. Returns `true` when a preset was removed.
pub fn delete_preset(presets: &mut Presets, name: &str) -> bool {
    presets.remove(name).is_some()
}

/// Preset names in ordinal (case-sensitive) order.
pub fn list_names(presets: &Presets) -> Vec<&str> {
    let mut names: Vec<&str> = presets.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Presets {
        let mut p = Presets::new();
        p.insert("work".into(), vec!["code".into()]);
        p
    }

    #[test]
    fn parse_commands_trims_and_drops_empty() {
        assert_eq!(parse_commands(" a, ,b ,, c "), vec!["a", "b", "c"]);
        assert!(parse_commands(" , ,").is_empty());
    }

    #[test]
    fn add_preset_trims_commands() {
        let mut p = sample();
        add_preset(&mut p, "games", "a, b , c").unwrap();
        assert_eq!(p.get("games").unwrap(), &vec!["a", "b", "c"]);
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn add_preset_rejects_duplicate() {
        let mut p = sample();
        let before = p.clone();
        let err = add_preset(&mut p, "work", "other").unwrap_err();
        assert!(matches!(err, StoreError::DuplicateName(ref n) if n == "work"));
        assert_eq!(p, before);
    }

    #[test]
    fn add_preset_is_case_sensitive() {
        let mut p = sample();
        add_preset(&mut p, "Work", "x").unwrap();
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn add_preset_rejects_empty_input() {
        let mut p = sample();
        assert!(matches!(
            add_preset(&mut p, "   ", "a"),
            Err(StoreError::EmptyInput(_))
        ));
        assert!(matches!(
            add_preset(&mut p, "new", " , "),
            Err(StoreError::EmptyInput(_))
        ));
        assert_eq!(p, sample());
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut p = sample();
        assert!(!delete_preset(&mut p, "missing"));
        assert_eq!(p, sample());
        assert!(delete_preset(&mut p, "work"));
        assert!(p.is_empty());
    }

    #[test]
    fn list_names_sorted_ordinal() {
        let mut p = Presets::new();
        for n in ["b", "a", "C", "c"] {
            p.insert(n.into(), vec!["x".into()]);
        }
        assert_eq!(list_names(&p), vec!["C", "a", "b", "c"]);
        assert_eq!(list_names(&p), list_names(&p));
    }
}
