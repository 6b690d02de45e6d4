use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GiftGenieError, Result};
use crate::models::GiftRecommendation;

/// Id-keyed set of saved gifts. Insertion order is preserved for display;
/// membership is by `id` only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesSet {
    gifts: Vec<GiftRecommendation>,
}

impl FavoritesSet {
    pub fn contains(&self, id: &str) -> bool {
        self.gifts.iter().any(|g| g.id == id)
    }

    pub fn len(&self) -> usize {
        self.gifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gifts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GiftRecommendation> {
        self.gifts.iter()
    }

    pub fn as_slice(&self) -> &[GiftRecommendation] {
        &self.gifts
    }
}

impl From<Vec<GiftRecommendation>> for FavoritesSet {
    fn from(gifts: Vec<GiftRecommendation>) -> Self {
        Self { gifts }
    }
}

/// Pure toggle: remove the gift if its id is present, append it otherwise.
/// Persisting the result is the caller's responsibility.
pub fn toggle(mut set: FavoritesSet, gift: &GiftRecommendation) -> FavoritesSet {
    if set.contains(&gift.id) {
        set.gifts.retain(|g| g.id != gift.id);
    } else {
        set.gifts.push(gift.clone());
    }
    set
}

/// Durable storage for the favorites set: one JSON array of records under a
/// single file path, rewritten in full after every mutation.
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored set. A missing file is an empty set; an unreadable or
    /// corrupt file is logged and degrades to an empty set rather than
    /// failing startup.
    pub fn load(&self) -> FavoritesSet {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return FavoritesSet::default();
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Failed to read favorites file: {e} - starting with empty favorites"
                );
                return FavoritesSet::default();
            }
        };

        match serde_json::from_str::<Vec<GiftRecommendation>>(&contents) {
            Ok(gifts) => FavoritesSet::from(gifts),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Corrupt favorites file: {e} - starting with empty favorites"
                );
                FavoritesSet::default()
            }
        }
    }

    /// Write the full set. Last write wins; callers invoke this after every
    /// successful toggle so the file tracks the in-memory set.
    pub fn persist(&self, set: &FavoritesSet) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(&set.gifts)
            .map_err(|e| GiftGenieError::Storage(format!("failed to serialize favorites: {e}")))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
