//! Embedded track-id lists
//!
//! Albums and playlists carry an ordered list of track ids. The list
//! grows on index assignment: writing past the end extends it, zero
//! filling the gap, the way the native container structs behave.

use serde::{Deserialize, Serialize};

use crate::error::{ObjectError, Result};

/// An ordered, index-addressable list of track ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackIdList(Vec<u32>);

impl TrackIdList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ids in the list
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the list holds no ids
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Read the id at `index`.
    ///
    /// Negative indices count back from the end (`-1` is the last id).
    /// An index that stays negative after that adjustment, or a
    /// non-negative index at or past the end, fails with
    /// [`ObjectError::IndexOutOfRange`].
    pub fn get(&self, index: i64) -> Result<u32> {
        let len = self.0.len();
        let resolved = if index < 0 {
            index.checked_add(len as i64)
        } else {
            Some(index)
        };
        match resolved {
            Some(i) if i >= 0 && (i as usize) < len => Ok(self.0[i as usize]),
            _ => Err(ObjectError::out_of_range(index, len)),
        }
    }

    /// Write the id at `index`, growing the list if needed.
    ///
    /// Writing at or past the end extends the list to `index + 1`,
    /// zero-filling every slot between the old length and `index`.
    /// There is no negative-index write and no upper bound.
    pub fn set(&mut self, index: usize, id: u32) {
        if index >= self.0.len() {
            self.0.resize(index + 1, 0);
        }
        self.0[index] = id;
    }

    /// Iterate over the ids in index order
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    /// View the ids as a slice
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Copy the ids into a new vector
    pub fn to_vec(&self) -> Vec<u32> {
        self.0.clone()
    }
}

impl From<Vec<u32>> for TrackIdList {
    fn from(ids: Vec<u32>) -> Self {
        Self(ids)
    }
}

impl FromIterator<u32> for TrackIdList {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TrackIdList {
    type Item = u32;
    type IntoIter = std::vec::IntoIter<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
