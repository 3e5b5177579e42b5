//! Weather icon lookup

use sunshine_display::IconHandle;

/// Icon lookup failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssetError {
    /// Condition id is not one the face knows
    #[error("unrecognized condition id")]
    Unrecognized,
    /// Condition id is known but its bitmap is not available
    #[error("icon asset missing")]
    Missing,
}

/// Condition ids with an icon, in handle order
pub const KNOWN_CONDITIONS: [&str; 8] = [
    "storm",
    "light_rain",
    "rain",
    "snow",
    "fog",
    "clear",
    "light_clouds",
    "clouds",
];

/// Trait for resolving a condition id to an icon bitmap
pub trait IconAssets {
    fn icon_for(&self, condition_id: &str) -> Result<IconHandle, AssetError>;
}

/// Icon table over [`KNOWN_CONDITIONS`]
///
/// The handle of a condition is its index in the list. Individual
/// bitmaps can be marked missing, e.g. when an asset pack failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IconTable {
    present: u16,
}

impl IconTable {
    const ALL: u16 = (1 << KNOWN_CONDITIONS.len()) - 1;

    /// Table with every bitmap available
    pub const fn complete() -> Self {
        Self { present: Self::ALL }
    }

    /// Table with no bitmap available
    pub const fn empty() -> Self {
        Self { present: 0 }
    }

    /// Same table with the bitmap for `condition_id` marked missing
    pub fn without(self, condition_id: &str) -> Self {
        match Self::index_of(condition_id) {
            Some(index) => Self {
                present: self.present & !(1 << index),
            },
            None => self,
        }
    }

    fn index_of(condition_id: &str) -> Option<usize> {
        KNOWN_CONDITIONS.iter().position(|id| *id == condition_id)
    }
}

impl Default for IconTable {
    fn default() -> Self {
        Self::complete()
    }
}

impl IconAssets for IconTable {
    fn icon_for(&self, condition_id: &str) -> Result<IconHandle, AssetError> {
        let index = Self::index_of(condition_id).ok_or(AssetError::Unrecognized)?;
        if self.present & (1 << index) == 0 {
            return Err(AssetError::Missing);
        }
        Ok(IconHandle(index as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_conditions_resolve() {
        let table = IconTable::complete();
        for (index, id) in KNOWN_CONDITIONS.iter().enumerate() {
            assert_eq!(table.icon_for(id), Ok(IconHandle(index as u16)));
        }
    }

    #[test]
    fn test_unrecognized() {
        let table = IconTable::complete();
        assert_eq!(table.icon_for("hail"), Err(AssetError::Unrecognized));
        assert_eq!(table.icon_for(""), Err(AssetError::Unrecognized));
        assert_eq!(table.icon_for("Clear"), Err(AssetError::Unrecognized));
    }

    #[test]
    fn test_missing_asset() {
        let table = IconTable::complete().without("snow");
        assert_eq!(table.icon_for("snow"), Err(AssetError::Missing));
        assert!(table.icon_for("rain").is_ok());
        assert_eq!(IconTable::empty().icon_for("clear"), Err(AssetError::Missing));
    }

    #[test]
    fn test_without_unknown_is_noop() {
        assert_eq!(IconTable::complete().without("hail"), IconTable::complete());
    }
}
