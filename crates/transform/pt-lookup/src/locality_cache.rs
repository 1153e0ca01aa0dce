//! LocalityCache - per-state locality PID lookup filled from two G-NAF files.

use ahash::RandomState;
use hashbrown::HashMap;
use serde::Serialize;

/// Coordinates and postcode known for one locality.
///
/// Each field is filled by the file that supplies it, so a record may carry
/// only coordinates, only a postcode, or both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocalityRecord {
    /// Longitude as written in the point file
    pub longitude: Option<String>,

    /// Latitude as written in the point file
    pub latitude: Option<String>,

    /// Postcode from the address-detail file
    pub postcode: Option<String>,
}

impl LocalityRecord {
    /// Returns true if a non-empty postcode is known.
    pub fn has_postcode(&self) -> bool {
        self.postcode.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Returns true if coordinates are present.
    pub fn has_geolocation(&self) -> bool {
        self.longitude.is_some() || self.latitude.is_some()
    }
}

/// Locality PID to [`LocalityRecord`] lookup for a single state.
///
/// Merges field by field: coordinates keep the first point seen for a
/// locality, postcodes take the last address seen.
#[derive(Debug, Default)]
pub struct LocalityCache {
    data: HashMap<String, LocalityRecord, RandomState>,
}

impl LocalityCache {
    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self {
            data: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Records coordinates unless the locality already has some.
    ///
    /// Returns true if the coordinates were stored.
    pub fn set_geolocation(
        &mut self,
        locality_pid: &str,
        longitude: Option<&str>,
        latitude: Option<&str>,
    ) -> bool {
        let record = self.data.entry_ref(locality_pid).or_default();
        if record.has_geolocation() {
            return false;
        }
        record.longitude = longitude.map(str::to_string);
        record.latitude = latitude.map(str::to_string);
        true
    }

    /// Records a postcode, replacing any earlier one. Coordinates are kept.
    pub fn set_postcode(&mut self, locality_pid: &str, postcode: Option<&str>) {
        let record = self.data.entry_ref(locality_pid).or_default();
        record.postcode = postcode.map(str::to_string);
    }

    /// Looks up a locality.
    pub fn get(&self, locality_pid: &str) -> Option<&LocalityRecord> {
        self.data.get(locality_pid)
    }

    /// Returns the number of localities in the cache.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of localities with a non-empty postcode.
    pub fn postcode_count(&self) -> usize {
        self.data.values().filter(|r| r.has_postcode()).count()
    }
}
