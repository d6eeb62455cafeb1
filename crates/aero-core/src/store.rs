//! In-memory store of the session's defined surfaces.
//!
//! The store is a lagging mirror of server truth: every mutation happens
//! only after a successful remote response, and quota enforcement on the
//! server side never trusts this count.

use crate::account::Tier;
use crate::surface::Surface;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct SurfaceStore {
    surfaces: Vec<Surface>,
}

impl SurfaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly created surface.
    ///
    /// Guest and free tiers hold a single airport: the new surface replaces
    /// the entire store (overwrite, not append). Premium appends.
    pub fn add(&mut self, surface: Surface, tier: Tier) {
        match tier {
            Tier::Guest | Tier::Free => self.surfaces = vec![surface],
            Tier::Premium => self.surfaces.push(surface),
        }
    }

    /// Remove a surface by id. No-op if absent; deletion confirmation is the
    /// caller's concern.
    pub fn remove(&mut self, id: &str) {
        self.surfaces.retain(|s| s.id != id);
    }

    pub fn get(&self, id: &str) -> Option<&Surface> {
        self.surfaces.iter().find(|s| s.id == id)
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// Replace the store wholesale (profile load).
    pub fn replace_all(&mut self, surfaces: Vec<Surface>) {
        self.surfaces = surfaces;
    }

    pub fn clear(&mut self) {
        self.surfaces.clear();
    }

    /// Group surfaces by airport name; drives both the quota count and
    /// whole-airport draw operations.
    pub fn group_by_airport(&self) -> BTreeMap<&str, Vec<&Surface>> {
        let mut groups: BTreeMap<&str, Vec<&Surface>> = BTreeMap::new();
        for surface in &self.surfaces {
            groups
                .entry(surface.airport_name.as_str())
                .or_default()
                .push(surface);
        }
        groups
    }

    /// Count of distinct airport groupings, the number the quota limits.
    pub fn distinct_airports(&self) -> usize {
        self.group_by_airport().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Owner;
    use crate::surface::SurfaceFamily;

    fn surface(id: &str, airport: &str, family: SurfaceFamily) -> Surface {
        Surface {
            id: id.to_string(),
            airport_name: airport.to_string(),
            owner: Owner::Guest,
            name: format!("{} surface", airport),
            family,
            geometry: Vec::new(),
        }
    }

    #[test]
    fn test_guest_define_keeps_exactly_one_airport() {
        let mut store = SurfaceStore::new();
        store.add(surface("1", "RWY 09/27", SurfaceFamily::Ols), Tier::Guest);
        assert_eq!(store.distinct_airports(), 1);

        // Second define under a different name discards the first
        store.add(surface("2", "RWY 18/36", SurfaceFamily::Vss), Tier::Guest);
        assert_eq!(store.distinct_airports(), 1);
        assert_eq!(store.surfaces().len(), 1);
        assert_eq!(store.surfaces()[0].airport_name, "RWY 18/36");
    }

    #[test]
    fn test_free_tier_overwrites_like_guest() {
        let mut store = SurfaceStore::new();
        store.add(surface("1", "EGLL", SurfaceFamily::Ols), Tier::Free);
        store.add(surface("2", "KJFK", SurfaceFamily::Ofz), Tier::Free);
        assert_eq!(store.distinct_airports(), 1);
        assert_eq!(store.surfaces()[0].airport_name, "KJFK");
    }

    #[test]
    fn test_premium_appends_up_to_quota() {
        let mut store = SurfaceStore::new();
        for i in 0..10 {
            store.add(
                surface(&i.to_string(), &format!("AP{}", i), SurfaceFamily::Ols),
                Tier::Premium,
            );
        }
        assert_eq!(store.distinct_airports(), 10);

        // Two surfaces for the same airport are one grouping
        store.add(surface("10", "AP0", SurfaceFamily::Vss), Tier::Premium);
        assert_eq!(store.distinct_airports(), 10);
        assert_eq!(store.group_by_airport()["AP0"].len(), 2);
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let mut store = SurfaceStore::new();
        store.add(surface("1", "EGLL", SurfaceFamily::Ols), Tier::Premium);
        store.remove("does-not-exist");
        assert_eq!(store.surfaces().len(), 1);
        store.remove("1");
        assert!(store.surfaces().is_empty());
    }
}
