//! Immutable pitch data: per-pitch physical parameters and the keyed stores
//! they live in.
//!
//! These types avoid platform APIs and are shared between the engine and any
//! frontend that populates team/pitcher/checkbox UI.

use std::fmt;

use fnv::FnvHashMap;
use glam::Vec3;
use smallvec::SmallVec;

use crate::constants::{ZONE_MAX, ZONE_MIN};

/// Physical parameters describing one pitch's release and flight.
///
/// Loaded once and never mutated; entities copy the record they animate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PitchRecord {
    /// Release point of the ball.
    pub release: Vec3,
    /// Velocity at release.
    pub velocity: Vec3,
    /// Constant acceleration over the whole flight.
    pub acceleration: Vec3,
    /// Spin rate in revolutions per minute, never negative.
    pub spin_rpm: f32,
    /// Spin axis angle in the horizontal plane, degrees in [0, 360).
    pub spin_axis_deg: f32,
}

/// Identifies one (pitch type, zone) selection for a pitcher, e.g. `FF 5`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ComboKey {
    pub pitch_type: String,
    pub zone: u8,
}

impl ComboKey {
    pub fn new(pitch_type: impl Into<String>, zone: u8) -> Self {
        Self {
            pitch_type: pitch_type.into(),
            zone,
        }
    }

    /// Parse the textual `"<type> <zone>"` form. Returns `None` for anything
    /// that is not a non-empty code followed by a zone in 1..=9.
    pub fn parse(s: &str) -> Option<Self> {
        let (pitch_type, zone) = s.trim().split_once(' ')?;
        if pitch_type.is_empty() || pitch_type.contains(' ') {
            return None;
        }
        let zone: u8 = zone.trim().parse().ok()?;
        if !(ZONE_MIN..=ZONE_MAX).contains(&zone) {
            return None;
        }
        Some(Self::new(pitch_type, zone))
    }
}

impl fmt::Display for ComboKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pitch_type, self.zone)
    }
}

/// The zones actually present for one pitch type, for checkbox construction.
/// Zones with no record are omitted, never shown disabled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PitchGroup {
    pub pitch_type: String,
    pub zones: SmallVec<[u8; 9]>,
}

/// One pitcher's record set, keyed by combo.
#[derive(Clone, Debug, Default)]
pub struct PitcherBook {
    records: FnvHashMap<ComboKey, PitchRecord>,
}

impl PitcherBook {
    pub fn insert(&mut self, key: ComboKey, record: PitchRecord) {
        self.records.insert(key, record);
    }

    pub fn get(&self, key: &ComboKey) -> Option<&PitchRecord> {
        self.records.get(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &ComboKey> {
        self.records.keys()
    }

    /// Records grouped by pitch type, types and zones sorted ascending.
    pub fn groups(&self) -> Vec<PitchGroup> {
        let mut by_type: std::collections::BTreeMap<&str, SmallVec<[u8; 9]>> =
            std::collections::BTreeMap::new();
        for key in self.records.keys() {
            by_type
                .entry(key.pitch_type.as_str())
                .or_default()
                .push(key.zone);
        }
        by_type
            .into_iter()
            .map(|(pitch_type, mut zones)| {
                zones.sort_unstable();
                PitchGroup {
                    pitch_type: pitch_type.to_owned(),
                    zones,
                }
            })
            .collect()
    }
}

/// Everything the one-shot data load produced: team -> pitcher -> book.
#[derive(Clone, Debug, Default)]
pub struct League {
    teams: FnvHashMap<String, FnvHashMap<String, PitcherBook>>,
}

impl League {
    pub(crate) fn from_map(teams: FnvHashMap<String, FnvHashMap<String, PitcherBook>>) -> Self {
        Self { teams }
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Team names, sorted for dropdown population.
    pub fn teams(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.teams.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Pitcher names for a team, sorted. Empty if the team is unknown.
    pub fn pitchers(&self, team: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .teams
            .get(team)
            .map(|p| p.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    pub fn pitcher(&self, team: &str, pitcher: &str) -> Option<&PitcherBook> {
        self.teams.get(team)?.get(pitcher)
    }

    /// Total record count across every pitcher, for load reporting.
    pub fn record_count(&self) -> usize {
        self.teams
            .values()
            .flat_map(|p| p.values())
            .map(PitcherBook::len)
            .sum()
    }
}
