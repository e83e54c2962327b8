//! One-shot pitch-data load.
//!
//! The data source hands us a JSON document mapping team -> pitcher ->
//! combo id -> record. Field-level problems degrade to zeros (a record with
//! no spin is a spinless pitch, not an error) and botched combo keys are
//! skipped with a warning; a document that does not parse, or parses to
//! nothing, is fatal so callers never see an empty but "ready" league.

use fnv::FnvHashMap;
use glam::Vec3;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::record::{ComboKey, League, PitchRecord, PitcherBook};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("pitch data is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("pitch data contains no teams")]
    Empty,
}

#[derive(Debug, Default, Deserialize)]
struct RawPitch {
    #[serde(default)]
    release: [f32; 3],
    #[serde(default)]
    velocity: [f32; 3],
    #[serde(default)]
    acceleration: [f32; 3],
    #[serde(default)]
    spin_rate: f32,
    #[serde(default)]
    spin_axis: f32,
}

type RawLeague = FnvHashMap<String, FnvHashMap<String, FnvHashMap<String, RawPitch>>>;

impl From<RawPitch> for PitchRecord {
    fn from(raw: RawPitch) -> Self {
        PitchRecord {
            release: Vec3::from_array(raw.release),
            velocity: Vec3::from_array(raw.velocity),
            acceleration: Vec3::from_array(raw.acceleration),
            spin_rpm: raw.spin_rate.max(0.0),
            spin_axis_deg: raw.spin_axis.rem_euclid(360.0),
        }
    }
}

/// Parse the pitch-data document fetched from the data source.
pub fn parse_league(json: &str) -> Result<League, LoadError> {
    let raw: RawLeague = serde_json::from_str(json)?;
    if raw.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut teams: FnvHashMap<String, FnvHashMap<String, PitcherBook>> = FnvHashMap::default();
    let mut skipped = 0usize;
    for (team, pitchers) in raw {
        let mut team_books: FnvHashMap<String, PitcherBook> = FnvHashMap::default();
        for (pitcher, combos) in pitchers {
            let mut book = PitcherBook::default();
            for (combo, raw_pitch) in combos {
                match ComboKey::parse(&combo) {
                    Some(key) => book.insert(key, raw_pitch.into()),
                    None => {
                        warn!("skipping malformed combo key {combo:?} for {team} / {pitcher}");
                        skipped += 1;
                    }
                }
            }
            team_books.insert(pitcher, book);
        }
        teams.insert(team, team_books);
    }

    let league = League::from_map(teams);
    info!(
        "loaded {} records across {} teams ({skipped} skipped)",
        league.record_count(),
        league.teams().len()
    );
    Ok(league)
}
