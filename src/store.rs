//! JSON file store for inputs and precomputed outputs.
//!
//! Files are read whole and written whole. Writes go to a temporary file
//! first and are renamed into place, so an aborted run never leaves a
//! truncated output behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::coordinate::{Coordinate, LocationRef};
use crate::error::DataError;
use crate::polyline::RouteMap;

/// Place name to coordinate, as written to `geocoded_locations.json`.
pub type GeocodedLocations = IndexMap<String, Coordinate>;

/// One season's entry in `locations.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonLocations {
    pub season: serde_json::Value,
    #[serde(default)]
    pub data: Vec<TeamLocations>,
}

/// One team's ordered itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamLocations {
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub locations: Vec<LocationRef>,
}

/// One season's entry in `challenges.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonChallenges {
    pub season: serde_json::Value,
    #[serde(default)]
    pub challenges: Vec<Challenge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    #[serde(default)]
    pub location: Option<LocationRef>,
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Like [`read_json`], but a missing file is `Ok(None)`.
pub fn read_json_if_exists<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, DataError> {
    if !path.exists() {
        debug!(path = %path.display(), "no existing file");
        return Ok(None);
    }
    read_json(path).map(Some)
}

/// Writes `value` as JSON with 4-space indentation.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), DataError> {
    let io_err = |source| DataError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let mut writer = BufWriter::new(File::create(&tmp_path).map_err(io_err)?);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut serializer)
        .map_err(|source| DataError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(io_err)?;
    drop(writer);
    fs::rename(&tmp_path, path).map_err(io_err)?;

    debug!(path = %path.display(), "wrote json");
    Ok(())
}

pub fn load_locations(path: &Path) -> Result<Vec<SeasonLocations>, DataError> {
    read_json(path)
}

pub fn load_challenges(path: &Path) -> Result<Vec<SeasonChallenges>, DataError> {
    read_json(path)
}

pub fn load_geocoded(path: &Path) -> Result<GeocodedLocations, DataError> {
    read_json(path)
}

pub fn load_routes(path: &Path) -> Result<RouteMap, DataError> {
    read_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::RouteKey;
    use crate::polyline::Polyline;
    use tempdir::TempDir;

    #[test]
    fn test_write_uses_four_space_indent() {
        let dir = TempDir::new("store").unwrap();
        let path = dir.path().join("geocoded_locations.json");
        let mut geocoded = GeocodedLocations::new();
        geocoded.insert("Reno, NV".to_string(), Coordinate::from_lng_lat(-119.8, 39.5));
        write_json(&path, &geocoded).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n    \"Reno, NV\": [\n        -119.8,\n        39.5\n    ]\n}");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_routes_keep_key_order() {
        let dir = TempDir::new("store").unwrap();
        let path = dir.path().join("driving_routes.json");
        let mut routes = RouteMap::new();
        routes.insert(RouteKey::new("b", "c"), Polyline::from_lng_lat(&[[1.0, 2.0]]));
        routes.insert(RouteKey::new("a", "b"), Polyline::from_lng_lat(&[[3.0, 4.0]]));
        write_json(&path, &routes).unwrap();

        let loaded = load_routes(&path).unwrap();
        assert_eq!(loaded, routes);
        let keys: Vec<String> = loaded.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["b/c", "a/b"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new("store").unwrap();
        let path = dir.path().join("absent.json");
        assert!(read_json_if_exists::<GeocodedLocations>(&path).unwrap().is_none());
        assert!(matches!(load_routes(&path), Err(DataError::Io { .. })));
    }

    #[test]
    fn test_invalid_json() {
        let dir = TempDir::new("store").unwrap();
        let path = dir.path().join("locations.json");
        fs::write(&path, "[{").unwrap();
        assert!(matches!(load_locations(&path), Err(DataError::Json { .. })));
    }

    #[test]
    fn test_parse_locations_and_challenges() {
        let locations: Vec<SeasonLocations> = serde_json::from_str(
            r##"[{"season": 3, "data": [
                {"team": "Red", "color": "#f00", "locations": ["Reno, NV", [-115.1, 36.1]]}
            ]}]"##,
        )
        .unwrap();
        assert_eq!(locations[0].data[0].locations.len(), 2);
        assert_eq!(locations[0].data[0].team.as_deref(), Some("Red"));

        let challenges: Vec<SeasonChallenges> = serde_json::from_str(
            r#"[{"season": 3, "challenges": [
                {"name": "Dam", "location": "Hoover Dam"},
                {"name": "Road trip"}
            ]}]"#,
        )
        .unwrap();
        assert_eq!(
            challenges[0].challenges[0].location,
            Some(LocationRef::Name("Hoover Dam".to_string()))
        );
        assert_eq!(challenges[0].challenges[1].location, None);
    }

    #[test]
    fn test_parse_loop_entry() {
        let locations: Vec<SeasonLocations> = serde_json::from_str(
            r#"[{"season": 5, "data": [
                {"locations": ["Las Vegas, NV", ["Hoover Dam", "Boulder City, NV"], "Henderson, NV"]}
            ]}]"#,
        )
        .unwrap();
        let team = &locations[0].data[0].locations;
        assert_eq!(team.len(), 3);
        assert_eq!(
            team[1],
            LocationRef::Loop(vec![
                LocationRef::Name("Hoover Dam".to_string()),
                LocationRef::Name("Boulder City, NV".to_string()),
            ])
        );
    }
}
