//! JSON serialization of generated buildings.

use crate::error::Result;
use crate::model::building::Building;
use anyhow::Context;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Saves a building to a pretty-printed JSON file.
pub fn write_json(path: &Path, building: &Building) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), building)
        .with_context(|| format!("cannot serialize building to {}", path.display()))?;
    Ok(())
}

/// Loads a building from a JSON file.
pub fn read_json(path: &Path) -> Result<Building> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let building = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot parse building from {}", path.display()))?;
    Ok(building)
}

/// Serializes a building to a JSON string.
pub fn to_json_string(building: &Building) -> Result<String> {
    let json = serde_json::to_string_pretty(building).context("cannot serialize building")?;
    Ok(json)
}

/// Parses a building from a JSON string.
pub fn from_json_string(json: &str) -> Result<Building> {
    let building = serde_json::from_str(json).context("cannot parse building")?;
    Ok(building)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extrude::StoryParams;
    use crate::generate::generate_rectangle;

    #[test]
    fn test_write_and_read() -> Result<()> {
        let bdg = generate_rectangle(25., 20., &StoryParams::default())?;
        let path = std::env::temp_dir().join(format!("building_{}.json", bdg.uid.as_str()));

        write_json(&path, &bdg)?;
        let loaded = read_json(&path)?;
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.name, bdg.name);
        assert!((loaded.floor_area() - bdg.floor_area()).abs() < 1e-9);
        assert_eq!(loaded.exterior_walls().len(), bdg.exterior_walls().len());
        Ok(())
    }

    #[test]
    fn test_string_round_trip() -> Result<()> {
        let bdg = generate_rectangle(25., 20., &StoryParams::default())?;
        let json = to_json_string(&bdg)?;
        let parsed = from_json_string(&json)?;
        assert_eq!(parsed.stories().len(), bdg.stories().len());
        Ok(())
    }

    #[test]
    fn test_read_missing_file() {
        assert!(read_json(Path::new("/nonexistent/building.json")).is_err());
    }
}
