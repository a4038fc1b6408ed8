use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

use crate::data::demo;
use crate::models::Dataset;

/// Where the records on screen came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    File(String),
    Demo,
}

impl Source {
    pub fn describe(&self) -> String {
        match self {
            Source::File(path) => path.clone(),
            Source::Demo => "demo data".to_string(),
        }
    }
}

pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Reading dataset {:?}", path))?;
    let dataset: Dataset = serde_json::from_str(&content)
        .with_context(|| format!("Parsing dataset {:?}", path))?;
    log::info!(
        "Loaded {} records, {} participants from {:?}",
        dataset.records.len(),
        dataset.leaderboard.len(),
        path
    );
    Ok(dataset)
}

/// Load `path` if given, otherwise fall back to demo data ending on `today`.
pub fn resolve(path: Option<&Path>, today: NaiveDate) -> Result<(Dataset, Source)> {
    match path {
        Some(p) => Ok((load_dataset(p)?, Source::File(p.display().to_string()))),
        None => {
            log::debug!("No dataset configured, using demo data");
            Ok((demo::dataset(today), Source::Demo))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MetricKind;
    use tempfile::NamedTempFile;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 16).unwrap()
    }

    #[test]
    fn reads_json_dataset() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            r#"{
                "records": [
                    {"date": "2024-04-09", "kind": "steps", "value": 8432},
                    {"date": "2024-04-09", "kind": "active_minutes", "value": 40}
                ],
                "leaderboard": [{"id": "you", "name": "You", "total_steps": 8432}],
                "calorie_breakdown": {"total": 900, "parts": [{"name": "Lunch", "value": 900}]},
                "sleep": {
                    "quality": 85,
                    "bed_time": "23:30:00",
                    "wake_time": "07:00:00",
                    "stages": {"total": 4, "parts": [{"name": "Deep", "value": 4}]}
                },
                "water": {"consumed_ml": 500, "goal_ml": 2500}
            }"#,
        )
        .unwrap();

        let (data, source) = resolve(Some(file.path()), today()).unwrap();
        assert_eq!(data.records.len(), 2);
        assert_eq!(data.records[1].kind, MetricKind::ActiveMinutes);
        assert!(data.workouts.is_empty());
        assert_eq!(data.sleep.map(|s| s.quality), Some(85));
        assert!(data.nutrition.is_none());
        assert_eq!(data.water.map(|w| w.goal_ml), Some(2500.0));
        assert!(matches!(source, Source::File(_)));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            r#"{"records": [{"date": "2024-04-09", "kind": "distance", "value": 3}]}"#,
        )
        .unwrap();
        assert!(load_dataset(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_dataset(&dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn no_path_means_demo() {
        let (data, source) = resolve(None, today()).unwrap();
        assert_eq!(source, Source::Demo);
        assert_eq!(data.latest_date(), Some(today()));
    }
}
