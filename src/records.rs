use std::fs::File;
use std::path::Path;

use itertools::Itertools;
use log::info;
use serde::{Deserialize, Deserializer};

use crate::errors::DashboardError;

/// Sentinel dropdown value meaning "no site filter".
pub const ALL_SITES: &str = "ALL";
pub const ALL_SITES_LABEL: &str = "All Sites";

const COLUMN_SITE: &str = "Launch Site";
const COLUMN_PAYLOAD: &str = "Payload Mass (kg)";
const COLUMN_BOOSTER: &str = "Booster Version Category";
const COLUMN_CLASS: &str = "class";
const REQUIRED_COLUMNS: [&str; 4] = [COLUMN_SITE, COLUMN_PAYLOAD, COLUMN_BOOSTER, COLUMN_CLASS];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Human-readable label used in the single-site success breakdown.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failed",
        }
    }
}

// The dataset encodes the outcome as a 0/1 "class" column.
fn outcome_from_class<'de, D>(deserializer: D) -> Result<Outcome, D::Error>
where
    D: Deserializer<'de>,
{
    let class = u8::deserialize(deserializer)?;
    Ok(match class {
        1 => Outcome::Success,
        _ => Outcome::Failure,
    })
}

/// One row of the source dataset: a single launch attempt. Immutable after
/// load; extra CSV columns are ignored.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
    #[serde(rename = "class", deserialize_with = "outcome_from_class")]
    pub outcome: Outcome,
}

/// Read-only collection of launch records, loaded once at startup and shared
/// by every chart handler for the lifetime of the process.
///
/// Payload bounds and the distinct site list are computed over the full
/// dataset at load time and never change as the displayed subset changes.
#[derive(Clone, Debug)]
pub struct RecordStore {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
    sites: Vec<String>,
}

impl RecordStore {
    pub fn load(path: &Path) -> Result<Self, DashboardError> {
        let file = File::open(path).map_err(|e| DashboardError::MissingDataFile {
            path: format!("{}", path.display()),
            source: e,
        })?;
        let mut reader = csv::Reader::from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| DashboardError::MalformedRecords { source: e })?;
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DashboardError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }

        let records = reader
            .deserialize()
            .collect::<Result<Vec<LaunchRecord>, csv::Error>>()
            .map_err(|e| DashboardError::MalformedRecords { source: e })?;

        let store = Self::from_records(records)?;
        info!(
            "Loaded {} launch records across {} sites, payload range {:.0}-{:.0} kg",
            store.records.len(),
            store.sites.len(),
            store.min_payload,
            store.max_payload,
        );
        Ok(store)
    }

    /// Builds a store from already-parsed records. Fails on an empty
    /// collection since the payload bounds would be undefined.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DashboardError> {
        if records.is_empty() {
            return Err(DashboardError::EmptyDataset);
        }

        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;
        for record in &records {
            min_payload = min_payload.min(record.payload_mass_kg);
            max_payload = max_payload.max(record.payload_mass_kg);
        }

        // First-seen order, matching the source file. The dropdown ordering
        // is observable in the UI so it has to be deterministic.
        let sites = records.iter().map(|r| r.site.clone()).unique().collect_vec();

        Ok(Self {
            records,
            min_payload,
            max_payload,
            sites,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Distinct launch sites in first-seen order.
    pub fn distinct_sites(&self) -> &[String] {
        &self.sites
    }
}

/// A dropdown entry: display label plus underlying filter value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Builds the dropdown options: the "All Sites" sentinel always comes first,
/// followed by one option per distinct site.
pub fn build_site_options(sites: &[String]) -> Vec<SiteOption> {
    let mut options = vec![SiteOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES.to_string(),
    }];
    options.extend(sites.iter().map(|site| SiteOption {
        label: site.clone(),
        value: site.clone(),
    }));
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_csv() {
        let file = write_csv(
            "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category\n\
             1,CCAFS LC-40,0,0,v1.0\n\
             2,CCAFS LC-40,1,525,v1.0\n\
             3,VAFB SLC-4E,1,500,v1.1\n",
        );

        let store = RecordStore::load(file.path()).unwrap();
        assert_eq!(store.records().len(), 3);
        assert_eq!(store.min_payload(), 0.);
        assert_eq!(store.max_payload(), 525.);
        assert_eq!(store.distinct_sites(), ["CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(store.records()[1].outcome, Outcome::Success);
        assert_eq!(store.records()[0].outcome, Outcome::Failure);
    }

    #[test]
    fn test_load_missing_file() {
        let result = RecordStore::load(Path::new("/nonexistent/launches.csv"));
        assert!(matches!(
            result,
            Err(DashboardError::MissingDataFile { .. })
        ));
    }

    #[test]
    fn test_load_missing_column() {
        let file = write_csv(
            "Launch Site,class,Booster Version Category\n\
             CCAFS LC-40,1,v1.0\n",
        );

        let result = RecordStore::load(file.path());
        match result {
            Err(DashboardError::MissingColumn { column }) => {
                assert_eq!(column, "Payload Mass (kg)");
            }
            other => panic!("Expected MissingColumn error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_row() {
        let file = write_csv(
            "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
             CCAFS LC-40,1,not-a-number,v1.0\n",
        );

        let result = RecordStore::load(file.path());
        assert!(matches!(
            result,
            Err(DashboardError::MalformedRecords { .. })
        ));
    }

    #[test]
    fn test_load_empty_dataset() {
        let file = write_csv("Launch Site,class,Payload Mass (kg),Booster Version Category\n");

        let result = RecordStore::load(file.path());
        assert!(matches!(result, Err(DashboardError::EmptyDataset)));
    }

    #[test]
    fn test_distinct_sites_first_seen_order() {
        let file = write_csv(
            "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
             KSC LC-39A,1,2490,FT\n\
             CCAFS LC-40,0,500,v1.0\n\
             KSC LC-39A,1,5300,FT\n\
             VAFB SLC-4E,0,553,v1.1\n",
        );

        let store = RecordStore::load(file.path()).unwrap();
        assert_eq!(
            store.distinct_sites(),
            ["KSC LC-39A", "CCAFS LC-40", "VAFB SLC-4E"]
        );
    }

    #[test]
    fn test_site_options_sentinel_first() {
        let sites = vec!["CCAFS LC-40".to_string(), "VAFB SLC-4E".to_string()];
        let options = build_site_options(&sites);

        assert_eq!(options.len(), 3);
        assert_eq!(options[0].label, "All Sites");
        assert_eq!(options[0].value, ALL_SITES);
        assert_eq!(options[1].value, "CCAFS LC-40");
        assert_eq!(options[2].value, "VAFB SLC-4E");
    }

    #[test]
    fn test_site_options_empty_input() {
        let options = build_site_options(&[]);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, ALL_SITES);
    }
}
