use crate::error::{LoadError, Result};
use futures_util::TryStreamExt;
use ridersim_core::{measured, RiderRecord, Roster, Specialty, SpecialtyScores};
use serde::Deserialize;
use std::path::Path;
use tokio::io::AsyncRead;
use tracing::info;

/// One CSV row as found in the rider dataset
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RiderRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Team", default)]
    pub team: Option<String>,
    #[serde(rename = "Age")]
    pub age: f64,
    #[serde(rename = "AVG", default)]
    pub average: Option<f64>,
    #[serde(rename = "FLT")]
    pub flat: f64,
    #[serde(rename = "COB")]
    pub cobbles: f64,
    #[serde(rename = "HLL")]
    pub hills: f64,
    #[serde(rename = "MTN")]
    pub mountain: f64,
    #[serde(rename = "SPR")]
    pub sprint: f64,
    #[serde(rename = "ITT")]
    pub time_trial: f64,
    #[serde(rename = "GC")]
    pub general_classification: f64,
    #[serde(rename = "OR")]
    pub one_day_races: f64,
    /// Height; zero or empty means unknown
    #[serde(rename = "Length", default)]
    pub length: Option<f64>,
    /// Weight; zero or empty means unknown
    #[serde(rename = "Weight", default)]
    pub weight: Option<f64>,
}

impl From<RiderRow> for RiderRecord {
    fn from(row: RiderRow) -> Self {
        let specialties = SpecialtyScores::default()
            .with(Specialty::Flat, row.flat)
            .with(Specialty::Cobbles, row.cobbles)
            .with(Specialty::Hills, row.hills)
            .with(Specialty::Mountain, row.mountain)
            .with(Specialty::Sprint, row.sprint)
            .with(Specialty::TimeTrial, row.time_trial)
            .with(Specialty::GeneralClassification, row.general_classification)
            .with(Specialty::OneDayRaces, row.one_day_races);

        let mut record = RiderRecord::new(row.name, row.age, specialties)
            .with_height(row.length.and_then(measured))
            .with_weight(row.weight.and_then(measured));
        record.team = row.team.filter(|t| !t.is_empty());
        record.average = row.average;
        record
    }
}

/// Read a rider CSV from any async reader
pub async fn read_roster<R>(reader: R) -> Result<Roster>
where
    R: AsyncRead + Unpin + Send,
{
    let mut deserializer = csv_async::AsyncReaderBuilder::new().create_deserializer(reader);
    let rows: Vec<RiderRow> = deserializer.deserialize::<RiderRow>().try_collect().await?;
    let riders: Vec<RiderRecord> = rows.into_iter().map(RiderRecord::from).collect();
    Ok(Roster::new(riders)?)
}

/// Load the rider CSV at `path`
pub async fn load_roster<P: AsRef<Path>>(path: P) -> Result<Roster> {
    let path = path.as_ref();
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let roster = read_roster(file).await?;
    info!("Loaded {} riders from {:?}", roster.len(), path);
    Ok(roster)
}
