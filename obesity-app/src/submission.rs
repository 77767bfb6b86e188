use std::{fs::File, io::BufReader, path::Path};

use chrono::{Local, NaiveDate};
use log::info;
use obesity_model::{ReportSubject, UserRecord};
use serde::{Deserialize, Serialize};

use crate::Result;

/// One filled-in form: who it is about plus the model inputs.
///
/// Read from JSON using the data set column names, e.g.
/// `{"name": "Ayu", "Age": 30, "Weight": 60, "MTRANS": "Bike"}`.
/// Missing inputs take the form defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub exam_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub record: UserRecord,
}

impl Submission {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        info!("Reading submission from {}", path.as_ref().display());
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// The exam date defaults to today.
    pub fn subject(&self) -> ReportSubject {
        ReportSubject::new(
            self.name.clone(),
            self.exam_date.unwrap_or_else(|| Local::now().date_naive()),
        )
    }
}
