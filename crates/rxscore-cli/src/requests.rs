//! Prediction request files.
//!
//! `.csv` files are read row by row with a header naming the request
//! fields; anything else is parsed as a JSON object or array of objects.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};

use rxscore_model::PredictionRequest;

/// Read every request in a file.
pub fn read_requests(path: &Path) -> Result<Vec<PredictionRequest>> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        read_csv_requests(path)
    } else {
        let payload = std::fs::read_to_string(path)
            .with_context(|| format!("read requests {}", path.display()))?;
        PredictionRequest::batch_from_json(&payload)
            .with_context(|| format!("parse requests {}", path.display()))
    }
}

fn read_csv_requests(path: &Path) -> Result<Vec<PredictionRequest>> {
    let file = File::open(path).with_context(|| format!("open requests {}", path.display()))?;
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let mut requests = Vec::new();
    for (idx, row) in reader.deserialize().enumerate() {
        let request: PredictionRequest =
            row.with_context(|| format!("parse {} row {}", path.display(), idx + 1))?;
        requests.push(request);
    }
    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn csv_rows_deserialize_by_header() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(
            file,
            "Patient_ID,Age,Gender,Condition,Drug_Name,Dosage_mg,Treatment_Duration_days,Side_Effects,Improvement_Score\n\
             P0001,55,Male,Diabetes,Metformin,500,30,Nausea,7.5\n"
        )
        .unwrap();

        let requests = read_requests(file.path()).unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].dosage_mg, 500.0);
        assert_eq!(requests[0].side_effects, "Nausea");
    }

    #[test]
    fn bad_csv_row_names_the_row() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(
            file,
            "Patient_ID,Age,Gender,Condition,Drug_Name,Dosage_mg,Treatment_Duration_days,Side_Effects\n\
             P0001,old,Male,Diabetes,Metformin,500,30,Nausea\n"
        )
        .unwrap();

        let err = read_requests(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("row 1"));
    }
}
