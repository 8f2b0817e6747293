use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dosage::Dosage;

/// One clinically observed `(Condition, Drug_Name, Dosage_mg, Side_Effects)` tuple.
///
/// Serialized with the training-table column names so the catalog file can be
/// read by any consumer of the raw dataset schema.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Combination {
    #[serde(rename = "Condition")]
    pub condition: String,
    #[serde(rename = "Drug_Name")]
    pub drug_name: String,
    #[serde(rename = "Dosage_mg")]
    pub dosage_mg: Dosage,
    #[serde(rename = "Side_Effects")]
    pub side_effects: String,
}

impl Combination {
    pub fn new(
        condition: impl Into<String>,
        drug_name: impl Into<String>,
        dosage_mg: Dosage,
        side_effects: impl Into<String>,
    ) -> Self {
        Self {
            condition: condition.into(),
            drug_name: drug_name.into(),
            dosage_mg,
            side_effects: side_effects.into(),
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Condition='{}', Drug='{}', Dosage={}mg, Side Effects='{}'",
            self.condition, self.drug_name, self.dosage_mg, self.side_effects
        )
    }
}
