use serde::{Deserialize, Serialize};

use crate::pipeline::Named;

/// A catalog document kind every volunteer is expected to provide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredDocument {
    pub id: String,
    pub name: String,
}

/// One volunteer's linkage to a required document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAssignment {
    pub name: String,
    #[serde(default)]
    pub is_provided: bool,
}

impl Named for RequiredDocument {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for DocumentAssignment {
    fn name(&self) -> &str {
        &self.name
    }
}
