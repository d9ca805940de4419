use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Settings for the operator walkthrough run by the console driver.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Length used for the sized vectors of the walkthrough.
    pub vector_len: usize,
    /// Fill value for the pre-filled vector.
    pub fill_value: u64,
    /// Rhombus fixtures in `d1,d2,color` form.
    pub rhombuses: Vec<String>,
    pub matrix_rows: usize,
    pub matrix_cols: usize,
    pub matrix_fill: u64,
    /// Sections to run, in order. Empty means all of them.
    pub sections: Vec<Section>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            vector_len: 3,
            fill_value: 5,
            rhombuses: vec![
                "10,20,1".to_string(),
                "15,15,2".to_string(),
                "25,30,3".to_string(),
            ],
            matrix_rows: 2,
            matrix_cols: 2,
            matrix_fill: 5,
            sections: Vec::new(),
        }
    }
}

impl DemoConfig {
    /// The sections to run, with an empty list expanded to [`Section::ALL`].
    pub fn selected_sections(&self) -> Vec<Section> {
        if self.sections.is_empty() {
            Section::ALL.to_vec()
        } else {
            self.sections.clone()
        }
    }
}

/// One block of the walkthrough.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Constructors,
    Indexer,
    Unary,
    Arithmetic,
    Bitwise,
    Comparison,
    Rhombus,
    Matrix,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Constructors,
        Section::Indexer,
        Section::Unary,
        Section::Arithmetic,
        Section::Bitwise,
        Section::Comparison,
        Section::Rhombus,
        Section::Matrix,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Constructors => "constructors",
            Section::Indexer => "indexer",
            Section::Unary => "unary",
            Section::Arithmetic => "arithmetic",
            Section::Bitwise => "bitwise",
            Section::Comparison => "comparison",
            Section::Rhombus => "rhombus",
            Section::Matrix => "matrix",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Section::ALL.iter().map(|s| s.name()).collect();
                format!(
                    "Unknown section: {}. Expected one of: {}",
                    s,
                    names.join(", ")
                )
            })
    }
}
