//! Metric instruction table: which column each metric lives in and the
//! paragraph that prefixes its training records.

mod loader;

use std::path::Path;

use anyhow::{Result, bail};

pub use loader::{load_builtin_v1, load_instruction_tsv, merge_entries};

/// Column labels of the metric arrays, including the trailing columns that
/// have no instruction template.
pub const COLUMN_NAMES: [&str; 17] = [
    "Center of Mass distance",
    "Symmetry",
    "Grounding",
    "Arm fold",
    "Leg fold",
    "Kinetic Energy",
    "Potential Energy",
    "Bone length Coherence",
    "Torque",
    "Center Velocity",
    "Extremity speed",
    "Left arm extremity angular velocity",
    "Right arm extremity angular velocity",
    "Left leg extremity angular velocity",
    "Right leg extremity angular velocity",
    "Partial joint attention",
    "Efficiency",
];

pub fn column_name(column: usize) -> &'static str {
    COLUMN_NAMES.get(column).copied().unwrap_or("unnamed")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionDef {
    pub id: u32,
    pub name: String,
    pub template: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricInstruction {
    pub id: u32,
    /// Source column in the metric array; the entry's position in table order.
    pub column: usize,
    pub name: String,
    pub template: String,
}

#[derive(Debug, Clone)]
pub struct InstructionTable {
    pub version: String,
    pub entries: Vec<MetricInstruction>,
}

impl InstructionTable {
    pub fn from_defs(version: &str, defs: Vec<InstructionDef>) -> Self {
        let entries = defs
            .into_iter()
            .enumerate()
            .map(|(column, def)| MetricInstruction {
                id: def.id,
                column,
                name: def.name,
                template: def.template,
            })
            .collect();
        Self {
            version: version.to_string(),
            entries,
        }
    }

    pub fn get(&self, id: u32) -> Option<&MetricInstruction> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Narrows the table to a single metric, keeping its original column.
    pub fn select(&self, id: u32) -> Result<Self> {
        let Some(entry) = self.get(id) else {
            let known: Vec<String> = self.entries.iter().map(|e| e.id.to_string()).collect();
            bail!("unknown metric id {} (known: {})", id, known.join(", "));
        };
        Ok(Self {
            version: self.version.clone(),
            entries: vec![entry.clone()],
        })
    }

    pub fn max_column(&self) -> Option<usize> {
        self.entries.iter().map(|e| e.column).max()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn load_builtin() -> Result<InstructionTable> {
    let defs = load_builtin_v1()?;
    Ok(InstructionTable::from_defs("v1", defs))
}

/// Built-in table with an optional user TSV laid over it.
pub fn load_effective(user: Option<&Path>) -> Result<InstructionTable> {
    let mut defs = load_builtin_v1()?;
    let mut version = "v1".to_string();
    if let Some(path) = user {
        let user_defs = load_instruction_tsv(path)?;
        defs = merge_entries(defs, user_defs);
        version = format!("v1+{}", path.display());
    }
    Ok(InstructionTable::from_defs(&version, defs))
}
