use std::path::Path;

use anyhow::{Context, Result};

use crate::error::MetricFtError;
use crate::instructions::InstructionDef;

pub fn load_builtin_v1() -> Result<Vec<InstructionDef>> {
    let content = include_str!("../../assets/instructions/motion_v1.tsv");
    Ok(parse_instruction_tsv(content, "built-in v1")?)
}

pub fn load_instruction_tsv(path: &Path) -> Result<Vec<InstructionDef>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read instruction TSV {}", path.display()))?;
    Ok(parse_instruction_tsv(&content, &path.display().to_string())?)
}

/// User entries replace built-ins with the same id in place; new ids are
/// appended in the order they appear.
pub fn merge_entries(
    builtin: Vec<InstructionDef>,
    user: Vec<InstructionDef>,
) -> Vec<InstructionDef> {
    if user.is_empty() {
        return builtin;
    }
    let mut pending: Vec<Option<InstructionDef>> = user.into_iter().map(Some).collect();

    let mut merged = Vec::with_capacity(builtin.len() + pending.len());
    for def in builtin {
        let replacement = pending
            .iter_mut()
            .find(|slot| matches!(slot, Some(u) if u.id == def.id))
            .and_then(Option::take);
        merged.push(replacement.unwrap_or(def));
    }
    merged.extend(pending.into_iter().flatten());
    merged
}

fn parse_instruction_tsv(
    content: &str,
    source: &str,
) -> std::result::Result<Vec<InstructionDef>, MetricFtError> {
    let mut defs: Vec<InstructionDef> = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let err = |reason: String| MetricFtError::InstructionTable {
            origin: source.to_string(),
            line: line_no,
            reason,
        };

        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line.splitn(3, '\t').collect();
        if parts.len() != 3 {
            return Err(err("malformed TSV (expected 3 columns)".to_string()));
        }
        let id: u32 = parts[0]
            .trim()
            .parse()
            .map_err(|_| err(format!("invalid metric id '{}'", parts[0].trim())))?;
        let name = parts[1].trim();
        let template = unescape(parts[2]);
        if name.is_empty() || template.trim().is_empty() {
            return Err(err("empty field in TSV".to_string()));
        }
        if defs.iter().any(|d| d.id == id) {
            return Err(err(format!("duplicate metric id {}", id)));
        }

        defs.push(InstructionDef {
            id,
            name: name.to_string(),
            template,
        });
    }

    Ok(defs)
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
