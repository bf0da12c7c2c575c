//! Chunk planning service
//!
//! Partitions the modules of a build into the entry chunk and manual groups,
//! and renders a chunk's bytes from its members. No module graph is
//! resolved here: membership comes from `manual_chunk` alone, and first-party
//! modules that no group claims are appended to the entry.

use std::collections::BTreeMap;

use crate::domain::entities::SourceFile;

use super::router::manual_chunk;

/// Which module ids go into which chunk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkPlan {
    /// Entry module first, then unclaimed first-party modules in id order
    pub entry: Vec<String>,
    /// Manual groups keyed by chunk name, members in id order
    pub groups: BTreeMap<String, Vec<String>>,
}

impl ChunkPlan {
    /// Group name for a module id, `None` for entry members
    pub fn group_of(&self, id: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|(_, members)| members.iter().any(|m| m == id))
            .map(|(name, _)| name.as_str())
    }
}

/// Partition module ids. The entry module always stays in the entry chunk,
/// even if its id carries the dependency marker.
pub fn plan_chunks<'a, I>(entry_id: &str, module_ids: I) -> ChunkPlan
where
    I: IntoIterator<Item = &'a str>,
{
    let mut ids: Vec<&str> = module_ids.into_iter().filter(|id| *id != entry_id).collect();
    ids.sort_unstable();
    ids.dedup();

    let mut plan = ChunkPlan {
        entry: vec![entry_id.to_string()],
        groups: BTreeMap::new(),
    };

    for id in ids {
        match manual_chunk(id) {
            Some(group) => plan
                .groups
                .entry(group.to_string())
                .or_default()
                .push(id.to_string()),
            None => plan.entry.push(id.to_string()),
        }
    }

    plan
}

/// Concatenate member modules, each under a `// <id>` banner line
pub fn render_chunk(prelude: &[String], members: &[&SourceFile]) -> Vec<u8> {
    let mut out = Vec::new();
    for line in prelude {
        out.extend_from_slice(line.as_bytes());
        out.push(b'\n');
    }
    for member in members {
        out.extend_from_slice(format!("// {}\n", member.id()).as_bytes());
        out.extend_from_slice(member.content());
        if !member.content().ends_with(b"\n") {
            out.push(b'\n');
        }
    }
    out
}

/// Side-effect import of a sibling chunk in the same directory
pub fn import_statement(file_name: &str) -> String {
    format!("import \"./{file_name}\";")
}
