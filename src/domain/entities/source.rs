//! SourceFile entity - one input file picked up by a build pass

/// Extensions treated as JavaScript modules
pub const MODULE_EXTENSIONS: [&str; 3] = ["js", "mjs", "cjs"];

/// Whether a source file is code or a static asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Module,
    Asset,
}

impl SourceKind {
    /// Classify by file extension (case-insensitive)
    pub fn from_id(id: &str) -> Self {
        let name = id.rsplit('/').next().unwrap_or(id);
        let is_module = name
            .rsplit_once('.')
            .map(|(_, ext)| {
                MODULE_EXTENSIONS
                    .iter()
                    .any(|m| ext.eq_ignore_ascii_case(m))
            })
            .unwrap_or(false);
        if is_module {
            SourceKind::Module
        } else {
            SourceKind::Asset
        }
    }
}

/// An input file, identified by its root-relative `/`-separated path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    id: String,
    kind: SourceKind,
    content: Vec<u8>,
}

impl SourceFile {
    pub fn new(id: impl Into<String>, content: Vec<u8>) -> Self {
        let id = id.into();
        let kind = SourceKind::from_id(&id);
        Self { id, kind, content }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Last path segment
    pub fn file_name(&self) -> &str {
        self.id.rsplit('/').next().unwrap_or(&self.id)
    }

    pub fn is_module(&self) -> bool {
        self.kind == SourceKind::Module
    }
}
