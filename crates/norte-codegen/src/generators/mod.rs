//! Project emitters, one per target stack.

mod angular;
mod bootstrap;
mod react;
mod vue;

pub use angular::AngularEmitter;
pub use bootstrap::BootstrapEmitter;
pub use react::ReactEmitter;
pub use vue::VueEmitter;

use crate::error::Result;
use crate::templates::slug;
use indexmap::IndexMap;
use norte_core::{ScreenSpec, Stack};

/// Common trait for stack emitters.
///
/// An emitter is a pure function from a [`ScreenSpec`] to a file tree; it
/// reads nothing but the spec value passed in, so repeated calls with equal
/// specs produce equal trees.
pub trait Emitter {
    /// Target stack this emitter renders into.
    fn stack(&self) -> Stack;

    /// Render the spec into a complete project tree.
    fn emit(&self, spec: &ScreenSpec) -> Result<GeneratedProject>;
}

/// An emitted project: relative path → UTF-8 file content, in insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedProject {
    pub files: IndexMap<String, String>,
}

impl GeneratedProject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the tree.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Content of a file, if present.
    pub fn file(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// All relative paths, in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Emitter instance for a stack.
pub fn emitter_for(stack: Stack) -> Box<dyn Emitter> {
    match stack {
        Stack::React => Box::new(ReactEmitter::new()),
        Stack::Vue => Box::new(VueEmitter::new()),
        Stack::Bootstrap => Box::new(BootstrapEmitter::new()),
        Stack::Angular => Box::new(AngularEmitter::new()),
    }
}

/// Render a spec into the stack it currently selects.
pub fn emit(spec: &ScreenSpec) -> Result<GeneratedProject> {
    emitter_for(spec.stack).emit(spec)
}

/// Directory/package slug for a spec, derived from its entity.
pub fn project_slug(spec: &ScreenSpec) -> String {
    slug(&spec.entity)
}

/// Short usage README shared by all emitters.
pub(crate) fn readme(spec: &ScreenSpec, stack_label: &str, steps: &[&str]) -> String {
    let mut lines = vec![
        format!("# {}", spec.title),
        String::new(),
        format!("Projeto {} gerado pelo Norte.", stack_label),
        String::new(),
        format!("> Prompt original: {}", spec.prompt),
        String::new(),
        "## Como executar".to_string(),
        String::new(),
    ];
    for step in steps {
        lines.push(format!("- {step}"));
    }
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_preserves_insertion_order() {
        let mut project = GeneratedProject::new();
        project.insert("package.json", "{}");
        project.insert("src/main.tsx", "// entry");
        let paths: Vec<&str> = project.paths().collect();
        assert_eq!(paths, ["package.json", "src/main.tsx"]);
        assert_eq!(project.file("package.json"), Some("{}"));
        assert_eq!(project.len(), 2);
    }
}
