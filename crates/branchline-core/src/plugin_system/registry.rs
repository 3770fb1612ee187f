use std::collections::HashSet;

/// Names of the plugins currently registered with an engine.
///
/// A name is unique while live; it may be registered again once removed.
#[derive(Debug, Default, Clone)]
pub struct RegisteredPluginSet {
    names: HashSet<String>,
}

impl RegisteredPluginSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `name` live. Returns `false` if it already was.
    pub fn insert(&mut self, name: &str) -> bool {
        self.names.insert(name.to_string())
    }

    /// Mark `name` no longer live. Returns `false` if it was not live.
    pub fn remove(&mut self, name: &str) -> bool {
        self.names.remove(name)
    }

    /// Checks if a plugin with the given name is live.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Live names in sorted order
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names.iter().cloned().collect();
        names.sort();
        names
    }
}
