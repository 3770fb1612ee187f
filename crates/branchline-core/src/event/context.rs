use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Context key under which the emitted payload is delivered
pub const META_KEY: &str = "meta";

/// String-keyed mapping handed to plugin handlers.
///
/// The engine keeps one baseline `Context`; every emission derives a fresh
/// copy with the payload stored under [`META_KEY`]. Keys iterate in sorted
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    values: Map<String, Value>,
}

impl Context {
    /// Create an empty context
    pub fn new() -> Self {
        Self { values: Map::new() }
    }

    /// Create a context from an existing JSON object map
    pub fn from_map(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Get a raw value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Get a value deserialized into `T`; `None` if absent or of the wrong shape
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Get a string value
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Set a value, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Remove a value
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// All keys, in iteration order
    pub fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Merge with another context; keys from `other` override existing ones
    pub fn merge(&mut self, other: &Context) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Derive the per-emission context: a copy of `self` with `payload`
    /// stored under [`META_KEY`]. The payload replaces any baseline `meta`.
    pub fn with_meta(&self, payload: Value) -> Context {
        let mut derived = self.clone();
        derived.values.insert(META_KEY.to_string(), payload);
        derived
    }

    /// The emitted payload, if this context came from an emission
    pub fn meta(&self) -> Option<&Value> {
        self.values.get(META_KEY)
    }

    /// The emitted payload deserialized into `T`
    pub fn meta_as<T: DeserializeOwned>(&self) -> Option<T> {
        self.get_as(META_KEY)
    }

    /// A copy of this context without the payload key, i.e. the baseline
    /// view the engine contributed.
    pub fn without_meta(&self) -> Context {
        let mut stripped = self.clone();
        stripped.values.remove(META_KEY);
        stripped
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.values
    }
}

impl From<Map<String, Value>> for Context {
    fn from(values: Map<String, Value>) -> Self {
        Self::from_map(values)
    }
}

impl From<Context> for Value {
    fn from(context: Context) -> Self {
        Value::Object(context.values)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
