//! Caller-supplied slot values.

use std::collections::HashMap;

/// Slot holding the Terraform resource type, e.g. `aws_batch_job_queue`.
pub const RESOURCE_NAME: &str = "resource_name";

/// Slot holding the directory the agent works in.
pub const WORKING_DIRECTORY: &str = "working_directory";

/// Mapping from slot name to value for a single render call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderParameters {
    values: HashMap<String, String>,
}

impl RenderParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource_name(self, name: impl Into<String>) -> Self {
        self.with(RESOURCE_NAME, name)
    }

    pub fn with_working_directory(self, dir: impl Into<String>) -> Self {
        self.with(WORKING_DIRECTORY, dir)
    }

    /// Set a slot value, builder style.
    pub fn with(mut self, slot: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(slot, value);
        self
    }

    /// Set a slot value, returning the previous one.
    pub fn insert(&mut self, slot: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(slot.into(), value.into())
    }

    /// Set a slot value only if it has none yet.
    pub fn insert_default(&mut self, slot: impl Into<String>, value: impl Into<String>) {
        self.values.entry(slot.into()).or_insert_with(|| value.into());
    }

    pub fn get(&self, slot: &str) -> Option<&str> {
        self.values.get(slot).map(String::as_str)
    }

    pub fn contains(&self, slot: &str) -> bool {
        self.values.contains_key(slot)
    }

    pub fn remove(&mut self, slot: &str) -> Option<String> {
        self.values.remove(slot)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for RenderParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for RenderParameters {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let params = RenderParameters::new()
            .with_resource_name("aws_batch_job_queue")
            .with_working_directory("/tmp/work");
        assert_eq!(params.get(RESOURCE_NAME), Some("aws_batch_job_queue"));
        assert_eq!(params.get(WORKING_DIRECTORY), Some("/tmp/work"));
        assert!(!params.contains("other"));
    }

    #[test]
    fn test_insert_default_keeps_existing() {
        let mut params = RenderParameters::new().with_working_directory("/cli");
        params.insert_default(WORKING_DIRECTORY, "/config");
        params.insert_default(RESOURCE_NAME, "aws_s3_bucket");
        assert_eq!(params.get(WORKING_DIRECTORY), Some("/cli"));
        assert_eq!(params.get(RESOURCE_NAME), Some("aws_s3_bucket"));
    }

    #[test]
    fn test_from_iterator() {
        let params: RenderParameters = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.iter().count(), 2);
    }
}
