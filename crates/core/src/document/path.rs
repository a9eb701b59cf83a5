use std::fmt;

/// Key under which the todo list is stored.
pub const TODOS_KEY: &str = "todos";

/// Location of a document in the store's bucket → scope → collection → key
/// hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentPath {
    pub bucket: String,
    pub scope: String,
    pub collection: String,
    pub key: String,
}

impl DocumentPath {
    /// Path of the todo list inside `bucket`.
    ///
    /// Scope and collection carry the bucket's name; the key is always
    /// [`TODOS_KEY`].
    pub fn todos(bucket: impl Into<String>) -> Self {
        let bucket = bucket.into();
        Self {
            scope: bucket.clone(),
            collection: bucket.clone(),
            bucket,
            key: TODOS_KEY.to_string(),
        }
    }

    /// Flattened form used by backends without native namespacing.
    pub fn flat_key(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            self.bucket, self.scope, self.collection, self.key
        )
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.bucket, self.scope, self.collection, self.key
        )
    }
}
