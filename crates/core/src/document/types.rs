/// The stored todo list.
///
/// Treated as an opaque blob: the bytes handed to an upsert are exactly the
/// bytes a later read returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document(Vec<u8>);

impl Document {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Document {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Document {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&str> for Document {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}
