mod error;
mod path;
mod types;
mod validation;
mod write_result;

pub use error::DocumentError;
pub use path::{DocumentPath, TODOS_KEY};
pub use types::Document;
pub use validation::validate_json;
pub use write_result::{MutationToken, WriteResult};
