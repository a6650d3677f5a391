pub mod entry;
pub mod error;
pub mod lexical;
pub mod markup;
pub mod response;

pub use entry::{EntryRecord, SourceFields};
pub use error::ValidationError;
pub use lexical::{LexicalCategory, lexical_category};
pub use response::SearchResult;
