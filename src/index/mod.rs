mod document;
mod index;
mod line_set;
mod query;
mod query_result;

pub use self::document::Document;
pub use self::index::TextIndex;
pub use self::line_set::{LineSet, LineSetAlgebra};
pub use self::query::Query;
pub use self::query_result::QueryResult;
