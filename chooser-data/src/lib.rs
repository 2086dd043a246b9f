//! Content rows and filters for choosers
//!
//! Values, rows, content filters and the [`DataSource`] contract that a
//! chooser queries to decide which of its options still lead somewhere,
//! plus an in-memory [`Table`] implementation.

mod cache;
mod error;
mod filter;
mod row;
mod source;
mod table;
mod value;

pub use cache::MatchCache;
pub use error::DataError;
pub use filter::BoundFilter;
pub use filter::ContentFilter;
pub use filter::FilterOp;
pub use filter::Operand;
pub use filter::StateLookup;
pub use row::Row;
pub use source::DataSource;
pub use table::Table;
pub use value::Value;
