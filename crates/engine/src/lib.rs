pub mod cell;
pub mod error_index;
pub mod labels;
pub mod schema;
pub mod validate;

pub use cell::{CellValue, RowData};
pub use error_index::ErrorIndex;
pub use schema::{ColumnSchema, ColumnType, SchemaStore};
pub use validate::{validate, ValidationError};
