pub mod error;
pub mod form;
pub mod record;
pub mod selection;

pub use error::{ModelError, Result};
pub use form::{FieldValue, FormBuffer};
pub use record::{FormField, Gender, UserRecord};
pub use selection::{Selection, SelectionPolicy};
