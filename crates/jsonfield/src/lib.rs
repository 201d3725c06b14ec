// sqlx-jsonfield - JSON values in TEXT columns
// Backends without a native JSON type store the canonical encoding as text;
// application code only ever sees the decoded structure.

pub mod codec;
pub mod column;
pub mod error;
pub mod field;

pub use column::DeclaredType;
pub use error::{FieldError, Result};
pub use field::{AsciiJsonField, JsonField};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
