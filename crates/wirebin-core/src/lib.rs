pub mod error;

pub mod cursor;
pub mod fixed;
pub mod varint;

pub use crate::cursor::Cursor;
pub use crate::error::{CodecError, Result};
pub use crate::fixed::{Endian, FixedKind, FixedValue};
pub use crate::varint::{VarKind, WideInt};
