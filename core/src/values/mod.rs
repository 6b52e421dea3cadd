mod float;
mod host;
mod value;

pub use float::{float_to_string, write_float};
pub use host::HostValue;
pub use value::{TypeError, Value, ValueKind};
