//! Handle packing and unpacking.

mod handle;


pub use handle::{decode_property_id, decode_type_id, encode_handle};
