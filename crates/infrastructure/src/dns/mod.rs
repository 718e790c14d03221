pub mod record_type_map;
pub mod wire_codec;

pub use record_type_map::{DnsClassMapper, RecordTypeMapper};
pub use wire_codec::WireCodec;
