pub mod record_key;
pub mod section_list;

pub use record_key::RecordKey;
pub use section_list::{Keyed, LoadState, Record, SectionList, Visibility};
