pub mod id_path;
pub mod validated_json;

pub use id_path::{parse_filter_id, IdPath};
pub use validated_json::ValidatedJson;
