//! Names carried by property change notifications.

pub const UNIQUE_ID: &str = "unique_id";
pub const TITLE: &str = "title";
pub const SUBTITLE: &str = "subtitle";
pub const DESCRIPTION: &str = "description";
pub const IMAGE: &str = "image";
pub const CONTENT: &str = "content";
pub const ROW_SPAN: &str = "row_span";
pub const COL_SPAN: &str = "col_span";
pub const GROUP: &str = "group";
