use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One date-keyed HTML document, the unit the retention window manages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct HtmlSnapshot {
    pub date: String,
    pub html_content: String,
}
