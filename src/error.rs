use thiserror::Error;

#[derive(Error, Debug)]
/// Toolbelt error
pub enum ToolbeltError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
