use serde_json::error::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("forecast file not found: {0}")]
    NotFound(String),
    #[error("unable to read forecast file: {0}")]
    Io(#[from] std::io::Error),
    #[error("forecast document is not valid json: {0}")]
    Decode(String),
    #[error("forecast document is missing an expected field: {0}")]
    MissingKey(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> LoadError {
        match e.classify() {
            Category::Data => LoadError::MissingKey(e.to_string()),
            Category::Syntax | Category::Eof | Category::Io => LoadError::Decode(e.to_string()),
        }
    }
}
