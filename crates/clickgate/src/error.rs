use std::io;

/// Errors from the ambient parts of clickgate. The gate itself can't fail.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClickSettings;

    fn parse(s: &str) -> Result<ClickSettings> {
        Ok(serde_json::from_str(s)?)
    }

    #[test]
    fn json_failures_propagate_as_json() {
        let err = parse("{nope").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("json error: "));
    }

    #[test]
    fn io_failures_propagate_as_io() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let err = crate::Directory::new(tmp.path().to_path_buf())
            .get_file("missing.json")
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().starts_with("io error: "));
    }
}
