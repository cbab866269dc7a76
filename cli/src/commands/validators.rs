use std::path::Path;

pub fn validate_path_exists(path: &str) -> Result<String, String> {
    if Path::new(path).exists() {
        Ok(path.to_string())
    } else {
        Err(format!("Path does not exist: {path}"))
    }
}
