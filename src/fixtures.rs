#[cfg(test)]
pub mod test {
    use std::fs;
    use std::path::{Path, PathBuf};

    pub const SAMPLE_TOML: &str = r#"
alpha = "Some string"
beta = 42
gamma = true
delta = 3.14159
"#;

    /// Write `content` to `dir/name`, creating `dir` if needed.
    pub fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
        fs::create_dir_all(dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn sample_parses() {
        let table: toml::Table = SAMPLE_TOML.parse().unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table["beta"].as_integer(), Some(42));
    }
}
