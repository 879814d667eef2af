use crate::common::*;

#[doc = r#"
    Reads a TOML file and deserializes it into the requested structure type.

    The chart pipeline keeps its optional overrides (output directory, dpi,
    font) in a TOML file; this function turns that file into a typed config.

    1. Read the file at `file_path` into a string
    2. Parse it with `toml::from_str()` into `T`
    3. Return the parse or read failure with the file path attached

    # Type Parameters
    * `T` - structure implementing `DeserializeOwned`

    # Arguments
    * `file_path` - absolute or relative path of the TOML file

    # Returns
    * `Result<T, anyhow::Error>`
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)
        .with_context(|| format!("[read_toml_from_file] failed to read {}", file_path))?;
    let toml: T = toml::from_str(&toml_content)
        .with_context(|| format!("[read_toml_from_file] failed to parse {}", file_path))?;

    Ok(toml)
}

#[doc = r#"
    Makes sure the directory tree `dir` exists.

    Missing parents are created, an already existing directory is left
    untouched together with everything inside it.

    # Errors
    The path or one of its parents cannot be created (e.g. a regular file is
    in the way, or the location is not writable).
"#]
pub fn ensure_dir_all(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| {
        format!(
            "[io_utils->ensure_dir_all] failed to create output directory {:?}",
            dir
        )
    })?;

    Ok(())
}

#[doc = "Absolute form of an existing directory, used for the final summary line"]
pub fn resolve_absolute_dir(dir: &Path) -> anyhow::Result<PathBuf> {
    fs::canonicalize(dir)
        .with_context(|| format!("[io_utils->resolve_absolute_dir] cannot resolve {:?}", dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_parents() {
        let root = tempdir().unwrap();
        let target: PathBuf = root.path().join("docs").join("images");

        ensure_dir_all(&target).unwrap();

        assert!(target.is_dir());
    }

    #[test]
    fn existing_directory_and_its_files_are_untouched() {
        let root = tempdir().unwrap();
        let target: PathBuf = root.path().join("images");
        fs::create_dir_all(&target).unwrap();

        let unrelated: PathBuf = target.join("notes.txt");
        fs::write(&unrelated, b"keep me").unwrap();

        ensure_dir_all(&target).unwrap();
        ensure_dir_all(&target).unwrap();

        assert_eq!(fs::read(&unrelated).unwrap(), b"keep me");
        assert_eq!(fs::read_dir(&target).unwrap().count(), 1);
    }

    #[test]
    fn file_in_the_way_is_an_error() {
        let root = tempdir().unwrap();
        let blocker: PathBuf = root.path().join("docs");
        fs::write(&blocker, b"not a directory").unwrap();

        let err = ensure_dir_all(&blocker.join("images")).unwrap_err();

        assert!(format!("{:?}", err).contains("failed to create output directory"));
    }

    #[test]
    fn absolute_dir_is_absolute() {
        let root = tempdir().unwrap();
        let resolved: PathBuf = resolve_absolute_dir(root.path()).unwrap();
        assert!(resolved.is_absolute());
    }

    #[test]
    fn missing_toml_file_reports_path() {
        let err = read_toml_from_file::<toml::Table>("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
