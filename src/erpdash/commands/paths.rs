use crate::commands::CmdResult;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// The data directory, the config file and, when the store has one, the
/// snapshot file.
pub fn run(data_dir: &Path, storage: Option<PathBuf>) -> Result<CmdResult> {
    let mut paths = vec![data_dir.to_path_buf(), data_dir.join("config.json")];
    paths.extend(storage);
    Ok(CmdResult::default().with_paths(paths))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_data_dir_files() {
        let dir = Path::new("/tmp/erpdash");
        let res = run(dir, Some(dir.join("erp-storage.json"))).unwrap();
        assert_eq!(res.paths.len(), 3);
        assert!(res.paths[2].ends_with("erp-storage.json"));

        assert_eq!(run(dir, None).unwrap().paths.len(), 2);
    }
}
