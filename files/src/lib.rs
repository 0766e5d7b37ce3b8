// File system helpers: forgiving removal of files and folders, and file URL decoding.
//
// The boolean functions never report errors. "Nothing was there" and "could not
// delete it" both come back as false; use `Remover` directly to tell them apart.

pub mod removal;
pub mod url;

use std::fs;
use std::path::{Path, PathBuf};

pub use removal::{Removal, RemovalPolicy, Remover};
pub use url::local_path_from_file_url;

/// Removes a single file, retrying briefly if the platform holds it locked.
///
/// False for `None`, a missing path, a directory, or a file that could not be deleted.
pub fn remove<P: AsRef<Path>>(file: Option<P>) -> bool {
    file.map_or(false, |f| Remover::default().remove_file(f.as_ref()).is_removed())
}

/// Removes a folder and everything in it. True only if the whole tree is gone.
pub fn remove_folder<P: AsRef<Path>>(folder: Option<P>) -> bool {
    folder.map_or(false, |f| Remover::default().remove_tree(f.as_ref()).is_removed())
}

/// Creates `folder` and any missing parents. True if it is a directory afterwards.
pub fn mkdirs<P: AsRef<Path>>(folder: P) -> bool {
    let folder = folder.as_ref();
    fs::create_dir_all(folder).is_ok() && folder.is_dir()
}

/// [`remove`] on tokio's blocking pool.
pub async fn remove_async(file: PathBuf, remover: Remover) -> Removal {
    tokio::task::spawn_blocking(move || remover.remove_file(&file))
        .await
        .unwrap_or(Removal::Failed)
}

/// [`remove_folder`] on tokio's blocking pool.
pub async fn remove_folder_async(folder: PathBuf, remover: Remover) -> Removal {
    tokio::task::spawn_blocking(move || remover.remove_tree(&folder))
        .await
        .unwrap_or(Removal::Failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::{NamedTempFile, TempDir};

    const MISSING: &str = "/somethingThatDoesntExistsOnMostMachines-111111111111111111111111111111";

    #[test]
    fn test_remove() {
        assert!(!remove(None::<&Path>), "'None' files are not deleted.");
        assert!(!remove(Some(MISSING)), "Non existing files are not deleted.");

        let (_, path) = NamedTempFile::new().unwrap().keep().unwrap();
        assert!(path.is_file(), "The just created file should exist!");

        assert!(remove(Some(&path)), "remove(file) should remove the file");
        assert!(!path.exists(), "The just removed file should not exist!");

        // try to remove non-existing file
        assert!(!remove(Some(&path)), "remove(file) should not remove a missing file");
        assert!(!path.exists());
    }

    #[test]
    fn test_remove_refuses_folders() {
        let dir = TempDir::new().unwrap();
        let folder = dir.path().join("test-folder");
        assert!(mkdirs(&folder));
        assert!(folder.is_dir());
        assert!(!remove(Some(&folder)), "Should not be able to delete a folder, even empty one.");
        assert!(remove_folder(Some(&folder)), "Should be able to delete a folder.");
        assert!(!folder.exists());
    }

    #[test]
    fn test_remove_folder() {
        assert!(!remove_folder(None::<&Path>), "'None' folders are not deleted.");
        assert!(!remove_folder(Some(MISSING)), "Non existing folders are not deleted.");

        let dir = TempDir::new().unwrap();
        let folder = dir.path().join("test-folder");
        assert!(mkdirs(&folder));
        let file = folder.join("child");
        File::create(&file).unwrap();
        assert!(file.exists());

        assert!(remove_folder(Some(&folder)), "Should be able to delete a folder.");
        assert!(!folder.exists());
        assert!(!file.exists());
    }

    #[test]
    fn test_mkdirs_nested() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b").join("c");
        assert!(mkdirs(&nested));
        assert!(mkdirs(&nested), "existing directory still counts");
        let file = dir.path().join("plain");
        File::create(&file).unwrap();
        assert!(!mkdirs(&file));
    }

    #[tokio::test]
    async fn test_async_removal() {
        let dir = TempDir::new().unwrap();
        let folder = dir.path().join("async");
        fs::create_dir_all(folder.join("inner")).unwrap();
        let file = folder.join("inner").join("f.txt");
        File::create(&file).unwrap();

        let remover = Remover::default();
        assert_eq!(remove_async(folder.clone(), remover).await, Removal::NotAFile);
        assert_eq!(remove_async(file.clone(), remover).await, Removal::Removed);
        assert_eq!(remove_folder_async(folder.clone(), remover).await, Removal::Removed);
        assert_eq!(remove_folder_async(folder, remover).await, Removal::Absent);
    }
}
