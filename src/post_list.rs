use std::path::{Path, PathBuf};
use std::{fs, io};

/// Finds the Markdown sources of one posts directory. Two layouts are
/// accepted: flat `<name>.md` files, and one directory per post holding
/// an index file next to its images.
pub struct PostList {
    pub root_dir: PathBuf,
    pub index_file: String,
}

impl PostList {
    /// Every source file, sorted by path so a pass is deterministic
    /// regardless of directory iteration order.
    pub fn retrieve(&self) -> io::Result<Vec<PathBuf>> {
        let mut sources = self.retrieve_files()?;
        for dir in self.retrieve_dirs()? {
            sources.push(dir.join(&self.index_file));
        }
        sources.sort();
        Ok(sources)
    }

    fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut posts = vec![];
        let entries = fs::read_dir(self.root_dir.as_path())?;
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(file_name) = entry.file_name().to_str() {
                if file_name.ends_with(".md") {
                    posts.push(entry.path());
                }
            }
        }
        Ok(posts)
    }

    fn retrieve_dirs(&self) -> io::Result<Vec<PathBuf>> {
        let dirs = Self::list_dirs(self.root_dir.as_path())?;
        let mut post_dirs = vec![];
        for dir in dirs {
            if Self::contains_file(&dir, &self.index_file)? {
                post_dirs.push(dir);
            }
        }
        Ok(post_dirs)
    }

    fn list_dirs(posts_dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut dirs: Vec<PathBuf> = vec![];
        let entries = fs::read_dir(posts_dir)?;
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                dirs.push(entry.path());
            }
        }
        Ok(dirs)
    }

    fn contains_file(dir: &Path, base_name: &str) -> io::Result<bool> {
        let entries = fs::read_dir(dir)?;
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_file() && entry.file_name().to_str() == Some(base_name) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
