use async_trait::async_trait;
use lmpk_core::error::{Result, StorageError};
use lmpk_core::record::RedirectRecord;
use lmpk_core::repository::{DeleteMatch, ReadRepository, Removed, Repository};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// Flat-file implementation of the repository contract.
///
/// Every record is one `<name> > <link>` line. Each call reads the whole
/// file; mutations rewrite it through a sibling temporary file that is then
/// renamed over the original, so a crash never leaves a half-written store.
/// Lines that do not parse as records, including lines that are not valid
/// UTF-8, are kept byte for byte and never resolve.
#[derive(Debug, Clone)]
pub struct FlatFileRepository {
    path: PathBuf,
}

impl FlatFileRepository {
    /// Opens the store at `path`, creating an empty file if it does not exist.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !tokio::fs::try_exists(&path).await? {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, "").await?;
            info!(path = %path.display(), "created empty redirects file");
        }

        Ok(Self { path })
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_lines(&self) -> Result<Vec<Vec<u8>>> {
        let content = tokio::fs::read(&self.path).await?;
        Ok(content
            .split(|byte| *byte == b'\n')
            .filter(|line| !line.is_empty())
            .map(<[u8]>::to_vec)
            .collect())
    }

    async fn write_lines(&self, lines: &[Vec<u8>]) -> Result<()> {
        let mut content = Vec::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for line in lines {
            content.extend_from_slice(line);
            content.push(b'\n');
        }

        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        trace!(path = %self.path.display(), lines = lines.len(), "rewrote redirects file");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn as_text(line: &[u8]) -> Option<&str> {
    std::str::from_utf8(line).ok()
}

fn as_record(line: &[u8]) -> Option<RedirectRecord> {
    as_text(line).and_then(RedirectRecord::parse_line)
}

#[async_trait]
impl ReadRepository for FlatFileRepository {
    async fn get(&self, name: &str) -> Result<Option<RedirectRecord>> {
        let lines = self.read_lines().await?;

        Ok(lines
            .iter()
            .filter_map(|line| as_record(line))
            .find(|record| record.name == name))
    }

    async fn count(&self) -> Result<usize> {
        let lines = self.read_lines().await?;

        Ok(lines.iter().filter(|line| as_record(line).is_some()).count())
    }
}

#[async_trait]
impl Repository for FlatFileRepository {
    async fn insert(&self, record: RedirectRecord) -> Result<()> {
        let mut lines = self.read_lines().await?;
        lines.push(record.to_line().into_bytes());
        self.write_lines(&lines).await?;

        debug!(name = %record.name, link = %record.link, "appended redirect line");
        Ok(())
    }

    async fn delete(&self, name: &str, mode: DeleteMatch) -> Result<Option<Removed>> {
        let mut lines = self.read_lines().await?;

        let Some(position) = lines
            .iter()
            .position(|line| as_text(line).is_some_and(|text| mode.matches(text, name)))
        else {
            return Ok(None);
        };

        let line = String::from_utf8(lines.remove(position))
            .map_err(|err| StorageError::InvalidData(err.to_string()))?;
        self.write_lines(&lines).await?;

        debug!(name = %name, line = %line, position, "removed redirect line");
        Ok(Some(Removed { position, line }))
    }

    async fn restore(&self, removed: Removed) -> Result<()> {
        let mut lines = self.read_lines().await?;
        let position = removed.position.min(lines.len());
        lines.insert(position, removed.line.into_bytes());
        self.write_lines(&lines).await?;

        debug!(position, "restored redirect line");
        Ok(())
    }
}
