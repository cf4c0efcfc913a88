use crate::domain::constants::JSON_DIR;
use crate::domain::models::{PartitionSummary, ScanReport, SkippedFile};
use crate::domain::record::{is_falsy, Document};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Why a single file was left out of the corpus. None of these abort a scan.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("empty document: {}", .path.display())]
    Empty { path: PathBuf },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Read { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::Empty { path } => path,
        }
    }

    fn reason(&self) -> String {
        match self {
            LoadError::Read { source, .. } => format!("unreadable: {}", source),
            LoadError::Parse { source, .. } => format!("invalid json: {}", source),
            LoadError::Empty { .. } => "empty document".to_string(),
        }
    }
}

impl From<&LoadError> for SkippedFile {
    fn from(e: &LoadError) -> Self {
        SkippedFile {
            path: e.path().to_string_lossy().to_string(),
            reason: e.reason(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PartitionDocuments {
    pub partition: String,
    /// False when `<root>/<partition>/json` does not exist.
    pub present: bool,
    pub documents: Vec<Document>,
}

#[derive(Debug, Clone)]
pub struct Corpus {
    pub root: PathBuf,
    pub partitions: Vec<PartitionDocuments>,
    pub skipped: Vec<SkippedFile>,
}

impl Corpus {
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.partitions.iter().flat_map(|p| p.documents.iter())
    }

    pub fn document_count(&self) -> usize {
        self.partitions.iter().map(|p| p.documents.len()).sum()
    }

    pub fn scan_report(&self) -> ScanReport {
        ScanReport {
            root: self.root.to_string_lossy().to_string(),
            documents: self.document_count(),
            partitions: self
                .partitions
                .iter()
                .map(|p| PartitionSummary {
                    partition: p.partition.clone(),
                    present: p.present,
                    documents: p.documents.len(),
                })
                .collect(),
            skipped: self.skipped.clone(),
        }
    }
}

pub fn partition_dir(root: &Path, partition: &str) -> PathBuf {
    root.join(partition).join(JSON_DIR)
}

/// Read and parse one record. The file is closed before this returns.
pub fn load_document(path: &Path) -> Result<Document, LoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    if is_falsy(&value) {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(Document::new(path, value))
}

/// `*.json` regular files of a directory, sorted by file name.
fn json_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry
            .with_context(|| format!("listing {}", dir.display()))?
            .path();
        let is_json = path
            .file_name()
            .map(|n| n.to_string_lossy().ends_with(".json"))
            .unwrap_or(false);
        if is_json && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load one partition. Bad files are returned alongside the good documents
/// rather than failing the partition.
pub fn load_partition(
    root: &Path,
    partition: &str,
) -> anyhow::Result<(PartitionDocuments, Vec<LoadError>)> {
    let dir = partition_dir(root, partition);
    if !dir.is_dir() {
        tracing::debug!("partition {} not found at {}", partition, dir.display());
        return Ok((
            PartitionDocuments {
                partition: partition.to_string(),
                present: false,
                documents: vec![],
            },
            vec![],
        ));
    }

    let mut documents = Vec::new();
    let mut errors = Vec::new();
    for path in json_files(&dir)? {
        match load_document(&path) {
            Ok(doc) => documents.push(doc),
            Err(e) => {
                tracing::warn!("skipping {}", e);
                errors.push(e);
            }
        }
    }
    tracing::debug!(
        "partition {}: {} documents, {} skipped",
        partition,
        documents.len(),
        errors.len()
    );
    Ok((
        PartitionDocuments {
            partition: partition.to_string(),
            present: true,
            documents,
        },
        errors,
    ))
}

pub fn load_corpus(root: &Path, partitions: &[String]) -> anyhow::Result<Corpus> {
    let mut loaded = Vec::with_capacity(partitions.len());
    let mut skipped = Vec::new();
    for partition in partitions {
        let (docs, errors) = load_partition(root, partition)?;
        skipped.extend(errors.iter().map(SkippedFile::from));
        loaded.push(docs);
    }
    let corpus = Corpus {
        root: root.to_path_buf(),
        partitions: loaded,
        skipped,
    };
    tracing::info!(
        "loaded {} documents from {} ({} skipped)",
        corpus.document_count(),
        root.display(),
        corpus.skipped.len()
    );
    Ok(corpus)
}
