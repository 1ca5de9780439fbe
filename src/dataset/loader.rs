//! Dataset Loader
//!
//! Reads the CSV source into raw rows, normalizes them and builds the facet index.
//! `SharedDataset` guards the build so that it runs exactly once per process and
//! no reader can observe a partially built dataset.

use super::facets::build_facet_index;
use super::normalizer::normalize_rows;
use super::types::{Dataset, LoadError, RawRow, Record};

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::OnceCell;

impl Dataset {
    /// Builds a dataset from already normalized records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let facets = build_facet_index(&records);
        Self { records, facets }
    }

    /// Normalizes raw rows (in order) and indexes the result.
    pub fn from_rows(rows: &[RawRow]) -> Self {
        Self::from_records(normalize_rows(rows))
    }

    /// Reads and parses a CSV file. Blocking.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let started = Instant::now();
        tracing::info!("Parsing dataset from {}", path.display());

        let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let rows = read_rows(file, &path.display().to_string())?;

        tracing::info!("Normalizing {} rows", rows.len());
        let dataset = Self::from_rows(&rows);

        tracing::info!(
            "Dataset ready: {} records, {} regions, {} categories, {} tags in {:?}",
            dataset.records.len(),
            dataset.facets.regions.len(),
            dataset.facets.categories.len(),
            dataset.facets.tags.len(),
            started.elapsed()
        );
        Ok(dataset)
    }
}

/// Parses CSV content with a header row into string-keyed rows.
///
/// Short rows simply lack the trailing columns; blank lines are skipped.
/// Any container-level error (bad UTF-8, unreadable stream) fails the whole load.
pub fn read_rows<R: Read>(reader: R, source_name: &str) -> Result<Vec<RawRow>, LoadError> {
    let csv_error = |source| LoadError::Csv {
        path: source_name.to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let row: RawRow = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

/// Process-wide handle to the dataset, built at most once.
///
/// Concurrent first callers wait on the same initialization. A failed build is
/// not cached, but the binary treats it as fatal at startup.
pub struct SharedDataset {
    source: PathBuf,
    cell: OnceCell<Arc<Dataset>>,
}

impl SharedDataset {
    pub fn new(source: impl Into<PathBuf>) -> Arc<Self> {
        Arc::new(Self {
            source: source.into(),
            cell: OnceCell::new(),
        })
    }

    /// A handle that is already initialized with `dataset`.
    pub fn preloaded(dataset: Dataset) -> Arc<Self> {
        Arc::new(Self {
            source: PathBuf::new(),
            cell: OnceCell::new_with(Some(Arc::new(dataset))),
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Returns the dataset, loading it on first use.
    pub async fn get(&self) -> Result<Arc<Dataset>, LoadError> {
        self.cell
            .get_or_try_init(|| async {
                let path = self.source.clone();
                let dataset = tokio::task::spawn_blocking(move || Dataset::load(&path)).await??;
                Ok::<_, LoadError>(Arc::new(dataset))
            })
            .await
            .cloned()
    }
}
