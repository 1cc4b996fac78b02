//! Encoding fallback loop for CSV input files

use std::path::Path;
use tracing::{debug, info, warn};

use super::decoding::{DecodeAttempt, decode_candidate};
use super::detection::{candidate_encodings, detect_encoding};
use crate::app::models::ResolvedTable;
use crate::constants::{ENCODING_SAMPLE_BYTES, FALLBACK_ENCODING_LABELS};
use crate::{Error, Result};

/// Reads CSV files whose encoding is not known in advance
#[derive(Debug, Clone)]
pub struct CsvReader {
    sample_bytes: usize,
    fallback_labels: Vec<&'static str>,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self {
            sample_bytes: ENCODING_SAMPLE_BYTES,
            fallback_labels: FALLBACK_ENCODING_LABELS.to_vec(),
        }
    }
}

impl CsvReader {
    /// Create a reader with the default sample size and fallback list
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the fallback encodings tried after the detected one
    pub fn with_fallback_labels(mut self, labels: &[&'static str]) -> Self {
        self.fallback_labels = labels.to_vec();
        self
    }

    /// Read and decode a CSV file into rows
    pub fn resolve(&self, path: &Path) -> Result<ResolvedTable> {
        if !path.exists() {
            return Err(Error::input_not_found(path));
        }

        let bytes = std::fs::read(path).map_err(|e| {
            Error::io(format!("Failed to read file {}: {}", path.display(), e), e)
        })?;

        self.resolve_bytes(path, &bytes)
    }

    /// Decode already loaded file content; `path` is only used for reporting
    pub fn resolve_bytes(&self, path: &Path, bytes: &[u8]) -> Result<ResolvedTable> {
        let sample = &bytes[..bytes.len().min(self.sample_bytes)];
        let detected = detect_encoding(sample);
        info!("Detected encoding: {}", detected.name());

        let candidates = candidate_encodings(detected, &self.fallback_labels);
        debug!(
            "Encoding candidates: {:?}",
            candidates.iter().map(|c| c.label).collect::<Vec<_>>()
        );

        let mut attempts = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            let attempt = decode_candidate(bytes, candidate.encoding);
            let report = attempt.report(candidate);
            attempts.push(report);

            match attempt {
                DecodeAttempt::Decoded(table) => {
                    info!(
                        "Successfully read {} rows with {} encoding",
                        table.len(),
                        candidate.label
                    );
                    return Ok(ResolvedTable {
                        table,
                        detected_encoding: detected.name().to_string(),
                        encoding: candidate.encoding.name().to_string(),
                        attempts,
                    });
                }
                other => {
                    warn!("Failed with {}: {}", candidate.label, other.outcome());
                }
            }
        }

        Err(Error::decode(path, detected.name(), attempts))
    }
}
