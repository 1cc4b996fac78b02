//! Encoding detection and candidate ordering

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use tracing::debug;

use crate::constants::DEFAULT_ENCODING_LABEL;

/// One encoding to try, with the label it was requested by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub label: &'static str,
    pub encoding: &'static Encoding,
}

impl Candidate {
    /// Resolve a WHATWG encoding label
    pub fn from_label(label: &'static str) -> Option<Self> {
        Encoding::for_label(label.as_bytes()).map(|encoding| Self { label, encoding })
    }
}

/// Guess the encoding of a leading byte sample
///
/// A byte-order mark wins outright. Pure ASCII and empty samples resolve to
/// the default encoding; anything else goes to the statistical detector.
pub fn detect_encoding(sample: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(sample) {
        debug!("Byte-order mark found for {}", encoding.name());
        return encoding;
    }

    if sample.is_ascii() {
        return default_encoding();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(sample, false);
    let guess = detector.guess(None, true);
    debug!("Detector guessed {} from {} bytes", guess.name(), sample.len());
    guess
}

/// Build the ordered candidate list: detected encoding, then fallbacks
///
/// Labels naming an encoding that is already in the list are dropped, since
/// decoding with the same encoding twice cannot give a different result.
pub fn candidate_encodings(
    detected: &'static Encoding,
    fallback_labels: &[&'static str],
) -> Vec<Candidate> {
    let mut candidates = vec![Candidate {
        label: detected.name(),
        encoding: detected,
    }];

    for &label in fallback_labels {
        match Candidate::from_label(label) {
            Some(candidate) if candidates.iter().any(|c| c.encoding == candidate.encoding) => {
                debug!(
                    "Skipping fallback {}: same as already queued {}",
                    label,
                    candidate.encoding.name()
                );
            }
            Some(candidate) => candidates.push(candidate),
            None => debug!("Skipping unknown encoding label {}", label),
        }
    }

    candidates
}

fn default_encoding() -> &'static Encoding {
    Encoding::for_label(DEFAULT_ENCODING_LABEL.as_bytes()).unwrap_or(UTF_8)
}
