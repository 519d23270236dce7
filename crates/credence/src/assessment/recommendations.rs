//! Fixed advisory lists attached to every verdict. The lists do not vary with
//! the input or the score.

const CONTENT_ADVISORY: [&str; 3] = [
    "Cross-check with at least two reputable sources.",
    "Look for original source, date, and author credentials.",
    "Beware of sensational language and unverifiable claims.",
];

const MEDIA_ADVISORY: [&str; 3] = [
    "Request original, uncompressed source file.",
    "Check for content provenance (C2PA, watermark).",
    "Verify with trusted reporting before sharing.",
];

pub(crate) fn content_advisory() -> Vec<String> {
    CONTENT_ADVISORY.iter().map(|line| line.to_string()).collect()
}

pub(crate) fn media_advisory() -> Vec<String> {
    MEDIA_ADVISORY.iter().map(|line| line.to_string()).collect()
}
