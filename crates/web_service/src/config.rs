//! Configuration management for the summarization service.
//!
//! Supports loading configuration from environment variables with fallback
//! to defaults.

use summarizer_core::SummarizeOptions;

/// Load the direct-regime summarization tunables from environment variables.
///
/// Environment variables:
/// - `SUMMARY_MAX_CAP`: ceiling on generated summary length in tokens (default: 512)
/// - `SUMMARY_RATIO`: target output/input compression ratio (default: 0.7)
pub fn load_summarize_options() -> SummarizeOptions {
    let defaults = SummarizeOptions::default();
    SummarizeOptions {
        max_cap: std::env::var("SUMMARY_MAX_CAP")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_cap),
        ratio: std::env::var("SUMMARY_RATIO")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.ratio),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_options_have_sensible_defaults() {
        let options = load_summarize_options();
        assert!(options.max_cap > 0);
        assert!(options.ratio > 0.0 && options.ratio <= 1.0);
    }
}
