//! Plain-text rendering of extractions, reports and the schema.

use std::io::{self, Write};
use urlguard_core::classifier::Verdict;
use urlguard_core::schema::{FeatureName, FEATURE_SCHEMA};
use urlguard_core::{Extraction, Report};

/// Headline features shown under a verdict, with their display names.
const HEADLINE: [(FeatureName, &str); 3] = [
    (FeatureName::NumDots, "Dot count"),
    (FeatureName::UrlLength, "URL length"),
    (FeatureName::NumDash, "Dash count"),
];

pub fn write_extraction(w: &mut impl Write, url: &str, e: &Extraction) -> io::Result<()> {
    writeln!(w, "URL: {url}")?;
    let vector: Vec<String> = e.vector.as_slice().iter().map(|v| v.to_string()).collect();
    writeln!(w, "  vector: [{}]", vector.join(", "))?;
    for (name, value) in e.raw.iter() {
        match e.categories.get(name) {
            Some(label) => writeln!(w, "  {:<18} {:>6}  {}", name.as_str(), value, label)?,
            None => writeln!(w, "  {:<18} {:>6}", name.as_str(), value)?,
        }
    }
    Ok(())
}

pub fn write_report(w: &mut impl Write, r: &Report) -> io::Result<()> {
    let verdict = match r.prediction.verdict {
        Verdict::Phishing => "PHISHING",
        Verdict::Benign => "BENIGN",
    };
    writeln!(w, "URL: {}", r.url)?;
    writeln!(w, "Result: {verdict}")?;
    writeln!(w, "Phishing probability: {:.2}", r.prediction.probability)?;
    writeln!(w, "Main feature categories:")?;
    for (name, title) in HEADLINE {
        let label = r.extraction.categories.get(name).unwrap_or("N/A");
        let value = r.extraction.raw.get(name).unwrap_or(0);
        writeln!(w, "  - {title} ({name}): {label} ({value})")?;
    }
    let keyword = r
        .extraction
        .categories
        .get(FeatureName::SuspiciousKeyword)
        .unwrap_or("No");
    writeln!(w, "  - Suspicious keyword: {keyword}")?;
    Ok(())
}

pub fn write_schema(w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "{:<5} {:<18} {}", "INDEX", "COLUMN", "KIND")?;
    for (i, (name, kind)) in FEATURE_SCHEMA.iter().enumerate() {
        writeln!(w, "{:<5} {:<18} {}", i, name.as_str(), kind)?;
    }
    Ok(())
}
