//! Bulk analysis of observed `User-Agent` headers: load a sample file, classify
//! every distinct header once, tally views per category and render a report.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;

use indexmap::IndexMap;
use rayon::prelude::*;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::types::UserAgent;
use crate::Classifier;

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

/// Observed headers grouped under an opaque key (typically a normalized
/// user agent), each header mapped to the number of times it was seen.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleGroup {
    pub user_agent: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub version_counts: IndexMap<String, u64>,
    /// Raw header → occurrences. Uses IndexMap to keep file order in the report.
    #[serde(default)]
    pub string_counts: IndexMap<String, u64>,
}

/// Load sample groups. `.yml`/`.yaml` files are read as YAML, anything else as JSON.
pub fn load_samples(path: impl AsRef<Path>) -> Result<Vec<SampleGroup>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    );
    let groups: Vec<SampleGroup> = if is_yaml {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    debug!(path = %path.display(), groups = groups.len(), "loaded samples");
    Ok(groups)
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// One classified header and how often it was observed.
#[derive(Debug, Clone)]
pub struct Observation {
    pub user_agent: UserAgent,
    pub count: u64,
}

/// Classify every (header, count) pair across all groups, in parallel.
/// Output order follows the input order.
pub fn classify_samples(classifier: &Classifier, groups: &[SampleGroup]) -> Vec<Observation> {
    groups
        .par_iter()
        .flat_map_iter(|g| g.string_counts.iter())
        .map(|(header, &count)| Observation {
            user_agent: classifier.parse(header),
            count,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tally
// ---------------------------------------------------------------------------

/// View counts per category, keyed by display value and sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub group_count: usize,
    pub header_count: usize,
    pub view_count: u64,
    pub client_types: BTreeMap<String, u64>,
    pub client_names: BTreeMap<String, u64>,
    pub device_types: BTreeMap<String, u64>,
    pub os_names: BTreeMap<String, u64>,
    pub urls: BTreeMap<String, u64>,
}

impl Tally {
    pub fn new(group_count: usize, observations: &[Observation]) -> Self {
        let mut tally = Tally {
            group_count,
            ..Default::default()
        };
        for o in observations {
            tally.record(&o.user_agent, o.count);
        }
        info!(
            groups = tally.group_count,
            headers = tally.header_count,
            views = tally.view_count,
            "tallied user agents"
        );
        tally
    }

    pub fn record(&mut self, ua: &UserAgent, count: u64) {
        self.header_count += 1;
        self.view_count += count;
        *self.client_types.entry(ua.client_type.to_string()).or_default() += count;
        *self.client_names.entry(ua.client_name.clone()).or_default() += count;
        *self.device_types.entry(ua.device_type.to_string()).or_default() += count;
        *self.os_names.entry(ua.os_name.clone()).or_default() += count;
        if !ua.url.is_empty() {
            *self.urls.entry(ua.url.clone()).or_default() += count;
        }
    }

    /// Totals followed by one breakdown table per category.
    pub fn write_summary<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "User-Agent Count: {}", self.group_count)?;
        writeln!(w, "User-Agent String Count: {}", self.header_count)?;
        writeln!(w, "User-Agent View Count: {}", self.view_count)?;
        write_breakdown(w, "Client Type", &self.client_types)?;
        write_breakdown(w, "Client Name", &self.client_names)?;
        write_breakdown(w, "Device Type", &self.device_types)?;
        write_breakdown(w, "OS Name", &self.os_names)?;
        write_breakdown(w, "URL", &self.urls)
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Per header: the unquoted header, the cleaned fields with the occurrence
/// count, and the canonical rendering, followed by a blank line.
pub fn write_observations<W: Write>(w: &mut W, observations: &[Observation]) -> io::Result<()> {
    for o in observations {
        let ua = &o.user_agent;
        writeln!(w, "{}", ua.header)?;
        writeln!(w, "{}\t({} occurrences)", ua.fields.join(" "), o.count)?;
        writeln!(w, "{}", ua)?;
        writeln!(w)?;
    }
    Ok(())
}

/// Views and share of the total per key.
pub fn write_breakdown<W: Write>(
    w: &mut W,
    title: &str,
    counts: &BTreeMap<String, u64>,
) -> io::Result<()> {
    writeln!(w, "\n Views\tPercent\t{}", title)?;
    let total: u64 = counts.values().sum();
    for (key, &views) in counts {
        let percent = views as f64 / total as f64 * 100.0;
        writeln!(w, "{:6}\t{:6.2}\t{}", views, percent, key)?;
    }
    writeln!(w, "{:6}\t100.00\tTotal", total)
}
