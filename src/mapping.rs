//! Fixed translation tables from Google Code labels and statuses to GitHub labels.
//!
//! Source labels without an entry are dropped, never passed through.

use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref LABEL_MAP: HashMap<&'static str, &'static str> = HashMap::from([
        ("OpSys-Linux", "Linux"),
        ("OpSys-OSX", "OSX"),
        ("OpSys-OpenBSD", "OpenBSD"),
        ("OpSys-Windows", "Windows"),
        ("Priority-Low", "low"),
        ("Type-Defect", "bug"),
        ("Type-Enhancement", "enhancement"),
    ]);

    pub static ref STATUS_MAP: HashMap<&'static str, &'static str> = HashMap::from([
        ("Duplicate", "duplicate"),
        ("Invalid", "invalid"),
        ("WontFix", "wontfix"),
    ]);
}

pub fn map_label(label: &str) -> Option<&'static str> {
    LABEL_MAP.get(label).copied()
}

pub fn map_status(status: &str) -> Option<&'static str> {
    STATUS_MAP.get(status).copied()
}

/// Mapped labels in source order, followed by the status label if it has one
pub fn map_labels<'a, I>(labels: I, status: Option<&str>) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut mapped: Vec<String> = labels
        .into_iter()
        .filter_map(|label| map_label(label))
        .map(str::to_string)
        .collect();

    if let Some(label) = status.and_then(map_status) {
        mapped.push(label.to_string());
    }

    mapped
}
