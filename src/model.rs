use csv::StringRecord;
use serde::Serialize;

pub const DEFAULT_INPUT: &str = "files/input/truck_event_text_partition.csv";
pub const DEFAULT_OUTPUT: &str = "files/output/specific-columns.csv";
pub const PREFERRED_COLUMNS: [&str; 3] = ["id", "event_type", "value"];

/// Number of leading columns kept when none of the preferred names exist.
pub const POSITIONAL_COLUMNS: usize = 3;

#[derive(Debug, Serialize)]
pub struct SampleRecord {
    pub id: u32,
    pub event_type: &'static str,
    pub value: u32,
}

pub const SAMPLE_RECORDS: [SampleRecord; 2] = [
    SampleRecord {
        id: 1,
        event_type: "load",
        value: 100,
    },
    SampleRecord {
        id: 2,
        event_type: "unload",
        value: 200,
    },
];

/// A parsed CSV file, values kept as read.
#[derive(Debug)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<StringRecord>,
}

impl Table {
    /// Index of the first column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}
