use crate::model::SAMPLE_RECORDS;
use anyhow::Result;
use csv::Writer;
use std::path::Path;

/// Writes the fixed two-row dataset, replacing whatever is at `path`.
pub fn write_sample_csv<P: AsRef<Path>>(path: P) -> Result<()> {
    let mut wtr = Writer::from_path(path)?;
    for record in &SAMPLE_RECORDS {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_sample_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.csv");
        write_sample_csv(&path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "id,event_type,value\n1,load,100\n2,unload,200\n"
        );
    }

    #[test]
    fn test_sample_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.csv");
        fs::write(&path, "partial,garbage,that,is,longer,than,the,sample\n").unwrap();
        write_sample_csv(&path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "id,event_type,value\n1,load,100\n2,unload,200\n"
        );
    }
}
