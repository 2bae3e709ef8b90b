use crate::error::{FallbackError, FallbackResult};
use crate::model::{POSITIONAL_COLUMNS, Table};
use csv::{ReaderBuilder, Writer};
use std::{fs::File, path::Path};
use tracing::debug;

/// Columns and row count of a successful projection.
#[derive(Debug)]
pub struct Projection {
    pub columns: Vec<String>,
    pub rows: usize,
}

/// Reads `input`, keeps the selected columns and writes them to `output`.
pub fn project<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    preferred: &[String],
) -> FallbackResult<Projection> {
    let table = read_table(input)?;
    let indices = select_columns(&table, preferred)?;
    let rows = write_projection(&table, &indices, output)?;
    Ok(Projection {
        columns: indices.iter().map(|&i| table.headers[i].clone()).collect(),
        rows,
    })
}

/// Parses a comma separated file with a header row.
///
/// Short rows are padded with empty fields; rows wider than the header are
/// rejected. A header without data rows is rejected too.
pub fn read_table<P: AsRef<Path>>(path: P) -> FallbackResult<Table> {
    let file = File::open(path)?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(FallbackError::NoHeaders);
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let mut record = result?;
        if record.len() > headers.len() {
            return Err(FallbackError::TooManyFields {
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                expected: headers.len(),
                found: record.len(),
            });
        }
        while record.len() < headers.len() {
            record.push_field("");
        }
        rows.push(record);
    }

    if rows.is_empty() {
        return Err(FallbackError::NoRows);
    }
    debug!(columns = headers.len(), rows = rows.len(), "parsed input");
    Ok(Table { headers, rows })
}

/// Picks the preferred columns present in `table`, in preferred order.
/// Without any of them, the leading columns are used instead.
pub fn select_columns(table: &Table, preferred: &[String]) -> FallbackResult<Vec<usize>> {
    if table.headers.is_empty() {
        return Err(FallbackError::NoHeaders);
    }
    let named: Vec<usize> = preferred
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect();
    if !named.is_empty() {
        return Ok(named);
    }
    let count = table.headers.len().min(POSITIONAL_COLUMNS);
    Ok((0..count).collect())
}

/// Writes the header and every row restricted to `indices`. Returns the
/// number of data rows written.
pub fn write_projection<P: AsRef<Path>>(
    table: &Table,
    indices: &[usize],
    path: P,
) -> FallbackResult<usize> {
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(indices.iter().map(|&i| table.headers[i].as_str()))?;
    for row in &table.rows {
        wtr.write_record(indices.iter().map(|&i| row.get(i).unwrap_or("")))?;
    }
    wtr.flush()?;
    Ok(table.rows.len())
}
