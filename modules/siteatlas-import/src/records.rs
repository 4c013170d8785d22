use std::collections::HashMap;

use siteatlas_common::SiteAtlasError;

/// One row of the locations file, keyed by the header fields.
#[derive(Debug, Clone)]
pub struct LocationRecord {
    fields: HashMap<String, String>,
}

impl LocationRecord {
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Field value, or `MissingField` when the column is absent.
    pub fn require(&self, field: &str) -> Result<&str, SiteAtlasError> {
        self.get(field)
            .ok_or_else(|| SiteAtlasError::MissingField(field.to_string()))
    }
}

/// Decode raw file bytes into records, first line as the header.
///
/// Row order is preserved. Column presence is not validated here; a
/// missing required column surfaces at the point of use in the
/// reconciler. Any decoding or parsing failure (invalid UTF-8, malformed
/// quoting, ragged rows) aborts before any registry mutation happens.
pub fn parse_records(raw: &[u8]) -> Result<Vec<LocationRecord>, SiteAtlasError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(raw);

    let headers = reader
        .headers()
        .map_err(|e| SiteAtlasError::InvalidInput(e.to_string()))?
        .clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| SiteAtlasError::InvalidInput(e.to_string()))?;
        let fields = headers
            .iter()
            .zip(row.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();
        records.push(LocationRecord { fields });
    }

    Ok(records)
}
