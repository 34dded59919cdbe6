//! Labeled URL datasets and training feature matrices.
//!
//! Training runs outside this crate, but its input matrix is produced here
//! with the same [`extract_features`] used at serving time.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::features::{extract_features, FeatureVector, FEATURE_COLUMNS};

/// One dataset row: a raw URL and its class label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledUrl {
    pub url: String,
    pub label: i64,
}

/// Read a CSV with (at least) `url` and `label` columns. Other columns are ignored.
pub fn read_labeled_urls<R: Read>(reader: R) -> Result<Vec<LabeledUrl>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let url_idx = headers.iter().position(|h| h.trim() == "url");
    let label_idx = headers.iter().position(|h| h.trim() == "label");
    let (url_idx, label_idx) = match (url_idx, label_idx) {
        (Some(u), Some(l)) => (u, l),
        _ => {
            return Err(Error::Dataset(
                "dataset must contain \"url\" and \"label\" columns".to_string(),
            ))
        }
    };

    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        // Line 1 is the header.
        let line = i + 2;
        let url = record.get(url_idx).unwrap_or("").to_string();
        let raw_label = record.get(label_idx).unwrap_or("");
        let label = parse_label(raw_label)
            .ok_or_else(|| Error::Dataset(format!("line {line}: invalid label {raw_label:?}")))?;
        rows.push(LabeledUrl { url, label });
    }
    Ok(rows)
}

/// Accepts integer labels, including float spellings like `1.0`.
fn parse_label(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(n) = s.parse::<i64>() {
        return Some(n);
    }
    let f: f64 = s.parse().ok()?;
    // `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
    if f.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(&f) {
        Some(f as i64)
    } else {
        None
    }
}

/// Featurize every row.
pub fn feature_matrix(rows: &[LabeledUrl]) -> Vec<(FeatureVector, i64)> {
    rows.iter()
        .map(|r| (extract_features(&r.url), r.label))
        .collect()
}

/// Write the matrix as CSV: the canonical feature columns, then `label`.
pub fn write_feature_matrix<W: Write>(matrix: &[(FeatureVector, i64)], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut header: Vec<&str> = FEATURE_COLUMNS.to_vec();
    header.push("label");
    wtr.write_record(&header)?;
    for (features, label) in matrix {
        let mut record: Vec<String> = features.iter().map(|(_, v)| v.to_string()).collect();
        record.push(label.to_string());
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read `dataset`, featurize it and write the matrix to `output`.
/// Returns the number of rows written.
pub fn export_features(dataset: &Path, output: &Path) -> Result<usize> {
    let rows = read_labeled_urls(File::open(dataset)?)?;
    let matrix = feature_matrix(&rows);
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    write_feature_matrix(&matrix, File::create(output)?)?;
    tracing::info!(
        dataset = %dataset.display(),
        output = %output.display(),
        rows = matrix.len(),
        "exported feature matrix"
    );
    Ok(matrix.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_url_and_label_in_any_order() {
        let csv = "label,notes,url\n1,ok,https://example.com\n0,,login-verify.example.com/update?id=1\n";
        let rows = read_labeled_urls(csv.as_bytes()).unwrap();
        assert_eq!(
            rows,
            vec![
                LabeledUrl {
                    url: "https://example.com".into(),
                    label: 1
                },
                LabeledUrl {
                    url: "login-verify.example.com/update?id=1".into(),
                    label: 0
                },
            ]
        );
    }

    #[test]
    fn multiline_cells_are_one_row() {
        let csv = "url,label\n\"http://a.com/x\nhttp://junk\",1.0\n";
        let rows = read_labeled_urls(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, 1);
        let matrix = feature_matrix(&rows);
        assert_eq!(matrix[0].0, extract_features("http://a.com/x"));
    }

    #[test]
    fn missing_columns_rejected() {
        let err = read_labeled_urls("address,label\nx,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Dataset(_)));
    }

    #[test]
    fn bad_label_reports_line() {
        let err = read_labeled_urls("url,label\na.com,1\nb.com,maybe\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "dataset: line 3: invalid label \"maybe\"");
    }

    #[test]
    fn out_of_range_float_labels_rejected() {
        assert_eq!(parse_label("1.0"), Some(1));
        assert_eq!(parse_label("-3"), Some(-3));
        assert_eq!(parse_label("1e300"), None);
        assert_eq!(parse_label("-1e300"), None);
        assert_eq!(parse_label("inf"), None);
        assert_eq!(parse_label("NaN"), None);
        let err = read_labeled_urls("url,label
a.com,1e300
".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "dataset: line 2: invalid label \"1e300\"");
    }

    #[test]
    fn writes_canonical_header_and_values() {
        let rows = vec![LabeledUrl {
            url: "".into(),
            label: 0,
        }];
        let mut out = Vec::new();
        write_feature_matrix(&feature_matrix(&rows), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "url_length,num_dots,num_hyphens,num_digits,num_special_chars,has_https,\
             num_subdirs,num_params,has_ip_address,tld_length,contains_suspicious_words,label"
        );
        assert_eq!(lines.next().unwrap(), "7,0,0,0,0,0,0,0,0,0,0,0");
    }
}
