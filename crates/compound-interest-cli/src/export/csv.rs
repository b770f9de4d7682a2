use rust_decimal::Decimal;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::output::money;

/// Write `Month,Balance` rows, months numbered from 1, balances in cents.
pub fn write_series<W: Write>(writer: W, series: &[Decimal]) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record(["Month", "Balance"])?;
    for (i, balance) in series.iter().enumerate() {
        wtr.write_record([(i + 1).to_string(), money::plain(*balance)])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the series to a file, creating parent directories as needed.
pub fn write_series_file(path: &Path, series: &[Decimal]) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create '{}': {}", parent.display(), e))?;
    }
    let file = File::create(path)
        .map_err(|e| format!("Failed to create '{}': {}", path.display(), e))?;
    write_series(file, series)?;
    tracing::info!(path = %path.display(), rows = series.len(), "wrote CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_series_layout() {
        let mut buf = Vec::new();
        write_series(&mut buf, &[dec!(1104.1666), dec!(1208.7673), dec!(1313.80)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Month,Balance\n1,1104.17\n2,1208.77\n3,1313.80\n"
        );
    }

    #[test]
    fn test_empty_series_has_header_only() {
        let mut buf = Vec::new();
        write_series(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Month,Balance\n");
    }

    #[test]
    fn test_writes_file_in_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("series.csv");
        write_series_file(&path, &[dec!(1), dec!(2)]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
    }
}
