use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::DailyEntry;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty-printed array of entries, fields named as stored.
pub(crate) fn export_json(entries: &[DailyEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(entries)?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV with a header row taken from the field names.
pub(crate) fn export_csv(entries: &[DailyEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for item in entries {
        wtr.serialize(item)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DailyEntry> {
        vec![DailyEntry {
            worker_id: "101".into(),
            name: "Ravi, Jr".into(),
            role: "Tailor".into(),
            work: "Collar".into(),
            category: "A".into(),
            target: "10".into(),
            achieved: "7.0".into(),
            entry_date: "2024-03-05".into(),
        }]
    }

    #[test]
    fn csv_has_header_and_quotes() {
        let path = std::env::temp_dir().join("effchart_unit_export.csv");
        export_csv(&sample(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("worker_id,name,role,work,category,target,achieved,entry_date")
        );
        assert_eq!(
            lines.next(),
            Some("101,\"Ravi, Jr\",Tailor,Collar,A,10,7.0,2024-03-05")
        );
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn json_round_trips() {
        let path = std::env::temp_dir().join("effchart_unit_export.json");
        export_json(&sample(), &path).unwrap();

        let back: Vec<DailyEntry> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, sample());
        std::fs::remove_file(&path).ok();
    }
}
