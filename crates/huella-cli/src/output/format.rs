use huella_core::model::{ActionRecord, CalculationResult};

use super::OutputFormat;

pub fn format_action_list(records: &[ActionRecord], fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(records).unwrap_or_default(),
        OutputFormat::Text => format_action_list_text(records),
    }
}

fn format_action_list_text(records: &[ActionRecord]) -> String {
    if records.is_empty() {
        return "No actions recorded.\n".to_string();
    }

    let mut out = String::new();
    for r in records {
        let time = r.created_at.format("%Y-%m-%d %H:%M");
        out.push_str(&format!(
            "\u{25c6} {} {} {} km, saved {:.2} kg CO2 ({}%) [{}]  {time}\n",
            r.id.short(),
            r.mode,
            r.distance_km,
            r.saved_co2_kg,
            r.reduction_pct,
            r.user_id,
        ));
    }
    out
}

pub fn format_record(record: &ActionRecord, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(record).unwrap_or_default(),
        OutputFormat::Text => {
            let mut out = String::new();
            out.push_str(&format!("Recorded action {}\n", record.id));
            out.push_str(&format!("User:      {}\n", record.user_id));
            out.push_str(&format!("Category:  {}\n", record.category));
            out.push_str(&format!(
                "Trip:      {} km by {}\n",
                record.distance_km, record.mode
            ));
            out.push_str(&format!(
                "Saved:     {:.2} kg CO2 ({}% reduction)\n",
                record.saved_co2_kg, record.reduction_pct
            ));
            out.push_str(&format!(
                "Date:      {}\n",
                record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
            out
        }
    }
}

pub fn format_result(result: &CalculationResult, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(result).unwrap_or_default(),
        OutputFormat::Text => {
            let mut out = String::new();
            out.push_str(&format!("Baseline:  {:.2} kg CO2\n", result.baseline_co2_kg));
            out.push_str(&format!("Mode:      {:.2} kg CO2\n", result.mode_co2_kg));
            out.push_str(&format!(
                "Saved:     {:.2} kg CO2 ({}% reduction)\n",
                result.saved_co2_kg, result.reduction_pct
            ));
            out.push_str("\n--- Calculation ---\n");
            for step in &result.calculation_steps {
                out.push_str(&format!("  {step}\n"));
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use huella_core::model::ActionId;

    fn sample_record() -> ActionRecord {
        ActionRecord {
            id: ActionId("abcdef1234567890abcdef1234567890".into()),
            user_id: "maria".into(),
            category: "transporte".into(),
            mode: "bus".into(),
            distance_km: 10.0,
            saved_co2_kg: 1.6,
            reduction_pct: 76,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_list_text() {
        assert_eq!(
            format_action_list(&[], OutputFormat::Text),
            "No actions recorded.\n"
        );
    }

    #[test]
    fn test_list_text_shows_short_id_and_savings() {
        let out = format_action_list(&[sample_record()], OutputFormat::Text);
        assert!(out.contains("abcdef12"));
        assert!(out.contains("1.60 kg CO2"));
        assert!(out.contains("(76%)"));
    }

    #[test]
    fn test_list_json_parses_back() {
        let records = vec![sample_record()];
        let out = format_action_list(&records, OutputFormat::Json);
        let parsed: Vec<ActionRecord> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, records);
    }
}
