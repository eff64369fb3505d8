use runbook_core::{ExecutionResult, Outcome};
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_outcomes(result: &ExecutionResult) {
    for line in outcome_lines(result) {
        println!("{line}");
    }
}

/// ACTION / OUTCOME / DETAIL lines, with the first two columns padded to
/// their widest entry. DETAIL is only filled in for successful actions.
fn outcome_lines(result: &ExecutionResult) -> Vec<String> {
    let rows: Vec<(&str, String, &str)> = result
        .outcomes
        .iter()
        .map(|o| {
            let detail = match o {
                Outcome::Ok { detail, .. } => detail.as_str(),
                Outcome::NoHandler { .. } | Outcome::Failed { .. } => "",
            };
            (o.name(), o.to_string(), detail)
        })
        .collect();

    let name_w = rows.iter().map(|r| r.0.len()).fold("ACTION".len(), usize::max);
    let outcome_w = rows.iter().map(|r| r.1.len()).fold("OUTCOME".len(), usize::max);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!("{:name_w$}  {:outcome_w$}  DETAIL", "ACTION", "OUTCOME"));
    lines.push(format!("{}  {}  ------", "-".repeat(name_w), "-".repeat(outcome_w)));
    for (name, outcome, detail) in &rows {
        let line = format!("{name:name_w$}  {outcome:outcome_w$}  {detail}");
        lines.push(line.trim_end().to_string());
    }
    lines
}
