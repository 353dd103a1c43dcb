use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

const SLICE_COLORS: [&str; 4] = ["#1A1EB2", "#510FAD", "#0A64A4", "#3E94D1"];

/// One record of the backing file. Only the fields the views read are
/// typed; anything else in the record is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Value,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub transaction_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sum: f64,
    #[serde(default)]
    pub details: Option<Value>,
}

impl Transaction {
    pub fn id_text(&self) -> String {
        match &self.id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_expense(&self) -> bool {
        self.sum < 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub day: String,
    pub items: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub percentage: f64,
}

/// `GET /api/transactions` answers either the list or `{"error": ...}`.
pub fn parse_payload(value: Value) -> Result<Vec<Transaction>, String> {
    if let Some(msg) = value.get("error").and_then(Value::as_str) {
        return Err(msg.to_string());
    }
    serde_json::from_value(value).map_err(|e| format!("Parse JSON error: {e}"))
}

pub fn type_label(kind: &str) -> String {
    match kind {
        "autoUp" => "Auto bump".to_string(),
        "viewing" => "Viewing".to_string(),
        "stick" => "Pin".to_string(),
        "replenishing" => "Top-up".to_string(),
        "commission" => "Commission".to_string(),
        other => other.to_string(),
    }
}

/// `3240.5` -> `3 240.50 ₽`
pub fn format_money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    format!("{grouped}.{frac_part} ₽")
}

pub fn format_amount(amount: f64) -> String {
    let sign = if amount < 0.0 { '-' } else { '+' };
    format!("{sign} {}", format_money(amount))
}

pub fn day_of(date: &str) -> &str {
    date.get(..10).unwrap_or(date)
}

pub fn time_of(date: &str) -> &str {
    date.get(11..16).unwrap_or("")
}

pub fn format_date_time(date: &str) -> String {
    match time_of(date) {
        "" => day_of(date).to_string(),
        time => format!("{} {}", day_of(date), time),
    }
}

/// Newest day first, records keep their file order within a day.
pub fn group_by_day(transactions: &[Transaction]) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for t in transactions {
        let day = day_of(&t.date);
        match groups.iter_mut().find(|g| g.day == day) {
            Some(group) => group.items.push(t.clone()),
            None => groups.push(DayGroup {
                day: day.to_string(),
                items: vec![t.clone()],
            }),
        }
    }
    groups.sort_by(|a, b| b.day.cmp(&a.day));
    groups
}

/// Expense totals per type label, largest first.
pub fn expense_breakdown(transactions: &[Transaction]) -> Vec<Slice> {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for t in transactions.iter().filter(|t| t.is_expense()) {
        *totals.entry(type_label(&t.transaction_type)).or_default() += t.sum.abs();
    }

    let total: f64 = totals.values().sum();
    let mut slices: Vec<Slice> = totals
        .into_iter()
        .map(|(label, value)| Slice {
            label,
            value,
            percentage: value / total * 100.0,
        })
        .collect();

    slices.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });
    slices
}

pub fn slice_color(index: usize) -> &'static str {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}

/// CSS `conic-gradient` drawing the slices as a pie.
pub fn conic_gradient(slices: &[Slice]) -> String {
    let mut start = 0.0;
    let stops: Vec<String> = slices
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let end = start + s.percentage;
            let stop = format!("{} {:.1}% {:.1}%", slice_color(i), start, end);
            start = end;
            stop
        })
        .collect();

    format!("conic-gradient({})", stops.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tx(id: i64, date: &str, kind: &str, sum: f64) -> Transaction {
        Transaction {
            id: json!(id),
            date: date.to_string(),
            transaction_type: kind.to_string(),
            description: format!("tx {id}"),
            sum,
            details: None,
        }
    }

    #[test]
    fn parses_list_payload() {
        let value = json!([
            {"id": 1, "date": "2024-03-01T09:15:00", "transactionType": "stick", "description": "Pin ad", "sum": -120},
            {"id": "b-2", "sum": 50.5, "details": {"card": "*1234"}}
        ]);
        let list = parse_payload(value).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].transaction_type, "stick");
        assert_eq!(list[0].sum, -120.0);
        assert_eq!(list[1].id_text(), "b-2");
        assert_eq!(list[1].details, Some(json!({"card": "*1234"})));
    }

    #[test]
    fn error_payload_becomes_err() {
        let value = json!({"error": "failed to read transactions.json: not found"});
        let err = parse_payload(value).unwrap_err();
        assert_eq!(err, "failed to read transactions.json: not found");
    }

    #[test]
    fn unexpected_payload_is_parse_error() {
        let err = parse_payload(json!({"items": []})).unwrap_err();
        assert!(err.starts_with("Parse JSON error"));
    }

    #[test]
    fn labels_known_types() {
        assert_eq!(type_label("autoUp"), "Auto bump");
        assert_eq!(type_label("commission"), "Commission");
        assert_eq!(type_label("mystery"), "mystery");
    }

    #[test]
    fn money_groups_thousands() {
        assert_eq!(format_money(85000.0), "85 000.00 ₽");
        assert_eq!(format_money(-3240.5), "3 240.50 ₽");
        assert_eq!(format_money(1234567.891), "1 234 567.89 ₽");
        assert_eq!(format_money(12.0), "12.00 ₽");
    }

    #[test]
    fn amount_carries_sign() {
        assert_eq!(format_amount(-120.0), "- 120.00 ₽");
        assert_eq!(format_amount(412.75), "+ 412.75 ₽");
        assert_eq!(format_amount(0.0), "+ 0.00 ₽");
    }

    #[test]
    fn splits_date_and_time() {
        assert_eq!(day_of("2024-03-01T09:15:00"), "2024-03-01");
        assert_eq!(time_of("2024-03-01T09:15:00"), "09:15");
        assert_eq!(format_date_time("2024-03-01T09:15:00"), "2024-03-01 09:15");
        assert_eq!(format_date_time("2024-03-01"), "2024-03-01");
        assert_eq!(time_of(""), "");
    }

    #[test]
    fn groups_newest_day_first() {
        let list = vec![
            tx(1, "2024-03-01T09:00:00", "viewing", -10.0),
            tx(2, "2024-03-02T10:00:00", "viewing", -20.0),
            tx(3, "2024-03-01T18:00:00", "replenishing", 500.0),
        ];
        let groups = group_by_day(&list);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].day, "2024-03-02");
        assert_eq!(groups[1].day, "2024-03-01");
        let ids: Vec<String> = groups[1].items.iter().map(Transaction::id_text).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn breakdown_counts_expenses_only() {
        let list = vec![
            tx(1, "2024-03-01", "viewing", -30.0),
            tx(2, "2024-03-01", "stick", -50.0),
            tx(3, "2024-03-01", "viewing", -20.0),
            tx(4, "2024-03-01", "replenishing", 1000.0),
        ];
        let slices = expense_breakdown(&list);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].value, 50.0);
        assert_eq!(slices[1].value, 50.0);
        // equal totals fall back to label order
        assert_eq!(slices[0].label, "Pin");
        assert_eq!(slices[1].label, "Viewing");
        assert_eq!(slices[0].percentage, 50.0);
    }

    #[test]
    fn breakdown_without_expenses_is_empty() {
        let list = vec![tx(1, "2024-03-01", "replenishing", 10.0)];
        assert!(expense_breakdown(&list).is_empty());
    }

    #[test]
    fn gradient_stacks_slices() {
        let slices = vec![
            Slice { label: "Pin".into(), value: 75.0, percentage: 75.0 },
            Slice { label: "Viewing".into(), value: 25.0, percentage: 25.0 },
        ];
        assert_eq!(
            conic_gradient(&slices),
            "conic-gradient(#1A1EB2 0.0% 75.0%, #510FAD 75.0% 100.0%)"
        );
        assert_eq!(slice_color(5), "#510FAD");
    }
}
