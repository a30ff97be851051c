//! Downloadable HTML report

use chrono::{DateTime, Utc};

use super::{stats, SharedStore};
use crate::{
    error::AppResult,
    models::{
        report::{AmountEntry, ExportKind, RevenueEntry, StatEntry},
        UserSession,
    },
};

const REPORT_TITLE: &str = "Equipment Rental Report";

/// A rendered report ready to be served as an attachment
#[derive(Debug, Clone)]
pub struct ReportExport {
    pub file_name: String,
    pub html: String,
}

/// Figures a report is rendered from
#[derive(Debug, Clone)]
pub struct ReportData {
    pub exported_at: DateTime<Utc>,
    pub user_name: String,
    pub user_role: String,
    pub equipment_by_category: Vec<StatEntry>,
    pub revenue_by_month: Vec<RevenueEntry>,
    pub maintenance_cost_by_type: Vec<AmountEntry>,
}

#[derive(Clone)]
pub struct ReportsService {
    store: SharedStore,
}

impl ReportsService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn export(
        &self,
        kind: ExportKind,
        user: &UserSession,
        now: DateTime<Utc>,
    ) -> AppResult<ReportExport> {
        let data = {
            let store = self.store.read().await;
            ReportData {
                exported_at: now,
                user_name: user.name.clone(),
                user_role: user.role.to_string(),
                equipment_by_category: stats::equipment_by_category(store.equipment()),
                revenue_by_month: stats::revenue_by_month(store.rentals(), now.date_naive()),
                maintenance_cost_by_type: stats::maintenance_cost_by_type(store.maintenance()),
            }
        };

        tracing::info!(kind = kind.as_str(), user_id = %user.id, "Exporting report");
        Ok(ReportExport {
            file_name: file_name(kind, now),
            html: render_report(kind, &data),
        })
    }
}

pub fn file_name(kind: ExportKind, now: DateTime<Utc>) -> String {
    format!("Report-{}-{}.html", kind.as_str(), now.format("%Y-%m-%d"))
}

/// Render the sections selected by `kind` as a standalone HTML document
pub fn render_report(kind: ExportKind, data: &ReportData) -> String {
    let mut sections = Vec::new();

    if kind.includes(ExportKind::Equipment) {
        let rows = data
            .equipment_by_category
            .iter()
            .map(|e| (e.label.clone(), e.value.to_string()));
        sections.push(section("Equipment by Category", ("Category", "Count"), rows));
    }
    if kind.includes(ExportKind::Revenue) {
        let rows = data
            .revenue_by_month
            .iter()
            .map(|e| (e.month.clone(), format!("${}", e.revenue)));
        sections.push(section("Revenue Trend (Last 6 Months)", ("Month", "Revenue"), rows));
    }
    if kind.includes(ExportKind::Maintenance) {
        let rows = data
            .maintenance_cost_by_type
            .iter()
            .map(|e| (e.label.clone(), format!("${}", e.amount)));
        sections.push(section("Maintenance Costs by Type", ("Type", "Cost"), rows));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: Arial, sans-serif; margin: 20px; }}
.header {{ text-align: center; margin-bottom: 30px; }}
.section {{ margin-bottom: 25px; }}
.table {{ width: 100%; border-collapse: collapse; margin-top: 10px; }}
.table th, .table td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}
.table th {{ background-color: #f2f2f2; }}
</style>
</head>
<body>
<div class="header">
<h1>{title}</h1>
<p>Generated on: {date}</p>
<p>Exported by: {user} ({role})</p>
</div>
{sections}
</body>
</html>
"#,
        title = REPORT_TITLE,
        date = data.exported_at.format("%Y-%m-%d"),
        user = escape(&data.user_name),
        role = escape(&data.user_role),
        sections = sections.join("\n"),
    )
}

fn section(
    heading: &str,
    columns: (&str, &str),
    rows: impl Iterator<Item = (String, String)>,
) -> String {
    let rows: String = rows
        .map(|(label, value)| {
            format!("<tr><td>{}</td><td>{}</td></tr>\n", escape(&label), escape(&value))
        })
        .collect();
    format!(
        concat!(
            "<div class=\"section\">\n<h2>{}</h2>\n<table class=\"table\">\n",
            "<tr><th>{}</th><th>{}</th></tr>\n{}</table>\n</div>",
        ),
        heading, columns.0, columns.1, rows
    )
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn data() -> ReportData {
        ReportData {
            exported_at: "2025-06-10T12:00:00Z".parse().unwrap(),
            user_name: "Admin <User>".into(),
            user_role: "Admin".into(),
            equipment_by_category: vec![StatEntry {
                label: "Heavy Machinery".into(),
                value: 3,
            }],
            revenue_by_month: vec![RevenueEntry {
                month: "Jun 2025".into(),
                year: 2025,
                month_number: 6,
                revenue: Decimal::from(500),
            }],
            maintenance_cost_by_type: vec![AmountEntry {
                label: "Routine Check".into(),
                amount: Decimal::from(150),
            }],
        }
    }

    #[test]
    fn test_file_name_uses_kind_and_date() {
        let now = "2025-06-10T23:59:00Z".parse().unwrap();
        assert_eq!(file_name(ExportKind::Revenue, now), "Report-revenue-2025-06-10.html");
    }

    #[test]
    fn test_all_includes_every_section() {
        let html = render_report(ExportKind::All, &data());
        assert!(html.contains("Equipment by Category"));
        assert!(html.contains("<td>Jun 2025</td><td>$500</td>"));
        assert!(html.contains("<td>Routine Check</td><td>$150</td>"));
    }

    #[test]
    fn test_single_section_export() {
        let html = render_report(ExportKind::Maintenance, &data());
        assert!(html.contains("Maintenance Costs by Type"));
        assert!(!html.contains("Equipment by Category"));
        assert!(!html.contains("Revenue Trend"));
    }

    #[test]
    fn test_values_are_escaped() {
        let html = render_report(ExportKind::Equipment, &data());
        assert!(html.contains("Exported by: Admin &lt;User&gt; (Admin)"));
        assert!(!html.contains("<User>"));
    }
}
