use anyhow::Result;
use laggard_core::stats::ReportEntry;

/// Placeholder substituted with the report rows as a JSON array
const TABLE_PLACEHOLDER: &str = "$table_json";

/// HTML template shipped with the binary; a config `template_file` overrides it
pub const EMBEDDED_TEMPLATE: &str = include_str!("report_template.html");

/// Render the ranked entries into the report HTML
///
/// The template embeds the entries verbatim as a JSON array; all table
/// building happens client-side.
pub fn render_html(template: &str, entries: &[ReportEntry]) -> Result<String> {
    let table_json = serde_json::to_string(entries)?;
    Ok(template.replace(TABLE_PLACEHOLDER, &table_json))
}
