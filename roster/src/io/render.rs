//! Plain-text and JSON rendering of a derived view.

use anyhow::{Context, Result};
use minijinja::{Environment, context};

use crate::core::derive::DerivedView;
use crate::core::paginate::PageLinks;
use crate::core::state_update::ViewState;
use crate::core::types::{ALL, Column, SortDirection};
use crate::record::{Gender, Record};

const TABLE_TEMPLATE: &str = include_str!("templates/table.txt");
const COLUMN_SEPARATOR: &str = " | ";

/// Template engine wrapper around minijinja.
pub struct TableRenderer {
    env: Environment<'static>,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template("table", TABLE_TEMPLATE)
            .expect("table template should be valid");
        Self { env }
    }

    /// Render filters, the visible rows and the pagination bar.
    pub fn render(&self, view: &DerivedView, state: &ViewState) -> Result<String> {
        let header: Vec<String> = Column::ALL_COLUMNS
            .iter()
            .map(|column| header_label(*column, state))
            .collect();
        let cells: Vec<Vec<String>> = view.visible_records.iter().map(row_cells).collect();
        let widths = column_widths(&header, &cells);

        let sort = state.directive.map(|directive| {
            let direction = match directive.direction {
                SortDirection::Ascending => "ascending",
                SortDirection::Descending => "descending",
            };
            format!("{} ({})", directive.key, direction)
        });
        let mut country_options = vec![ALL.to_string()];
        country_options.extend(view.available_countries.iter().cloned());

        let header_line = pad_row(&header, &widths);
        let rule = "-".repeat(header_line.chars().count());
        let template = self.env.get_template("table")?;
        let rendered = template
            .render(context! {
                gender => state.criteria.gender.to_string(),
                country => state.criteria.country.to_string(),
                gender_options => [ALL, Gender::Male.as_str(), Gender::Female.as_str()],
                country_options => country_options,
                sort => sort,
                header => header_line,
                rule => rule,
                rows => cells.iter().map(|row| pad_row(row, &widths)).collect::<Vec<_>>(),
                links => PageLinks::new(view.current_page, view.total_pages),
                shown => view.visible_records.len(),
                filtered => view.filtered_count,
                current_page => view.current_page,
                total_pages => view.total_pages,
            })
            .context("render table template")?;
        Ok(rendered)
    }
}

/// Serialize the view as pretty JSON with a trailing newline.
pub fn render_json(view: &DerivedView) -> Result<String> {
    let mut payload = serde_json::to_string_pretty(view).context("serialize view json")?;
    payload.push('\n');
    Ok(payload)
}

/// Column label with a marker on the active sort column (`^` ascending, `v` descending).
fn header_label(column: Column, state: &ViewState) -> String {
    let active = state
        .directive
        .filter(|directive| column.sort_key() == Some(directive.key));
    match active.map(|directive| directive.direction) {
        Some(SortDirection::Ascending) => format!("{} ^", column.label()),
        Some(SortDirection::Descending) => format!("{} v", column.label()),
        None => column.label().to_string(),
    }
}

fn row_cells(record: &Record) -> Vec<String> {
    vec![
        record.id.to_string(),
        record.image.clone(),
        record.full_name(),
        record.demography(),
        record.title().unwrap_or_default().to_string(),
        record.location(),
    ]
}

fn column_widths(header: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    header
        .iter()
        .enumerate()
        .map(|(index, label)| {
            rows.iter()
                .map(|row| row[index].chars().count())
                .chain(std::iter::once(label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn pad_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ViewController;
    use crate::core::types::SortKey;
    use crate::test_support::{record, record_without_address, sample_records};

    #[test]
    fn renders_rows_filters_and_pager() {
        let mut ctl = ViewController::with_records(sample_records(25), 10);
        ctl.paginate(2);
        let rendered = TableRenderer::new()
            .render(ctl.view(), ctl.state())
            .expect("render");
        assert!(rendered.contains("Filter by Gender: All (options: All, male, female)"));
        assert!(rendered.contains(
            "Filter by Country: All (options: All, Texas, Alabama, Ohio, Mississippi)"
        ));
        assert!(rendered.contains("Previous 1 [2] 3 Next"));
        assert!(rendered.contains("Showing 10 of 25 records (page 2 of 3)"));
        assert!(!rendered.contains("Sorted by"));
    }

    #[test]
    fn marks_active_sort_column() {
        let mut ctl = ViewController::with_records(sample_records(5), 10);
        ctl.request_sort(SortKey::Age);
        ctl.request_sort(SortKey::Age);
        let rendered = TableRenderer::new()
            .render(ctl.view(), ctl.state())
            .expect("render");
        assert!(rendered.contains("Demography v"));
        assert!(rendered.contains("Sorted by: age (descending)"));
        assert!(rendered.contains("(Previous) [1] (Next)"));
    }

    #[test]
    fn empty_view_renders_placeholder() {
        let ctl = ViewController::with_records(Vec::new(), 10);
        let rendered = TableRenderer::new()
            .render(ctl.view(), ctl.state())
            .expect("render");
        assert!(rendered.contains("(no records)"));
        assert!(rendered.contains("(Previous) (Next)"));
        assert!(rendered.contains("page 1 of 0"));
    }

    #[test]
    fn malformed_record_renders_empty_cells() {
        let ctl = ViewController::with_records(
            vec![
                record(1, "Emily", 28, Gender::Female, "Mississippi"),
                record_without_address(2, "Noah"),
            ],
            10,
        );
        let rendered = TableRenderer::new()
            .render(ctl.view(), ctl.state())
            .expect("render");
        assert!(rendered.contains("Emily City, Mississippi"));
        assert!(rendered.contains("Noah Last2"));
    }

    #[test]
    fn json_uses_camel_case_fields() {
        let ctl = ViewController::with_records(sample_records(3), 10);
        let json = render_json(ctl.view()).expect("json");
        assert!(json.contains("\"visibleRecords\""));
        assert!(json.contains("\"availableCountries\""));
        assert!(json.contains("\"totalPages\": 1"));
        assert!(json.ends_with("}\n"));
    }
}
