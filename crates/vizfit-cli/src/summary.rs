use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vizfit_model::{MaxDatapoints, TypeSet};

use vizfit_cli::types::{ChartsReport, ClassifyReport, ProfileReport};

pub fn print_classification(report: &ClassifyReport) {
    let result = &report.classification;
    println!("Dataset: {}", report.source);
    println!(
        "Records: {}  Dates: {}  Ordered: {}",
        result.dataset_length,
        yes_no(result.has_date),
        yes_no(result.is_lexicographic)
    );

    let mut columns = Table::new();
    columns.set_header(vec![header_cell("#"), header_cell("Field"), header_cell("Types")]);
    apply_table_style(&mut columns);
    align_column(&mut columns, 0, CellAlignment::Right);
    for (position, types) in result.profiled_types.iter().enumerate() {
        let name = result
            .field_names
            .get(position)
            .map_or("", String::as_str);
        columns.add_row(vec![Cell::new(position), Cell::new(name), types_cell(types)]);
    }
    println!("{columns}");

    if result.charts.is_empty() {
        println!("Compatible charts: none");
    } else {
        println!("Compatible charts: {}", result.charts.join(", "));
    }

    if !report.verdicts.is_empty() {
        print_verdicts(report);
    }
}

fn print_verdicts(report: &ClassifyReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Chart"), header_cell("Verdict"), header_cell("Reason")]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for verdict in &report.verdicts {
        let (status, reason) = match &verdict.rejection {
            None => (Cell::new("OK").fg(Color::Green), dim_cell("-")),
            Some(rejection) => (Cell::new("NO").fg(Color::Red), Cell::new(rejection)),
        };
        table.add_row(vec![Cell::new(&verdict.chart), status, reason]);
    }
    println!("{table}");
}

pub fn print_profile(report: &ProfileReport) {
    println!("Dataset: {}", report.source);
    println!(
        "Records: {}  Consistent: {}  Dates: {}  Ordered: {}",
        report.records,
        yes_no(report.consistent),
        yes_no(report.has_date),
        yes_no(report.lexicographic)
    );
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Field"), header_cell("Types")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for column in &report.columns {
        table.add_row(vec![
            Cell::new(column.position),
            Cell::new(&column.name),
            types_cell(&column.types),
        ]);
    }
    println!("{table}");

    let inconsistent: Vec<&str> = report
        .inconsistent_columns()
        .map(|column| column.name.as_str())
        .collect();
    if !inconsistent.is_empty() {
        println!("Columns without a common type: {}", inconsistent.join(", "));
    }
}

pub fn print_charts(report: &ChartsReport) {
    println!("Catalog: {}", report.origin);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Chart"),
        header_cell("Records"),
        header_cell("Dates"),
        header_cell("Multiple"),
        header_cell("Ordered"),
        header_cell("Columns"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for index in 2..5 {
        align_column(&mut table, index, CellAlignment::Center);
    }
    for spec in &report.charts {
        let columns = spec
            .vistypes
            .iter()
            .map(|requirement| format!("{}: {}", requirement.name, requirement.types))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            Cell::new(&spec.title).add_attribute(Attribute::Bold),
            Cell::new(record_range(spec.min_datapoints, spec.max_datapoints)),
            flag_cell(spec.datesupport),
            flag_cell(spec.multiple_data),
            flag_cell(spec.lexical_required),
            Cell::new(columns),
        ]);
    }
    println!("{table}");
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_wide_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn record_range(min: usize, max: MaxDatapoints) -> String {
    match max {
        MaxDatapoints::Bounded(max) => format!("{min}..={max}"),
        MaxDatapoints::Unbounded => format!("{min}.."),
    }
}

fn types_cell(types: &TypeSet) -> Cell {
    if types.is_empty() {
        Cell::new("(none)").fg(Color::Red)
    } else {
        Cell::new(types)
    }
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("yes").fg(Color::Green)
    } else {
        dim_cell("-")
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}
