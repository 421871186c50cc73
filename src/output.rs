use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde_json::{Map, Value};
use std::io::Write;

use crate::domain::{Cell, Table};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Aligned columns for the terminal
    #[default]
    Table,
    Csv,
    /// One object per row, keyed by header
    Json,
}

pub fn print(table: &Table, format: Format) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(table, format, &mut out)?;
    out.flush()?;
    Ok(())
}

pub fn render<W: Write>(table: &Table, format: Format, out: &mut W) -> Result<()> {
    match format {
        Format::Table => render_text(table, out),
        Format::Csv => render_csv(table, out),
        Format::Json => render_json(table, out),
    }
}

fn render_text<W: Write>(table: &Table, out: &mut W) -> Result<()> {
    let cells: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(Cell::display).collect())
        .collect();

    let widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            cells
                .iter()
                .map(|row| row[i].len())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    // Pad before colouring; escape codes would skew the widths
    let header_line: Vec<String> = table
        .headers
        .iter()
        .zip(&widths)
        .map(|(header, w)| format!("{:<w$}", header, w = *w).bold().to_string())
        .collect();
    writeln!(out, "{}", header_line.join("  ").trim_end())?;

    for (row, source) in cells.iter().zip(&table.rows) {
        let line: Vec<String> = row
            .iter()
            .zip(source)
            .zip(&widths)
            .map(|((text, cell), w)| match cell {
                Cell::Text(_) => format!("{:<w$}", text, w = *w),
                _ => format!("{:>w$}", text, w = *w),
            })
            .collect();
        writeln!(out, "{}", line.join("  ").trim_end())?;
    }

    if table.is_empty() {
        writeln!(out, "(no rows)")?;
    }
    Ok(())
}

fn render_csv<W: Write>(table: &Table, out: &mut W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(Cell::display))?;
    }
    writer.flush()?;
    Ok(())
}

fn render_json<W: Write>(table: &Table, out: &mut W) -> Result<()> {
    let rows: Vec<Value> = table
        .rows
        .iter()
        .map(|row| {
            let object: Map<String, Value> = table
                .headers
                .iter()
                .cloned()
                .zip(row.iter().map(|cell| serde_json::to_value(cell).unwrap_or(Value::Null)))
                .collect();
            Value::Object(object)
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &rows)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(["Player", "GP", "PTS"]);
        table.push(vec![Cell::text("Ann"), Cell::from(2u32), Cell::from(11.5)]);
        table.push(vec![Cell::text("Bo, Jr"), Cell::from(1u32), Cell::from(6.0)]);
        table
    }

    fn rendered(format: Format) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        render(&sample(), format, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_alignment() {
        let text = rendered(Format::Table);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Player  GP  PTS");
        assert_eq!(lines[1], "Ann      2  11.50");
        assert_eq!(lines[2], "Bo, Jr   1   6.00");
    }

    #[test]
    fn test_csv_quotes_commas() {
        let text = rendered(Format::Csv);

        assert_eq!(text, "Player,GP,PTS\nAnn,2,11.50\n\"Bo, Jr\",1,6.00\n");
    }

    #[test]
    fn test_json_rows_keyed_by_header() {
        let value: Value = serde_json::from_str(&rendered(Format::Json)).unwrap();

        assert_eq!(value[0]["Player"], "Ann");
        assert_eq!(value[0]["GP"], 2);
        assert_eq!(value[1]["PTS"], 6.0);
    }

    #[test]
    fn test_empty_table_says_so() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        render(&Table::new(["Team"]), Format::Table, &mut buf).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "Team\n(no rows)\n");
    }
}
