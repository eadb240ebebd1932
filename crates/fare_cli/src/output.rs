//! Rendering command results as a table, JSON or CSV.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;

/// A flat record that can be printed in every output format.
pub trait Row: Serialize {
    const HEADERS: &'static [&'static str];

    /// One display string per header, in header order.
    fn cells(&self) -> Vec<String>;
}

pub fn write_rows<R: Row>(format: OutputFormat, rows: &[R], out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut *out);
            wtr.write_record(R::HEADERS)?;
            for row in rows {
                wtr.write_record(row.cells())?;
            }
            wtr.flush()?;
        }
        OutputFormat::Table => write_table(R::HEADERS, rows.iter().map(Row::cells), out)?,
    }
    Ok(())
}

fn write_table(
    headers: &[&str],
    rows: impl Iterator<Item = Vec<String>>,
    out: &mut impl Write,
) -> Result<()> {
    let rows: Vec<Vec<String>> = rows.collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(out, "{}", render_line(headers.iter().copied(), &widths))?;
    for row in &rows {
        writeln!(out, "{}", render_line(row.iter().map(String::as_str), &widths))?;
    }
    Ok(())
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    padded.join("  ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Pair {
        name: &'static str,
        price: String,
    }

    impl Row for Pair {
        const HEADERS: &'static [&'static str] = &["name", "price"];

        fn cells(&self) -> Vec<String> {
            vec![self.name.to_string(), self.price.clone()]
        }
    }

    fn rows() -> Vec<Pair> {
        vec![
            Pair {
                name: "auto",
                price: "₹115".to_string(),
            },
            Pair {
                name: "car",
                price: "₹1,000".to_string(),
            },
        ]
    }

    fn render(format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_rows(format, &rows(), &mut buf).expect("write rows");
        String::from_utf8(buf).expect("utf8 output")
    }

    #[test]
    fn table_aligns_columns_by_char_count() {
        let text = render(OutputFormat::Table);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines, ["name  price", "auto  ₹115", "car   ₹1,000"]);
    }

    #[test]
    fn csv_quotes_fields_with_commas() {
        let text = render(OutputFormat::Csv);
        assert_eq!(text, "name,price\nauto,₹115\ncar,\"₹1,000\"\n");
    }

    #[test]
    fn json_is_an_array_of_objects() {
        let value: serde_json::Value =
            serde_json::from_str(&render(OutputFormat::Json)).expect("valid json");
        assert_eq!(value[1]["name"], "car");
    }
}
