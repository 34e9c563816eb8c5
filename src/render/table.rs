use std::io::Write;

use unicode_width::UnicodeWidthStr;

use super::COLUMNS;
use crate::error::Result;
use crate::model::AuthorStat;

/// Spaces after the widest cell of each column.
const PADDING: usize = 1;

fn pad(out: &mut dyn Write, cell: &str, width: usize) -> Result<()> {
    let fill = width + PADDING - cell.width();
    write!(out, "{cell}{:fill$}", "")?;
    Ok(())
}

/// Left-aligned columns separated by single spaces. The trailing `Files`
/// column is aligned only in the header, where it is padded like the rest.
pub fn write_table(stats: &[AuthorStat], out: &mut dyn Write) -> Result<()> {
    let rows: Vec<[String; 4]> = stats
        .iter()
        .map(|s| {
            [
                s.name.clone(),
                s.lines.to_string(),
                s.commits.to_string(),
                s.files.to_string(),
            ]
        })
        .collect();

    let mut widths = [0usize; 3];
    for (i, width) in widths.iter_mut().enumerate() {
        *width = rows
            .iter()
            .map(|r| r[i].width())
            .chain(std::iter::once(COLUMNS[i].width()))
            .max()
            .unwrap_or(0);
    }

    for (header, width) in COLUMNS.iter().zip(widths) {
        pad(out, header, width)?;
    }
    pad(out, COLUMNS[3], COLUMNS[3].width())?;
    writeln!(out)?;

    for row in &rows {
        for (cell, width) in row.iter().zip(widths) {
            pad(out, cell, width)?;
        }
        writeln!(out, "{}", row[3])?;
    }
    Ok(())
}
