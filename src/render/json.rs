use std::io::Write;

use crate::error::Result;
use crate::model::AuthorStat;

pub fn write_json(stats: &[AuthorStat], out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer(&mut *out, stats)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_json_lines(stats: &[AuthorStat], out: &mut dyn Write) -> Result<()> {
    for s in stats {
        serde_json::to_writer(&mut *out, s)?;
        writeln!(out)?;
    }
    Ok(())
}
