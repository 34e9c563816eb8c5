use std::io::Write;

use csv::{Terminator, WriterBuilder};

use super::COLUMNS;
use crate::error::Result;
use crate::model::AuthorStat;

pub fn write_csv(stats: &[AuthorStat], out: &mut dyn Write) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(COLUMNS)?;
    for s in stats {
        writer.write_record([
            s.name.as_str(),
            &s.lines.to_string(),
            &s.commits.to_string(),
            &s.files.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
