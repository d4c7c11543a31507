use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::World;

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Flush the world state to JSONL files in the given output directory.
///
/// Creates the output directory if it does not exist. Writes 3 files:
/// - `dominions.jsonl`: one Dominion per line
/// - `info_ops.jsonl`: one InfoOp per line, payload inline under `payload`
/// - `history.jsonl`: one HistoryEntry per line, in commit order
pub fn flush_to_jsonl(world: &World, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(
        &output_dir.join("dominions.jsonl"),
        world.dominions.values(),
    )?;
    write_jsonl(&output_dir.join("info_ops.jsonl"), world.info_ops.values())?;
    write_jsonl(&output_dir.join("history.jsonl"), world.history.iter())?;

    Ok(())
}
