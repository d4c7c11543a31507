use std::fmt::Write as _;

use serde::Serialize;
use sqlx::PgPool;

use crate::model::{Queue, World};

/// Load an entire `World` into Postgres using COPY FROM STDIN (text format).
///
/// Order respects FK constraints: dominions → queues → history → info_ops.
/// History and info-op rows take fresh database IDs.
pub async fn load_world(pool: &PgPool, world: &World) -> Result<(), sqlx::Error> {
    // Dominions
    {
        let mut buf = String::new();
        for d in world.dominions.values() {
            let [unit1, unit2, unit3, unit4] = d.military_units;
            let _ = writeln!(
                buf,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                d.id,
                escape(&d.name),
                d.realm_id,
                d.round_id,
                d.home_land_type.as_str(),
                d.spy_strength,
                d.military_draftees,
                unit1,
                unit2,
                unit3,
                unit4,
                d.military_spies,
                d.military_wizards,
                escape(&json(&d.land)?),
                escape(&json(&d.buildings)?),
                escape(&json(&d.improvements)?),
                d.protection_ticks,
                d.locked,
            );
        }
        copy_in(pool, include_str!("../../sql/copy_dominions.sql"), &buf).await?;
    }

    // Queues
    {
        let mut buf = String::new();
        for (&id, q) in &world.queues {
            push_queue_rows(&mut buf, id, "training", &q.training);
            push_queue_rows(&mut buf, id, "units_returning", &q.units_returning);
            push_queue_rows(&mut buf, id, "construction", &q.construction);
            push_queue_rows(&mut buf, id, "exploration", &q.exploration);
            push_queue_rows(&mut buf, id, "land_incoming", &q.land_incoming);
        }
        copy_in(pool, include_str!("../../sql/copy_queues.sql"), &buf).await?;
    }

    // History
    {
        let mut buf = String::new();
        for h in &world.history {
            let _ = writeln!(
                buf,
                "{}\t{}\t{}\t{}",
                h.dominion_id,
                h.event.as_str(),
                escape(&json(&h.changes)?),
                h.created_at.as_u32(),
            );
        }
        copy_in(pool, include_str!("../../sql/copy_dominion_history.sql"), &buf).await?;
    }

    // Info ops
    {
        let mut buf = String::new();
        for op in world.info_ops.values() {
            let _ = writeln!(
                buf,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                op.source_realm_id,
                op.target_dominion_id,
                op.kind.as_str(),
                op.cast_by_dominion_id,
                escape(&json(&op.payload)?),
                op.created_at.as_u32(),
                op.updated_at.as_u32(),
                op.revision,
            );
        }
        copy_in(pool, include_str!("../../sql/copy_info_ops.sql"), &buf).await?;
    }

    Ok(())
}

fn push_queue_rows<K: Copy + Into<String>>(
    buf: &mut String,
    dominion_id: u64,
    source: &str,
    queue: &Queue<K>,
) {
    for (&resource, buckets) in queue {
        let resource: String = resource.into();
        for (hours, amount) in buckets {
            let _ = writeln!(buf, "{dominion_id}\t{source}\t{resource}\t{hours}\t{amount}");
        }
    }
}

/// Execute a COPY FROM STDIN with the given text-format payload.
async fn copy_in(pool: &PgPool, statement: &str, data: &str) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    let mut copy = conn.copy_in_raw(statement).await?;
    copy.send(data.as_bytes()).await?;
    copy.finish().await?;
    Ok(())
}

/// Escape a string for Postgres COPY text format.
/// Backslash must be escaped first, then the special whitespace characters.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize a JSONB column value.
fn json<T: Serialize + ?Sized>(value: &T) -> Result<String, sqlx::Error> {
    serde_json::to_string(value).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LandType;

    #[test]
    fn escape_handles_copy_specials() {
        assert_eq!(escape("a\tb"), "a\\tb");
        assert_eq!(escape("back\\slash"), "back\\\\slash");
        assert_eq!(escape("line\nbreak\r"), "line\\nbreak\\r");
        assert_eq!(escape("Ashfall"), "Ashfall");
    }

    #[test]
    fn queue_rows_one_per_bucket() {
        let mut queue: Queue<LandType> = Queue::new();
        queue.entry(LandType::Forest).or_default().insert(5, 3);
        queue.entry(LandType::Forest).or_default().insert(11, 4);
        let mut buf = String::new();
        push_queue_rows(&mut buf, 7, "exploration", &queue);
        assert_eq!(buf, "7\texploration\tforest\t5\t3\n7\texploration\tforest\t11\t4\n");
    }
}
