use std::collections::BTreeMap;

use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::espionage::{ActorBasis, EspionageError, Resolution};
use crate::model::{
    BuildingType, Dominion, DominionId, HistoryEvent, ImprovementType, InfoOp, InfoOpKey,
    InfoOpKind, InfoOpPayload, LandType, RealmId, Tick,
};

/// Why [`commit`] wrote nothing.
#[derive(Debug, thiserror::Error)]
pub enum CommitError {
    /// The resolution no longer applies to the stored actor.
    #[error(transparent)]
    Rejected(#[from] EspionageError),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// What [`commit`] wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Committed {
    pub history_id: i64,
    /// `Some(true)` when a new info-op row was inserted, `Some(false)` when an
    /// existing one was overwritten, `None` when the resolution carried none.
    pub info_op_created: Option<bool>,
}

/// Commit a resolution in one transaction: bill the actor, append its history
/// entry, and upsert the info-op if one was produced.
///
/// The actor row is locked first and must still hold the spy strength, spy
/// count and lock flag the resolution was computed from; otherwise the
/// transaction is rolled back with [`EspionageError::StaleResolution`]. Of two
/// resolutions taken from one snapshot, only the first to commit is billed.
/// Concurrent upserts on one info-op key are last-writer-wins with payload,
/// caster and revision always written together.
pub async fn commit(
    pool: &PgPool,
    resolution: &Resolution,
    at: Tick,
) -> Result<Committed, CommitError> {
    let actor_id = resolution.actor_id as i64;
    let mut tx = pool.begin().await?;

    let row = sqlx::query(
        "SELECT spy_strength, military_spies, locked FROM dominions WHERE id = $1 FOR UPDATE",
    )
    .bind(actor_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(EspionageError::DominionNotFound(resolution.actor_id))?;
    let stored = ActorBasis {
        spy_strength: row.try_get::<i32, _>("spy_strength")? as u32,
        military_spies: row.try_get::<i64, _>("military_spies")? as u64,
        locked: row.try_get("locked")?,
    };

    if stored != resolution.actor_basis {
        tx.rollback().await?;
        tracing::warn!(
            actor = resolution.actor_id,
            expected = ?resolution.actor_basis,
            found = ?stored,
            "stale espionage resolution refused"
        );
        return Err(EspionageError::StaleResolution {
            actor: resolution.actor_id,
        }
        .into());
    }

    let delta = &resolution.actor_delta;
    let changes = delta.changes(stored.spy_strength, stored.military_spies);
    let new_strength = stored.spy_strength.saturating_sub(delta.spy_strength_lost);
    let new_spies = stored.military_spies.saturating_sub(delta.spies_lost);

    sqlx::query("UPDATE dominions SET spy_strength = $2, military_spies = $3 WHERE id = $1")
        .bind(actor_id)
        .bind(new_strength as i32)
        .bind(new_spies as i64)
        .execute(&mut *tx)
        .await?;

    let history_id: i64 = sqlx::query_scalar(
        "INSERT INTO dominion_history (dominion_id, event, delta, created_tick) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(actor_id)
    .bind(HistoryEvent::PerformEspionageOperation.as_str())
    .bind(Json(&changes))
    .bind(at.as_u32() as i32)
    .fetch_one(&mut *tx)
    .await?;

    let info_op_created = match &resolution.info_op {
        Some(write) => {
            let created: bool = sqlx::query_scalar(
                "INSERT INTO info_ops \
                 (source_realm_id, target_dominion_id, type, source_dominion_id, data, created_tick, updated_tick, revision) \
                 VALUES ($1, $2, $3, $4, $5, $6, $6, 1) \
                 ON CONFLICT (source_realm_id, target_dominion_id, type) DO UPDATE SET \
                 source_dominion_id = EXCLUDED.source_dominion_id, \
                 data = EXCLUDED.data, \
                 updated_tick = EXCLUDED.updated_tick, \
                 revision = info_ops.revision + 1 \
                 RETURNING (xmax = 0)",
            )
            .bind(write.key.source_realm_id as i64)
            .bind(write.key.target_dominion_id as i64)
            .bind(write.key.kind.as_str())
            .bind(write.cast_by as i64)
            .bind(Json(&write.payload))
            .bind(at.as_u32() as i32)
            .fetch_one(&mut *tx)
            .await?;
            Some(created)
        }
        None => None,
    };

    tx.commit().await?;

    tracing::info!(
        actor = resolution.actor_id,
        history_id,
        ?info_op_created,
        "espionage resolution committed"
    );

    Ok(Committed {
        history_id,
        info_op_created,
    })
}

/// Read back the info-op stored under `key`, decoding its payload by type.
pub async fn fetch_info_op(pool: &PgPool, key: &InfoOpKey) -> Result<Option<InfoOp>, sqlx::Error> {
    let row = sqlx::query(
        "SELECT id, source_dominion_id, data, created_tick, updated_tick, revision FROM info_ops \
         WHERE source_realm_id = $1 AND target_dominion_id = $2 AND type = $3",
    )
    .bind(key.source_realm_id as i64)
    .bind(key.target_dominion_id as i64)
    .bind(key.kind.as_str())
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let data: serde_json::Value = row.try_get("data")?;
    let payload = InfoOpPayload::from_json(key.kind, data)
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

    Ok(Some(InfoOp {
        id: row.try_get::<i64, _>("id")? as u64,
        source_realm_id: key.source_realm_id,
        target_dominion_id: key.target_dominion_id,
        kind: key.kind,
        cast_by_dominion_id: row.try_get::<i64, _>("source_dominion_id")? as u64,
        payload,
        created_at: Tick::from_raw(row.try_get::<i32, _>("created_tick")? as u32),
        updated_at: Tick::from_raw(row.try_get::<i32, _>("updated_tick")? as u32),
        revision: row.try_get::<i64, _>("revision")? as u64,
    }))
}

/// Every info-op type a realm currently holds on `target`.
pub async fn fetch_info_op_kinds(
    pool: &PgPool,
    source_realm_id: RealmId,
    target_dominion_id: DominionId,
) -> Result<Vec<InfoOpKind>, sqlx::Error> {
    let types: Vec<String> = sqlx::query_scalar(
        "SELECT type FROM info_ops WHERE source_realm_id = $1 AND target_dominion_id = $2 \
         ORDER BY type",
    )
    .bind(source_realm_id as i64)
    .bind(target_dominion_id as i64)
    .fetch_all(pool)
    .await?;

    types
        .into_iter()
        .map(|t| InfoOpKind::try_from(t).map_err(|e| sqlx::Error::Decode(e.into())))
        .collect()
}

/// Read one dominion row back into the model.
pub async fn fetch_dominion(pool: &PgPool, id: DominionId) -> Result<Option<Dominion>, sqlx::Error> {
    let row = sqlx::query("SELECT * FROM dominions WHERE id = $1")
        .bind(id as i64)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let home: String = row.try_get("home_land_type")?;
    let home_land_type =
        LandType::try_from(home).map_err(|e| sqlx::Error::Decode(e.into()))?;
    let count = |column: &str| -> Result<u64, sqlx::Error> {
        Ok(row.try_get::<i64, _>(column)? as u64)
    };

    Ok(Some(Dominion {
        id,
        name: row.try_get("name")?,
        realm_id: count("realm_id")?,
        round_id: count("round_id")?,
        home_land_type,
        spy_strength: row.try_get::<i32, _>("spy_strength")? as u32,
        military_draftees: count("military_draftees")?,
        military_units: [
            count("military_unit1")?,
            count("military_unit2")?,
            count("military_unit3")?,
            count("military_unit4")?,
        ],
        military_spies: count("military_spies")?,
        military_wizards: count("military_wizards")?,
        land: row.try_get::<Json<BTreeMap<LandType, u64>>, _>("land")?.0,
        buildings: row.try_get::<Json<BTreeMap<BuildingType, u64>>, _>("buildings")?.0,
        improvements: row.try_get::<Json<BTreeMap<ImprovementType, u64>>, _>("improvements")?.0,
        protection_ticks: row.try_get::<i32, _>("protection_ticks")? as u32,
        locked: row.try_get("locked")?,
    }))
}
