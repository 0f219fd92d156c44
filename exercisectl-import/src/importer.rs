//! Transactional catalog import
//!
//! The emptiness check and every insert share one transaction. An early
//! return drops the `Transaction`, which rolls it back, so a failed run
//! leaves the store exactly as it found it. Only SELECT and INSERT are
//! issued; a concurrent second import fails on the `exercises` primary key
//! and rolls back.

use std::collections::HashMap;

use exercisectl_core::{Catalog, ImportPlan};
use sqlx::PgPool;
use tracing::{debug, info};

use crate::db::CatalogRepo;
use crate::error::ImportError;

/// Outcome of one import run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Exercises inserted by this run
    pub imported: usize,
    /// Rows found in `exercises` before the run; non-zero means skipped
    pub existing: i64,
    /// Distinct muscles referenced by the imported exercises
    pub muscles: usize,
    /// Link rows inserted
    pub links: usize,
}

impl ImportReport {
    pub fn skipped(&self) -> bool {
        self.existing > 0
    }
}

/// Import `catalog` unless the exercises table already has rows.
pub async fn import_catalog(pool: &PgPool, catalog: &Catalog) -> Result<ImportReport, ImportError> {
    let mut tx = pool.begin().await.map_err(ImportError::connection)?;
    let mut repo = CatalogRepo::new(&mut *tx);

    let existing = repo.count_exercises().await?;
    if existing > 0 {
        info!(existing, "exercises table already populated, skipping import");
        tx.rollback().await?;
        return Ok(ImportReport {
            existing,
            ..ImportReport::default()
        });
    }

    let plan = ImportPlan::build(catalog)?;
    info!(exercises = plan.len(), "importing exercise catalog");

    let report = write_plan(&mut repo, &plan).await?;
    tx.commit().await?;

    info!(
        exercises = report.imported,
        muscles = report.muscles,
        links = report.links,
        "import complete"
    );
    Ok(report)
}

async fn write_plan(repo: &mut CatalogRepo<'_>, plan: &ImportPlan) -> Result<ImportReport, ImportError> {
    let mut muscle_ids: HashMap<&str, i32> = HashMap::new();
    let mut report = ImportReport::default();

    for exercise in &plan.exercises {
        debug!(id = exercise.id, name = %exercise.name, "inserting exercise");
        repo.insert_exercise(exercise).await?;

        for muscle in &exercise.muscles {
            let muscle_id = match muscle_ids.get(muscle.as_str()) {
                Some(id) => *id,
                None => {
                    let id = repo.ensure_muscle(muscle).await?;
                    muscle_ids.insert(muscle.as_str(), id);
                    id
                }
            };

            if repo.link_muscle(exercise.id, muscle_id).await? {
                report.links += 1;
            }
        }

        report.imported += 1;
    }

    report.muscles = muscle_ids.len();
    Ok(report)
}
