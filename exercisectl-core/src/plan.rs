//! Import plan: the rows a catalog turns into.
//!
//! Building the plan assigns ids and normalizes equipment without touching
//! the database, so the importer and `--dry-run` share one code path.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::equipment::{Equipment, UnknownEquipment};
use crate::error::{CatalogError, Result};

/// One exercise ready to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedExercise {
    /// 1-based position in the source list
    pub id: i32,
    pub name: String,
    pub instructions: Vec<String>,
    pub equipment: Equipment,
    /// Primary then secondary muscles, duplicates kept
    pub muscles: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportPlan {
    pub exercises: Vec<PlannedExercise>,
}

impl ImportPlan {
    /// Assign ids by position and normalize equipment.
    ///
    /// Stops at the first exercise whose equipment is not in the
    /// normalization table.
    pub fn build(catalog: &Catalog) -> Result<Self> {
        let mut exercises = Vec::with_capacity(catalog.len());

        for (index, record) in catalog.exercises.iter().enumerate() {
            let id = i32::try_from(index + 1).map_err(|_| {
                CatalogError::malformed(
                    "catalog document",
                    format!("too many exercises for integer ids ({})", catalog.len()),
                )
            })?;

            let equipment = Equipment::normalize(record.equipment.as_deref())
                .map_err(|UnknownEquipment(value)| CatalogError::unknown_equipment(value, index))?;

            exercises.push(PlannedExercise {
                id,
                name: record.name.clone(),
                instructions: record.instructions.clone(),
                equipment,
                muscles: record.muscles().map(str::to_owned).collect(),
            });
        }

        Ok(Self { exercises })
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Muscle names in order of first appearance.
    pub fn distinct_muscles(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.exercises
            .iter()
            .flat_map(|exercise| exercise.muscles.iter())
            .map(String::as_str)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Exercise/muscle pairs as they end up in `exercise_muscle`.
    pub fn links(&self) -> Vec<(i32, &str)> {
        let mut seen = HashSet::new();
        self.exercises
            .iter()
            .flat_map(|exercise| {
                exercise
                    .muscles
                    .iter()
                    .map(move |muscle| (exercise.id, muscle.as_str()))
            })
            .filter(|pair| seen.insert(*pair))
            .collect()
    }
}
