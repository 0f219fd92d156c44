pub mod catalog;
pub mod equipment;
pub mod error;
pub mod plan;

pub use catalog::{Catalog, ExerciseRecord};
pub use equipment::{Equipment, UnknownEquipment};
pub use error::{CatalogError, Result};
pub use plan::{ImportPlan, PlannedExercise};
