//! Equipment vocabulary
//!
//! Source catalogs use free-text labels ("body only", "e-z curl bar", ...).
//! Only the closed set below is ever stored; the Postgres enum `equipment_t`
//! carries the same labels.

use std::fmt;

/// Canonical equipment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Equipment {
    Bodyweight,
    Machine,
    Kettlebells,
    Dumbbells,
    Cables,
    Band,
    ExerciseBall,
    Barbell,
    MedicineBall,
    Other,
    FoamRoll,
}

/// Raw label that has no entry in the normalization table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEquipment(pub String);

impl Equipment {
    pub const ALL: [Equipment; 11] = [
        Equipment::Bodyweight,
        Equipment::Machine,
        Equipment::Kettlebells,
        Equipment::Dumbbells,
        Equipment::Cables,
        Equipment::Band,
        Equipment::ExerciseBall,
        Equipment::Barbell,
        Equipment::MedicineBall,
        Equipment::Other,
        Equipment::FoamRoll,
    ];

    /// Map a raw source label onto the vocabulary.
    ///
    /// Absent and empty labels become [`Equipment::Other`]. Anything not in
    /// the table is rejected; there is no fallback.
    ///
    /// # Example
    /// ```
    /// use exercisectl_core::Equipment;
    ///
    /// assert_eq!(Equipment::normalize(Some("e-z curl bar")), Ok(Equipment::Barbell));
    /// assert_eq!(Equipment::normalize(None), Ok(Equipment::Other));
    /// assert!(Equipment::normalize(Some("Barbell")).is_err());
    /// ```
    pub fn normalize(raw: Option<&str>) -> Result<Self, UnknownEquipment> {
        let Some(raw) = raw else {
            return Ok(Equipment::Other);
        };

        let equipment = match raw {
            "body only" => Equipment::Bodyweight,
            "machine" => Equipment::Machine,
            "kettlebells" => Equipment::Kettlebells,
            "dumbbell" => Equipment::Dumbbells,
            "cable" => Equipment::Cables,
            "bands" => Equipment::Band,
            "exercise ball" => Equipment::ExerciseBall,
            "barbell" | "e-z curl bar" => Equipment::Barbell,
            "medicine ball" => Equipment::MedicineBall,
            "other" | "" => Equipment::Other,
            "foam roll" => Equipment::FoamRoll,
            unknown => return Err(UnknownEquipment(unknown.to_owned())),
        };

        Ok(equipment)
    }

    /// Label stored in the `equipment` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Machine => "Machine",
            Equipment::Kettlebells => "Kettlebells",
            Equipment::Dumbbells => "Dumbbells",
            Equipment::Cables => "Cables",
            Equipment::Band => "Band",
            Equipment::ExerciseBall => "Exercise Ball",
            Equipment::Barbell => "Barbell",
            Equipment::MedicineBall => "Medicine Ball",
            Equipment::Other => "Other",
            Equipment::FoamRoll => "Foam roll",
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Equipment {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
