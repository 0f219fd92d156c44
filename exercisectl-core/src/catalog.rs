use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::{CatalogError, Result};

/// One exercise as it appears in the source document.
///
/// Extra keys in the source (`force`, `level`, `images`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecord {
    pub name: String,
    pub primary_muscles: Vec<String>,
    pub secondary_muscles: Vec<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    pub instructions: Vec<String>,
}

impl ExerciseRecord {
    /// Primary muscles followed by secondary muscles, duplicates kept.
    pub fn muscles(&self) -> impl Iterator<Item = &str> {
        self.primary_muscles
            .iter()
            .chain(self.secondary_muscles.iter())
            .map(String::as_str)
    }
}

/// Parsed catalog document: `{ "exercises": [ ... ] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    pub exercises: Vec<ExerciseRecord>,
}

impl Catalog {
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input)
            .map_err(|err| CatalogError::malformed("catalog document", err.to_string()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader)
            .map_err(|err| CatalogError::malformed("catalog document", err.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| CatalogError::io(path, err))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|err| CatalogError::malformed(path.display().to_string(), err.to_string()))
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PUSH_UP: &str = r#"{"exercises":[{"name":"Push-up","primaryMuscles":["Chest"],"secondaryMuscles":["Triceps"],"equipment":"body only","instructions":["Step 1","Step 2"]}]}"#;

    #[test]
    fn parses_single_exercise() {
        let catalog = Catalog::from_json(PUSH_UP).unwrap();
        assert_eq!(catalog.len(), 1);

        let record = &catalog.exercises[0];
        assert_eq!(record.name, "Push-up");
        assert_eq!(record.equipment.as_deref(), Some("body only"));
        assert_eq!(record.instructions, vec!["Step 1", "Step 2"]);
        assert_eq!(record.muscles().collect::<Vec<_>>(), vec!["Chest", "Triceps"]);
    }

    #[test]
    fn equipment_may_be_null_or_missing() {
        let input = r#"{"exercises":[
            {"name":"A","primaryMuscles":[],"secondaryMuscles":[],"equipment":null,"instructions":[]},
            {"name":"B","primaryMuscles":[],"secondaryMuscles":[],"instructions":[]}
        ]}"#;
        let catalog = Catalog::from_json(input).unwrap();
        assert!(catalog.exercises.iter().all(|e| e.equipment.is_none()));
    }

    #[test]
    fn ignores_extra_fields() {
        let input = r#"{"exercises":[{"name":"A","force":"push","level":"beginner","images":["a.jpg"],
            "primaryMuscles":["chest"],"secondaryMuscles":[],"equipment":"machine","instructions":["go"]}]}"#;
        assert_eq!(Catalog::from_json(input).unwrap().len(), 1);
    }

    #[test]
    fn muscles_keep_duplicates_in_order() {
        let record = ExerciseRecord {
            name: "Dip".into(),
            primary_muscles: vec!["triceps".into(), "chest".into()],
            secondary_muscles: vec!["triceps".into()],
            equipment: None,
            instructions: vec![],
        };
        assert_eq!(
            record.muscles().collect::<Vec<_>>(),
            vec!["triceps", "chest", "triceps"]
        );
    }

    #[test]
    fn rejects_missing_top_level_list() {
        let err = Catalog::from_json(r#"{"items":[]}"#).unwrap_err();
        assert!(err.is_malformed_input());
        assert!(err.to_string().contains("exercises"));
    }

    #[test]
    fn rejects_missing_record_field() {
        let input = r#"{"exercises":[{"name":"A","primaryMuscles":[],"equipment":null,"instructions":[]}]}"#;
        let err = Catalog::from_json(input).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedInput { .. }));
        assert!(err.to_string().contains("secondaryMuscles"));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(Catalog::from_json("{not json").unwrap_err().is_malformed_input());
        assert!(Catalog::from_reader(&b""[..]).unwrap_err().is_malformed_input());
    }

    #[test]
    fn reads_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", PUSH_UP).unwrap();
        file.flush().unwrap();

        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.exercises[0].name, "Push-up");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::from_path(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
