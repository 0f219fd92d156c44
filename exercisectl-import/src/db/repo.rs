//! Catalog repository
//!
//! Every statement runs on the caller's connection, normally the import
//! transaction. Muscles and links rely on `ON CONFLICT DO NOTHING`, so
//! repeating them is not an error.

use exercisectl_core::PlannedExercise;
use sqlx::PgConnection;

pub struct CatalogRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> CatalogRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    pub async fn count_exercises(&mut self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM exercises")
            .fetch_one(&mut *self.conn)
            .await
    }

    /// Insert the exercise row and its name row.
    pub async fn insert_exercise(&mut self, exercise: &PlannedExercise) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO exercises (id, instructions, equipment, visuals_id)
            VALUES ($1, $2, $3::equipment_t, NULL)
            "#,
        )
        .bind(exercise.id)
        .bind(&exercise.instructions)
        .bind(exercise.equipment.as_str())
        .execute(&mut *self.conn)
        .await?;

        sqlx::query("INSERT INTO exercise_names (name, exercise_id) VALUES ($1, $2)")
            .bind(&exercise.name)
            .bind(exercise.id)
            .execute(&mut *self.conn)
            .await?;

        Ok(())
    }

    /// Insert the muscle if absent and return its id.
    pub async fn ensure_muscle(&mut self, name: &str) -> Result<i32, sqlx::Error> {
        sqlx::query("INSERT INTO muscles (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(name)
            .execute(&mut *self.conn)
            .await?;

        sqlx::query_scalar("SELECT id FROM muscles WHERE name = $1")
            .bind(name)
            .fetch_one(&mut *self.conn)
            .await
    }

    /// Link an exercise to a muscle. Returns false if the pair already existed.
    pub async fn link_muscle(&mut self, exercise_id: i32, muscle_id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO exercise_muscle (exercise_id, muscle_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(exercise_id)
        .bind(muscle_id)
        .execute(&mut *self.conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
