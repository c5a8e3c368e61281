use sqlx::PgPool;
use uuid::Uuid;

use crate::models::checklist::ProgressRow;

/// All progress rows for one user and role.
pub async fn get_progress(
    pool: &PgPool,
    user_id: &str,
    role_id: &str,
) -> Result<Vec<ProgressRow>, sqlx::Error> {
    sqlx::query_as::<_, ProgressRow>(
        "SELECT * FROM checklist_progress WHERE user_id = $1 AND role_id = $2",
    )
    .bind(user_id)
    .bind(role_id)
    .fetch_all(pool)
    .await
}

/// Flips completion for one (user, role, item) key as a single atomic upsert.
///
/// The first toggle for a key inserts the row already completed, since an
/// absent record reads as "not completed". Later toggles negate the stored
/// value, setting `completed_at` when the new state is completed and clearing
/// it otherwise. Concurrent calls for the same key serialize on the composite
/// primary key, so each commits exactly one flip and the last write wins.
pub async fn upsert_toggle(
    pool: &PgPool,
    user_id: &str,
    role_id: &str,
    item_id: Uuid,
) -> Result<ProgressRow, sqlx::Error> {
    sqlx::query_as::<_, ProgressRow>(
        r#"
        INSERT INTO checklist_progress (user_id, role_id, item_id, completed, completed_at)
        VALUES ($1, $2, $3, TRUE, now())
        ON CONFLICT (user_id, role_id, item_id) DO UPDATE SET
            completed    = NOT checklist_progress.completed,
            completed_at = CASE WHEN checklist_progress.completed THEN NULL ELSE now() END,
            updated_at   = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(role_id)
    .bind(item_id)
    .fetch_one(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    // Exercises the real upsert against Postgres. Run with:
    //   DATABASE_URL=... cargo test -- --ignored
    #[tokio::test]
    #[ignore = "needs a Postgres with db/schema.sql applied"]
    async fn toggle_twice_returns_to_original_state() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL");
        let pool = PgPoolOptions::new().connect(&url).await.unwrap();

        let user = format!("test-user-{}", Uuid::new_v4());
        let item_id = Uuid::new_v4();

        let first = upsert_toggle(&pool, &user, "sde", item_id).await.unwrap();
        assert!(first.completed);
        assert!(first.completed_at.is_some());

        let second = upsert_toggle(&pool, &user, "sde", item_id).await.unwrap();
        assert!(!second.completed);
        assert!(second.completed_at.is_none());

        // One row per key, no matter how many flips.
        let rows = get_progress(&pool, &user, "sde").await.unwrap();
        assert_eq!(rows.iter().filter(|r| r.item_id == item_id).count(), 1);
    }
}
