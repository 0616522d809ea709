use crate::users::repo_types::{NewUser, User};
use sqlx::PgPool;

impl User {
    /// Find the user owning a session token.
    pub async fn find_by_session(db: &PgPool, session_id: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, session_id, created_at
            FROM users
            WHERE session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(db: &PgPool, id: uuid::Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, session_id, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user bound to a freshly issued session token.
    pub async fn create(db: &PgPool, new: &NewUser) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, session_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, session_id, created_at
            "#,
        )
        .bind(new.id)
        .bind(&new.name)
        .bind(&new.session_id)
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}
