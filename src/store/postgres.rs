use anyhow::Context;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;
use uuid::Uuid;

use super::Store;
use crate::config::AppConfig;
use crate::meals::repo as meals;
use crate::meals::repo_types::{Meal, MealFields, MealSummary, NewMeal};
use crate::users::repo_types::{NewUser, User};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("run database migrations")?;
        info!("migrations applied");
        Ok(())
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, user: NewUser) -> anyhow::Result<User> {
        User::create(&self.pool, &user).await.context("insert user")
    }

    async fn find_user_by_session(&self, session_id: &str) -> anyhow::Result<Option<User>> {
        User::find_by_session(&self.pool, session_id)
            .await
            .context("select user by session")
    }

    async fn find_user(&self, user_id: Uuid) -> anyhow::Result<Option<User>> {
        User::find_by_id(&self.pool, user_id)
            .await
            .context("select user by id")
    }

    async fn create_meal(&self, meal: NewMeal) -> anyhow::Result<Meal> {
        meals::insert(&self.pool, &meal).await.context("insert meal")
    }

    async fn list_meals(&self, user_id: Uuid) -> anyhow::Result<Vec<Meal>> {
        meals::list_by_user(&self.pool, user_id)
            .await
            .context("list meals")
    }

    async fn find_meal(&self, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<Option<Meal>> {
        meals::find_by_id(&self.pool, user_id, meal_id)
            .await
            .context("select meal")
    }

    async fn update_meal(
        &self,
        user_id: Uuid,
        meal_id: Uuid,
        fields: MealFields,
    ) -> anyhow::Result<bool> {
        meals::update(&self.pool, user_id, meal_id, &fields)
            .await
            .context("update meal")
    }

    async fn delete_meal(&self, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<bool> {
        meals::delete(&self.pool, user_id, meal_id)
            .await
            .context("delete meal")
    }

    async fn summarize_meals(&self, user_id: Uuid) -> anyhow::Result<MealSummary> {
        meals::summarize(&self.pool, user_id)
            .await
            .context("summarize meals")
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("database pool closed");
    }
}
