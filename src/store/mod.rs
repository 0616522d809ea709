use async_trait::async_trait;
use uuid::Uuid;

use crate::meals::repo_types::{Meal, MealFields, MealSummary, NewMeal};
use crate::users::repo_types::{NewUser, User};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

/// Storage capability injected into handlers. Every meal operation takes the
/// owning user's id and must never touch rows belonging to someone else.
#[async_trait]
pub trait Store: Send + Sync {
    async fn create_user(&self, user: NewUser) -> anyhow::Result<User>;
    async fn find_user_by_session(&self, session_id: &str) -> anyhow::Result<Option<User>>;
    async fn find_user(&self, user_id: Uuid) -> anyhow::Result<Option<User>>;

    async fn create_meal(&self, meal: NewMeal) -> anyhow::Result<Meal>;
    async fn list_meals(&self, user_id: Uuid) -> anyhow::Result<Vec<Meal>>;
    async fn find_meal(&self, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<Option<Meal>>;
    /// `Ok(false)` when no meal with that id is owned by `user_id`.
    async fn update_meal(
        &self,
        user_id: Uuid,
        meal_id: Uuid,
        fields: MealFields,
    ) -> anyhow::Result<bool>;
    /// `Ok(false)` when no meal with that id is owned by `user_id`.
    async fn delete_meal(&self, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<bool>;
    async fn summarize_meals(&self, user_id: Uuid) -> anyhow::Result<MealSummary>;

    async fn close(&self) {}
}
