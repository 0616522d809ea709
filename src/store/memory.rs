//! In-process `Store` for handler tests.

use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use super::Store;
use crate::meals::repo_types::{Meal, MealFields, MealSummary, NewMeal};
use crate::users::repo_types::{NewUser, User};

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    meals: Mutex<Vec<Meal>>,
}

impl MemoryStore {
    fn users(&self) -> anyhow::Result<std::sync::MutexGuard<'_, Vec<User>>> {
        self.users.lock().map_err(|_| anyhow!("users lock poisoned"))
    }

    fn meals(&self) -> anyhow::Result<std::sync::MutexGuard<'_, Vec<Meal>>> {
        self.meals.lock().map_err(|_| anyhow!("meals lock poisoned"))
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, new: NewUser) -> anyhow::Result<User> {
        let mut users = self.users()?;
        if users
            .iter()
            .any(|u| u.session_id.as_deref() == Some(new.session_id.as_str()))
        {
            anyhow::bail!("duplicate session_id");
        }
        let user = User {
            id: new.id,
            name: new.name,
            session_id: Some(new.session_id),
            created_at: OffsetDateTime::now_utc(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_session(&self, session_id: &str) -> anyhow::Result<Option<User>> {
        Ok(self
            .users()?
            .iter()
            .find(|u| u.session_id.as_deref() == Some(session_id))
            .cloned())
    }

    async fn find_user(&self, user_id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(self.users()?.iter().find(|u| u.id == user_id).cloned())
    }

    async fn create_meal(&self, new: NewMeal) -> anyhow::Result<Meal> {
        if self.find_user(new.user_id).await?.is_none() {
            anyhow::bail!("meal owner {} does not exist", new.user_id);
        }
        let now = OffsetDateTime::now_utc();
        let meal = Meal {
            id: new.id,
            user_id: new.user_id,
            name: new.fields.name,
            description: new.fields.description,
            meal_date: new.fields.meal_date,
            meal_time: new.fields.meal_time,
            on_diet: new.fields.on_diet,
            created_at: now,
            updated_at: now,
        };
        self.meals()?.push(meal.clone());
        Ok(meal)
    }

    async fn list_meals(&self, user_id: Uuid) -> anyhow::Result<Vec<Meal>> {
        Ok(self
            .meals()?
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_meal(&self, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<Option<Meal>> {
        Ok(self
            .meals()?
            .iter()
            .find(|m| m.id == meal_id && m.user_id == user_id)
            .cloned())
    }

    async fn update_meal(
        &self,
        user_id: Uuid,
        meal_id: Uuid,
        fields: MealFields,
    ) -> anyhow::Result<bool> {
        let mut meals = self.meals()?;
        let Some(meal) = meals
            .iter_mut()
            .find(|m| m.id == meal_id && m.user_id == user_id)
        else {
            return Ok(false);
        };
        meal.name = fields.name;
        meal.description = fields.description;
        meal.meal_date = fields.meal_date;
        meal.meal_time = fields.meal_time;
        meal.on_diet = fields.on_diet;
        meal.updated_at = OffsetDateTime::now_utc();
        Ok(true)
    }

    async fn delete_meal(&self, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<bool> {
        let mut meals = self.meals()?;
        let before = meals.len();
        meals.retain(|m| !(m.id == meal_id && m.user_id == user_id));
        Ok(meals.len() < before)
    }

    async fn summarize_meals(&self, user_id: Uuid) -> anyhow::Result<MealSummary> {
        let meals = self.meals()?;
        let (on, off) = meals
            .iter()
            .filter(|m| m.user_id == user_id)
            .fold((0i64, 0i64), |(on, off), m| {
                if m.on_diet {
                    (on + 1, off)
                } else {
                    (on, off + 1)
                }
            });
        Ok(MealSummary {
            total_meals: on + off,
            meals_on_diet: on,
            meals_off_diet: off,
        })
    }
}
