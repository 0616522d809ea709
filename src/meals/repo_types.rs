use serde::{Serialize, Serializer};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Raw `meals` row; `on_diet` is stored as 0/1.
#[derive(Debug, FromRow)]
pub struct MealRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub meal_date: String,
    pub meal_time: String,
    pub on_diet: i16,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub meal_date: String, // DD/MM/YYYY
    pub meal_time: String, // HH:MM
    #[serde(serialize_with = "flag_as_int")]
    pub on_diet: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<MealRow> for Meal {
    fn from(r: MealRow) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            name: r.name,
            description: r.description,
            meal_date: r.meal_date,
            meal_time: r.meal_time,
            on_diet: r.on_diet != 0,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

fn flag_as_int<S: Serializer>(flag: &bool, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u8(u8::from(*flag))
}

/// Validated, user-editable meal fields shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealFields {
    pub name: String,
    pub description: String,
    pub meal_date: String,
    pub meal_time: String,
    pub on_diet: bool,
}

impl MealFields {
    pub fn on_diet_flag(&self) -> i16 {
        i16::from(self.on_diet)
    }
}

/// Row to insert on meal creation.
#[derive(Debug, Clone)]
pub struct NewMeal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub fields: MealFields,
}

/// Per-user meal counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MealSummary {
    pub total_meals: i64,
    pub meals_on_diet: i64,
    pub meals_off_diet: i64,
}
