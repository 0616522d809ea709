use sqlx::PgPool;
use uuid::Uuid;

use crate::meals::repo_types::{Meal, MealFields, MealRow, MealSummary, NewMeal};

const MEAL_COLUMNS: &str =
    "id, user_id, name, description, meal_date, meal_time, on_diet, created_at, updated_at";

pub async fn insert(db: &PgPool, meal: &NewMeal) -> anyhow::Result<Meal> {
    let sql = format!(
        r#"
        INSERT INTO meals (id, user_id, name, description, meal_date, meal_time, on_diet)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {MEAL_COLUMNS}
        "#
    );
    let row = sqlx::query_as::<_, MealRow>(&sql)
        .bind(meal.id)
        .bind(meal.user_id)
        .bind(&meal.fields.name)
        .bind(&meal.fields.description)
        .bind(&meal.fields.meal_date)
        .bind(&meal.fields.meal_time)
        .bind(meal.fields.on_diet_flag())
        .fetch_one(db)
        .await?;
    Ok(row.into())
}

pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Meal>> {
    let sql = format!(
        r#"
        SELECT {MEAL_COLUMNS}
        FROM meals
        WHERE user_id = $1
        ORDER BY seq ASC
        "#
    );
    let rows = sqlx::query_as::<_, MealRow>(&sql)
        .bind(user_id)
        .fetch_all(db)
        .await?;
    Ok(rows.into_iter().map(Meal::from).collect())
}

pub async fn find_by_id(db: &PgPool, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<Option<Meal>> {
    let sql = format!(
        r#"
        SELECT {MEAL_COLUMNS}
        FROM meals
        WHERE id = $1 AND user_id = $2
        "#
    );
    let row = sqlx::query_as::<_, MealRow>(&sql)
        .bind(meal_id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;
    Ok(row.map(Meal::from))
}

/// Replaces every editable field; `created_at` is left alone. Returns whether a row matched.
pub async fn update(
    db: &PgPool,
    user_id: Uuid,
    meal_id: Uuid,
    fields: &MealFields,
) -> anyhow::Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE meals
        SET name = $3,
            description = $4,
            meal_date = $5,
            meal_time = $6,
            on_diet = $7,
            updated_at = now()
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(meal_id)
    .bind(user_id)
    .bind(&fields.name)
    .bind(&fields.description)
    .bind(&fields.meal_date)
    .bind(&fields.meal_time)
    .bind(fields.on_diet_flag())
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(db: &PgPool, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM meals
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(meal_id)
    .bind(user_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn summarize(db: &PgPool, user_id: Uuid) -> anyhow::Result<MealSummary> {
    let summary = sqlx::query_as::<_, MealSummary>(
        r#"
        SELECT COUNT(*)                                AS total_meals,
               COUNT(*) FILTER (WHERE on_diet = 1)     AS meals_on_diet,
               COUNT(*) FILTER (WHERE on_diet = 0)     AS meals_off_diet
        FROM meals
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(db)
    .await?;
    Ok(summary)
}
