use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date, Time};

use crate::error::AppError;
use crate::meals::repo_types::{Meal, MealFields, MealSummary};

/// Body of `POST /meals` and `PUT /meals/:id`. Every field is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRequest {
    pub name: String,
    pub description: String,
    pub meal_date: String, // DD/MM/YYYY
    pub meal_time: String, // HH:MM
    pub on_diet: bool,
}

impl MealRequest {
    /// Checks every field; the strings are kept exactly as submitted.
    pub fn into_fields(self) -> Result<MealFields, AppError> {
        non_empty("name", &self.name)?;
        non_empty("description", &self.description)?;

        Date::parse(
            self.meal_date.trim(),
            format_description!("[day]/[month]/[year]"),
        )
        .map_err(|_| AppError::validation("mealDate must be a valid date in DD/MM/YYYY format"))?;

        Time::parse(self.meal_time.trim(), format_description!("[hour]:[minute]"))
            .map_err(|_| AppError::validation("mealTime must be a valid time in HH:MM format"))?;

        Ok(MealFields {
            name: self.name,
            description: self.description,
            meal_date: self.meal_date,
            meal_time: self.meal_time,
            on_diet: self.on_diet,
        })
    }
}

fn non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct MealListResponse {
    pub meals: Vec<Meal>,
}

#[derive(Debug, Serialize)]
pub struct MealResponse {
    pub meal: Meal,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: MealSummary,
}
