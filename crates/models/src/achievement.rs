//! Graduate testimonials shown on the public site.
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "achievements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub pk: i32,
    #[sea_orm(unique)]
    pub id: String,
    pub student_name: String,
    pub course_completed: String,
    pub photo_url: Option<String>,
    pub completion_date: String,
    pub testimonial: Option<String>,
    pub placed_at: Option<String>,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub student_name: String,
    pub course_completed: String,
    pub photo_url: Option<String>,
    /// Free-form label such as `"March 2024"`.
    pub completion_date: String,
    pub testimonial: Option<String>,
    pub placed_at: Option<String>,
    pub created_at: String,
}

/// Fields a client may supply when creating an achievement.
/// Anything else in the request body is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementCreate {
    pub student_name: String,
    pub course_completed: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub completion_date: String,
    #[serde(default)]
    pub testimonial: Option<String>,
    #[serde(default)]
    pub placed_at: Option<String>,
}

impl Achievement {
    pub fn from_input(input: AchievementCreate, id: String, created_at: String) -> Self {
        Self {
            id,
            student_name: input.student_name,
            course_completed: input.course_completed,
            photo_url: input.photo_url,
            completion_date: input.completion_date,
            testimonial: input.testimonial,
            placed_at: input.placed_at,
            created_at,
        }
    }

    fn to_active_model(&self) -> ActiveModel {
        ActiveModel {
            pk: NotSet,
            id: Set(self.id.clone()),
            student_name: Set(self.student_name.clone()),
            course_completed: Set(self.course_completed.clone()),
            photo_url: Set(self.photo_url.clone()),
            completion_date: Set(self.completion_date.clone()),
            testimonial: Set(self.testimonial.clone()),
            placed_at: Set(self.placed_at.clone()),
            created_at: Set(self.created_at.clone()),
        }
    }
}

impl From<Model> for Achievement {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            student_name: m.student_name,
            course_completed: m.course_completed,
            photo_url: m.photo_url,
            completion_date: m.completion_date,
            testimonial: m.testimonial,
            placed_at: m.placed_at,
            created_at: m.created_at,
        }
    }
}

pub async fn insert(db: &DatabaseConnection, record: &Achievement) -> Result<(), ModelError> {
    record.to_active_model().insert(db).await?;
    Ok(())
}

/// Stored achievements in insertion order.
pub async fn list(db: &DatabaseConnection, limit: u64) -> Result<Vec<Achievement>, ModelError> {
    let rows = Entity::find()
        .order_by_asc(Column::Pk)
        .limit(limit)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(Achievement::from).collect())
}

/// Delete by public id; returns the number of rows removed.
pub async fn delete_by_public_id(db: &DatabaseConnection, id: &str) -> Result<u64, ModelError> {
    let res = Entity::delete_many()
        .filter(Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
