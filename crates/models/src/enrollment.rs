//! Enrollment enquiries submitted from the public form.
use sea_orm::{entity::prelude::*, sea_query::Expr, ActiveValue::NotSet, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Status every new enrollment starts with.
pub const DEFAULT_STATUS: &str = "pending";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub pk: i32,
    #[sea_orm(unique)]
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub qualification: String,
    pub course: String,
    pub message: Option<String>,
    pub created_at: String,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub qualification: String,
    pub course: String,
    pub message: Option<String>,
    pub created_at: String,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentCreate {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub qualification: String,
    pub course: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl Enrollment {
    pub fn from_input(input: EnrollmentCreate, id: String, created_at: String) -> Self {
        Self {
            id,
            full_name: input.full_name,
            email: input.email,
            phone: input.phone,
            address: input.address,
            qualification: input.qualification,
            course: input.course,
            message: input.message,
            created_at,
            status: DEFAULT_STATUS.to_string(),
        }
    }

    fn to_active_model(&self) -> ActiveModel {
        ActiveModel {
            pk: NotSet,
            id: Set(self.id.clone()),
            full_name: Set(self.full_name.clone()),
            email: Set(self.email.clone()),
            phone: Set(self.phone.clone()),
            address: Set(self.address.clone()),
            qualification: Set(self.qualification.clone()),
            course: Set(self.course.clone()),
            message: Set(self.message.clone()),
            created_at: Set(self.created_at.clone()),
            status: Set(self.status.clone()),
        }
    }
}

impl From<Model> for Enrollment {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            full_name: m.full_name,
            email: m.email,
            phone: m.phone,
            address: m.address,
            qualification: m.qualification,
            course: m.course,
            message: m.message,
            created_at: m.created_at,
            status: m.status,
        }
    }
}

pub async fn insert(db: &DatabaseConnection, record: &Enrollment) -> Result<(), ModelError> {
    record.to_active_model().insert(db).await?;
    Ok(())
}

/// Stored enrollments in insertion order.
pub async fn list(db: &DatabaseConnection, limit: u64) -> Result<Vec<Enrollment>, ModelError> {
    let rows = Entity::find()
        .order_by_asc(Column::Pk)
        .limit(limit)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(Enrollment::from).collect())
}

/// Overwrite `status` in place; returns the number of matched rows.
pub async fn set_status(db: &DatabaseConnection, id: &str, status: &str) -> Result<u64, ModelError> {
    let res = Entity::update_many()
        .col_expr(Column::Status, Expr::value(status))
        .filter(Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
