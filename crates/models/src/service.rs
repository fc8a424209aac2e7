//! Repair services offered by the academy. Read-only over HTTP.
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub pk: i32,
    #[sea_orm(unique)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub featured: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Icon-name token understood by the frontend (e.g. `"wrench"`).
    pub icon: String,
    #[serde(default)]
    pub featured: bool,
}

impl From<Model> for Service {
    fn from(m: Model) -> Self {
        Self { id: m.id, name: m.name, description: m.description, icon: m.icon, featured: m.featured }
    }
}

impl Service {
    fn new(id: &str, name: &str, description: &str, icon: &str, featured: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            featured,
        }
    }
}

/// Served in place of stored rows while the `services` table is empty.
pub fn fallback() -> Vec<Service> {
    vec![
        Service::new("1", "Basic Mobile Repair", "Screen replacement, battery change, charging port repair and basic troubleshooting", "smartphone", false),
        Service::new("2", "Smartphone Repair", "Advanced smartphone repairs including software issues, camera repairs, and water damage recovery", "wrench", true),
        Service::new("3", "Motherboard Repair", "Chip-level repair and motherboard replacement for all mobile brands", "cpu", true),
        Service::new("4", "Software Solutions", "OS installation, software updates, virus removal, and data recovery services", "code", false),
        Service::new("5", "Tablet Repair", "Complete tablet repair services including screen, battery, and hardware issues", "tablet", false),
        Service::new("6", "Accessories", "Quality mobile accessories, screen guards, cases, and charging equipment", "package", false),
    ]
}

/// Stored services in insertion order.
pub async fn list(db: &DatabaseConnection, limit: u64) -> Result<Vec<Service>, ModelError> {
    let rows = Entity::find()
        .order_by_asc(Column::Pk)
        .limit(limit)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(Service::from).collect())
}

/// Seed a service row. The HTTP layer never calls this.
pub async fn insert(db: &DatabaseConnection, service: &Service) -> Result<(), ModelError> {
    let am = ActiveModel {
        pk: NotSet,
        id: Set(service.id.clone()),
        name: Set(service.name.clone()),
        description: Set(service.description.clone()),
        icon: Set(service.icon.clone()),
        featured: Set(service.featured),
    };
    am.insert(db).await?;
    Ok(())
}
