use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sea-ORM Entity for the tasks table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub is_public: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Task
impl From<Model> for crate::models::Task {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            owner: model.owner,
            body: model.body,
            is_public: model.is_public,
            created_at: model.created_at.into(),
        }
    }
}

// Conversion from domain NewTask to Sea-ORM ActiveModel; the store assigns
// the id and creation timestamp here.
impl From<crate::models::NewTask> for ActiveModel {
    fn from(input: crate::models::NewTask) -> Self {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            owner: Set(input.owner),
            body: Set(input.body),
            is_public: Set(input.is_public),
            created_at: Set(Utc::now().into()),
        }
    }
}
