use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sea-ORM Entity for the comments table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub task_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub author_email: String,
    pub author_name: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Comment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            task_id: model.task_id,
            body: model.body,
            author_email: model.author_email,
            author_name: model.author_name,
            created_at: model.created_at.into(),
        }
    }
}

impl From<crate::models::NewComment> for ActiveModel {
    fn from(input: crate::models::NewComment) -> Self {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            task_id: Set(input.task_id),
            body: Set(input.body),
            author_email: Set(input.author_email),
            author_name: Set(input.author_name),
            created_at: Set(Utc::now().into()),
        }
    }
}
