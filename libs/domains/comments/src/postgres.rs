use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::{
    entity,
    error::CommentResult,
    models::{Comment, NewComment},
    repository::CommentRepository,
};

pub struct PgCommentRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgCommentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn create(&self, input: NewComment) -> CommentResult<Comment> {
        let active_model: entity::ActiveModel = input.into();

        let model = self.base.insert(active_model).await?;

        tracing::info!(comment_id = %model.id, task_id = %model.task_id, "Created comment");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> CommentResult<Option<Comment>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn list_by_task(&self, task_id: Uuid) -> CommentResult<Vec<Comment>> {
        let models = entity::Entity::find()
            .filter(entity::Column::TaskId.eq(task_id))
            .order_by_asc(entity::Column::CreatedAt)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: Uuid) -> CommentResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(comment_id = %id, "Deleted comment");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn count(&self) -> CommentResult<usize> {
        let count = entity::Entity::find().count(self.base.db()).await?;
        Ok(count as usize)
    }
}
