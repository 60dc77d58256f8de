pub use sea_orm_migration::prelude::*;

mod m20250718_000000_create_tasks;
mod m20250718_000001_create_comments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250718_000000_create_tasks::Migration),
            Box::new(m20250718_000001_create_comments::Migration),
        ]
    }
}
