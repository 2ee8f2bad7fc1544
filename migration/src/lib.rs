pub use sea_orm_migration::prelude::*;

mod m20260824_000001_create_favourite_places_table;
mod m20260824_000002_create_likes_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260824_000001_create_favourite_places_table::Migration),
            Box::new(m20260824_000002_create_likes_table::Migration),
        ]
    }
}
