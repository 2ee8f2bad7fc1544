//! Place like entity.

use sea_orm::entity::prelude::*;

/// A single endorsement of a place by a student.
///
/// Likes reference places by name only; place names are not unique across
/// students in `favourite_places`, so no foreign key is declared. Uniqueness
/// of `(student, place)` is enforced by an index created in the migration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "likes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Student who liked the place
    #[sea_orm(indexed)]
    pub student: String,

    /// Name of the liked place
    #[sea_orm(indexed)]
    pub place: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
