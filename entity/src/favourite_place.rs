//! Favourite place entity.

use sea_orm::entity::prelude::*;

/// A place recorded by a student, keyed by the `(student, place)` pair.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favourite_places")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub student: String,

    /// Name of the place
    #[sea_orm(primary_key, auto_increment = false)]
    pub place: String,

    /// Latitude and longitude, serialized as "lat,lon"
    pub coordinates: String,

    pub reason: Option<String>,
    pub emoji: Option<String>,
    pub activity: Option<String>,
    pub memory: Option<String>,
    pub companions: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
