use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, PaginatorTrait, QueryFilter, QuerySelect,
};

pub struct LikeRepository<'a> {
    db: &'a DatabaseConnection,
}

/// Per-place like count row produced by the grouped aggregation query
#[derive(FromQueryResult)]
pub struct PlaceLikeCount {
    pub place: String,
    pub likes: i64,
}

impl<'a> LikeRepository<'a> {
    /// Creates a new instance of [`LikeRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a like for the given student and place
    ///
    /// The unique index on `(student, place)` makes this insert the single
    /// source of truth for "already liked": a duplicate attempt fails with a
    /// unique constraint violation and no separate read check is needed, so
    /// concurrent duplicates cannot both succeed.
    pub async fn create(&self, student: &str, place: &str) -> Result<entity::like::Model, DbErr> {
        let like = entity::like::ActiveModel {
            student: ActiveValue::Set(student.to_string()),
            place: ActiveValue::Set(place.to_string()),
            ..Default::default()
        };

        like.insert(self.db).await
    }

    /// Counts likes for a single place, 0 if the place has none or is unknown
    pub async fn count_by_place(&self, place: &str) -> Result<u64, DbErr> {
        entity::prelude::Like::find()
            .filter(entity::like::Column::Place.eq(place))
            .count(self.db)
            .await
    }

    /// Counts likes grouped by place name
    pub async fn count_grouped_by_place(&self) -> Result<Vec<PlaceLikeCount>, DbErr> {
        entity::prelude::Like::find()
            .select_only()
            .column(entity::like::Column::Place)
            .column_as(entity::like::Column::Id.count(), "likes")
            .group_by(entity::like::Column::Place)
            .into_model::<PlaceLikeCount>()
            .all(self.db)
            .await
    }
}
