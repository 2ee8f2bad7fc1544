use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::api::AddPlaceDto;

pub struct PlaceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlaceRepository<'a> {
    /// Creates a new instance of [`PlaceRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all recorded favourite places
    pub async fn get_all(&self) -> Result<Vec<entity::favourite_place::Model>, DbErr> {
        entity::prelude::FavouritePlace::find().all(self.db).await
    }

    /// Creates a new favourite place entry
    ///
    /// The `(student, place)` pair is the table's primary key; inserting an
    /// existing pair fails with a unique constraint violation, which callers
    /// classify via [`DbErr::sql_err`].
    pub async fn create(
        &self,
        place: AddPlaceDto,
    ) -> Result<entity::favourite_place::Model, DbErr> {
        let place = entity::favourite_place::ActiveModel {
            student: ActiveValue::Set(place.student),
            place: ActiveValue::Set(place.place),
            coordinates: ActiveValue::Set(place.coordinates),
            reason: ActiveValue::Set(place.reason),
            emoji: ActiveValue::Set(place.emoji),
            activity: ActiveValue::Set(place.activity),
            memory: ActiveValue::Set(place.memory),
            companions: ActiveValue::Set(place.companions),
            image_url: ActiveValue::Set(place.image_url),
        };

        place.insert(self.db).await
    }
}
