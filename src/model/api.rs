use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when an API request succeeds with a confirmation message
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// The confirmation message
    pub msg: String,
}

/// A favourite place as returned by the listing endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlaceDto {
    pub student: String,
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

impl From<entity::favourite_place::Model> for PlaceDto {
    fn from(model: entity::favourite_place::Model) -> Self {
        Self {
            student: model.student,
            place: model.place,
            coordinates: model.coordinates,
            reason: model.reason,
            emoji: model.emoji,
            activity: model.activity,
            memory: model.memory,
            companions: model.companions,
            image_url: model.image_url,
        }
    }
}

/// Request body for recording a new favourite place
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddPlaceDto {
    pub student: String,
    pub place: String,
    pub coordinates: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(default)]
    pub memory: Option<String>,
    #[serde(default)]
    pub companions: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Request body for liking a place
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LikeDto {
    /// The liking student
    pub student: String,
    /// Name of the liked place
    pub place: String,
}

/// Like count for a single place
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlaceLikesDto {
    pub place: String,
    pub likes: u64,
}
