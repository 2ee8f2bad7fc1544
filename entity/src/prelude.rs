pub use super::favourite_place::Entity as FavouritePlace;
pub use super::like::Entity as Like;
