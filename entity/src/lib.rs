pub mod favourite_place;
pub mod like;
pub mod prelude;
