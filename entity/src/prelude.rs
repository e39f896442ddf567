pub use super::tour::Entity as Tour;
pub use super::tour_package::Entity as TourPackage;
pub use super::tour_rating::Entity as TourRating;
