pub use ::sea_orm_migration::prelude::*;

mod m20240301_000001_create_tour_package;
mod m20240301_000002_create_tour;
mod m20240301_000003_create_tour_rating;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_tour_package::Migration),
            Box::new(m20240301_000002_create_tour::Migration),
            Box::new(m20240301_000003_create_tour_rating::Migration),
        ]
    }
}
