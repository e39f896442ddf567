use ::sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::data::{self, Page, PageRequest};
use entity::{tour, tour_package};

#[derive(Debug, ::thiserror::Error)]
pub enum CatalogError {
    #[error("Tour does not exist {0}")]
    TourNotFound(i32),
    #[error("Tour package does not exist {0}")]
    PackageNotFound(String),
    #[error("DbErr: `{0}`")]
    DbErr(#[from] DbErr),
}

/// read only access to tours and tour packages
#[derive(Debug, Clone, Copy)]
pub struct TourCatalog<'db> {
    db: &'db DbConn,
}

impl<'db> TourCatalog<'db> {
    pub fn new(db: &'db DbConn) -> Self {
        Self { db }
    }
}

impl TourCatalog<'_> {
    pub async fn tours(&self, page: PageRequest) -> Result<Page<tour::Model>, CatalogError> {
        let select = tour::Entity::find().order_by_asc(tour::Column::Id);

        Ok(data::fetch_page(select, self.db, page).await?)
    }

    pub async fn tour(&self, tour_id: i32) -> Result<tour::Model, CatalogError> {
        tour::Entity::find_by_id(tour_id)
            .one(self.db)
            .await?
            .ok_or(CatalogError::TourNotFound(tour_id))
    }

    /// tours of the package with `code`, an unknown code gives an empty page
    pub async fn tours_by_package_code(
        &self,
        code: &str,
        page: PageRequest,
    ) -> Result<Page<tour::Model>, CatalogError> {
        let select = tour::Entity::find()
            .filter(tour::Column::TourPackageCode.eq(code))
            .order_by_asc(tour::Column::Id);

        Ok(data::fetch_page(select, self.db, page).await?)
    }

    pub async fn packages(&self) -> Result<Vec<tour_package::Model>, CatalogError> {
        Ok(tour_package::Entity::find()
            .order_by_asc(tour_package::Column::Code)
            .all(self.db)
            .await?)
    }

    pub async fn package(&self, code: &str) -> Result<tour_package::Model, CatalogError> {
        tour_package::Entity::find_by_id(code)
            .one(self.db)
            .await?
            .ok_or_else(|| CatalogError::PackageNotFound(code.to_owned()))
    }
}
