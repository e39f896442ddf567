use ::log::{debug, info};
use ::sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
    ModelTrait, QueryFilter, QueryOrder, SqlErr,
};

use crate::data::{self, Average, Page, PageRequest, RatingDto, RatingPatch};
use entity::tour_rating::{self, RatingKey};

#[derive(Debug, ::thiserror::Error)]
pub enum RatingManagerError {
    #[error("Tour does not exist {0}")]
    TourNotFound(i32),
    #[error("Tour-Rating pair for request({} for customer{})", .0.tour_id, .0.customer_id)]
    RatingNotFound(RatingKey),
    #[error("Tour {} is already rated by customer {}", .0.tour_id, .0.customer_id)]
    AlreadyRated(RatingKey),
    #[error("DbErr: `{0}`")]
    DbErr(#[from] DbErr),
}

/// Ratings of a single tour, scoped by customer.
///
/// Every operation checks that the referenced tour (or tour-rating pair) exists
/// before touching `tour_rating`, so a failed call never leaves a partial write.
#[derive(Debug, Clone, Copy)]
pub struct RatingManager<'db> {
    db: &'db DbConn,
}

impl<'db> RatingManager<'db> {
    pub fn new(db: &'db DbConn) -> Self {
        Self { db }
    }
}

impl RatingManager<'_> {
    pub async fn verify_tour(
        &self,
        tour_id: i32,
    ) -> Result<entity::tour::Model, RatingManagerError> {
        entity::tour::Entity::find_by_id(tour_id)
            .one(self.db)
            .await?
            .ok_or(RatingManagerError::TourNotFound(tour_id))
    }

    pub async fn verify_rating(
        &self,
        key: RatingKey,
    ) -> Result<tour_rating::Model, RatingManagerError> {
        tour_rating::Entity::find_by_id(key)
            .one(self.db)
            .await?
            .ok_or(RatingManagerError::RatingNotFound(key))
    }

    pub async fn create(
        &self,
        tour_id: i32,
        dto: RatingDto,
    ) -> Result<RatingDto, RatingManagerError> {
        let tour = self.verify_tour(tour_id).await?;
        let key = RatingKey::new(tour.id, dto.customer_id);

        if tour_rating::Entity::find_by_id(key)
            .one(self.db)
            .await?
            .is_some()
        {
            return Err(RatingManagerError::AlreadyRated(key));
        }

        self.insert(key, dto).await
    }

    /// Stores a new rating without looking up the pair first.
    ///
    /// The composite primary key still rejects a second rating of the same pair.
    pub async fn insert(
        &self,
        key: RatingKey,
        dto: RatingDto,
    ) -> Result<RatingDto, RatingManagerError> {
        let rating = tour_rating::ActiveModel {
            tour_id: ActiveValue::Set(key.tour_id),
            customer_id: ActiveValue::Set(key.customer_id),
            score: ActiveValue::Set(dto.score),
            comment: ActiveValue::Set(dto.comment),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => RatingManagerError::AlreadyRated(key),
            _ => RatingManagerError::DbErr(e),
        })?;

        info!(
            "tour {} rated by customer {}: {:?}",
            rating.tour_id, rating.customer_id, rating.score
        );

        Ok(rating.into())
    }

    pub async fn list(
        &self,
        tour_id: i32,
        page: PageRequest,
    ) -> Result<Page<RatingDto>, RatingManagerError> {
        let tour = self.verify_tour(tour_id).await?;

        let select = tour_rating::Entity::find()
            .filter(tour_rating::Column::TourId.eq(tour.id))
            .order_by_asc(tour_rating::Column::CustomerId);

        let ratings = data::fetch_page(select, self.db, page).await?;

        Ok(ratings.map(RatingDto::from))
    }

    pub async fn average(&self, tour_id: i32) -> Result<Average, RatingManagerError> {
        let tour = self.verify_tour(tour_id).await?;

        let ratings = tour.find_related(tour_rating::Entity).all(self.db).await?;
        let average = data::average(ratings.iter().filter_map(|r| r.score));

        debug!(
            "tour {}: {} ratings, average {:?}",
            tour.id,
            ratings.len(),
            average
        );

        Ok(Average { average })
    }

    /// overwrites both score and comment
    pub async fn update_full(
        &self,
        tour_id: i32,
        dto: RatingDto,
    ) -> Result<RatingDto, RatingManagerError> {
        let rating = self
            .verify_rating(RatingKey::new(tour_id, dto.customer_id))
            .await?;

        let mut rating = rating.into_active_model();
        dto.overwrite(&mut rating);
        let rating = rating.update(self.db).await?;

        debug!("rating {:?} replaced", rating.key());

        Ok(rating.into())
    }

    /// writes only the fields present in `patch`
    pub async fn update_partial(
        &self,
        tour_id: i32,
        patch: RatingPatch,
    ) -> Result<RatingDto, RatingManagerError> {
        let rating = self
            .verify_rating(RatingKey::new(tour_id, patch.customer_id))
            .await?;

        let mut rating = rating.into_active_model();
        patch.update(&mut rating);
        let rating = rating.update(self.db).await?;

        debug!("rating {:?} patched", rating.key());

        Ok(rating.into())
    }

    pub async fn delete(&self, tour_id: i32, customer_id: i32) -> Result<(), RatingManagerError> {
        let rating = self
            .verify_rating(RatingKey::new(tour_id, customer_id))
            .await?;
        let key = rating.key();

        rating.delete(self.db).await?;

        info!("rating {:?} deleted", key);

        Ok(())
    }
}
