use std::ops::RangeInclusive;

use super::*;

pub const SCORE_RANGE: RangeInclusive<i32> = 0..=5;
/// counted in `char`s
pub const COMMENT_MAX_LEN: usize = 255;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tour_rating")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub tour_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub customer_id: i32,
    #[sea_orm(null)]
    pub score: Option<i32>,
    #[sea_orm(null)]
    pub comment: Option<String>,
    #[sea_orm(not_null)]
    pub created_at: ChronoDateTime,
    #[sea_orm(not_null)]
    pub updated_at: ChronoDateTime,
}

impl Model {
    pub fn key(&self) -> RatingKey {
        RatingKey::new(self.tour_id, self.customer_id)
    }
}

/// Composite primary key of a rating: one rating per customer per tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RatingKey {
    pub tour_id: i32,
    pub customer_id: i32,
}

impl RatingKey {
    pub fn new(tour_id: i32, customer_id: i32) -> Self {
        Self {
            tour_id,
            customer_id,
        }
    }
}

impl From<RatingKey> for (i32, i32) {
    fn from(key: RatingKey) -> Self {
        (key.tour_id, key.customer_id)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tour::Entity",
        from = "Column::TourId",
        to = "super::tour::Column::Id"
    )]
    Tour,
}

impl Related<super::tour::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tour.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let reject = || match insert {
            true => Err(DbErr::RecordNotInserted),
            false => Err(DbErr::RecordNotUpdated),
        };

        // below validate fields:

        if let ActiveValue::Set(Some(score)) = self.score {
            if !SCORE_RANGE.contains(&score) {
                ::log::warn!("reject save a tour rating with incorrect score: {}", score);
                return reject();
            }
        }

        if let ActiveValue::Set(Some(comment)) = &self.comment {
            if comment.chars().count() > COMMENT_MAX_LEN {
                ::log::warn!(
                    "reject save a tour rating with too long comment: {} chars",
                    comment.chars().count()
                );
                return reject();
            }
        }

        let now = now();
        if insert {
            self.created_at = ActiveValue::Set(now);
        }
        self.updated_at = ActiveValue::Set(now);

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_converts_to_primary_key_tuple() {
        let key = RatingKey::new(3, 7);
        let pk: (i32, i32) = key.into();
        assert_eq!(pk, (3, 7));
    }

    #[test]
    fn keys_compare_structurally() {
        use std::collections::HashSet;

        let keys: HashSet<_> = [RatingKey::new(1, 2), RatingKey::new(1, 2), RatingKey::new(2, 1)]
            .into_iter()
            .collect();
        assert_eq!(keys.len(), 2);
    }
}
