use ::sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, Select};
use ::serde::{Deserialize, Serialize};
use ::serde_valid::Validate;

use entity::tour_rating;

/// Rating as seen by the http clients.
///
/// Used as the body of `POST` and `PUT` and as the output of every rating endpoint.
/// Only `customerId` is required, an omitted (or `null`) `score` or `comment` is stored as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RatingDto {
    #[validate(minimum = 0)]
    #[validate(maximum = 5)]
    pub score: Option<i32>,
    #[validate(custom(comment_length))]
    pub comment: Option<String>,
    pub customer_id: i32,
}

/// same measure as the `tour_rating` entity applies on save
fn comment_length(comment: &Option<String>) -> Result<(), ::serde_valid::validation::Error> {
    match comment {
        Some(c) if c.chars().count() > tour_rating::COMMENT_MAX_LEN => {
            Err(::serde_valid::validation::Error::Custom(format!(
                "comment is longer than {} characters",
                tour_rating::COMMENT_MAX_LEN
            )))
        }
        _ => Ok(()),
    }
}

impl RatingDto {
    pub fn new(score: Option<i32>, comment: Option<&str>, customer_id: i32) -> Self {
        Self {
            score,
            comment: comment.map(str::to_owned),
            customer_id,
        }
    }

    /// overwrites score and comment, `None` clears the stored value
    pub fn overwrite(self, rating: &mut tour_rating::ActiveModel) {
        rating.score = ActiveValue::Set(self.score);
        rating.comment = ActiveValue::Set(self.comment);
    }
}

impl From<tour_rating::Model> for RatingDto {
    fn from(rating: tour_rating::Model) -> Self {
        Self {
            score: rating.score,
            comment: rating.comment,
            customer_id: rating.customer_id,
        }
    }
}

/// Body of `PATCH`: only the fields that are present get written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RatingPatch {
    #[validate(minimum = 0)]
    #[validate(maximum = 5)]
    pub score: Option<i32>,
    #[validate(custom(comment_length))]
    pub comment: Option<String>,
    pub customer_id: i32,
}

impl RatingPatch {
    pub fn update(self, rating: &mut tour_rating::ActiveModel) {
        if let Some(score) = self.score {
            rating.score = ActiveValue::Set(Some(score));
        }

        if let Some(comment) = self.comment {
            rating.comment = ActiveValue::Set(Some(comment));
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Average {
    /// `None` when the tour has no ratings yet
    pub average: Option<f64>,
}

/// arithmetic mean of the scores, `None` for an empty input
///
/// Ratings stored without a score are not part of the input.
pub fn average<I>(scores: I) -> Option<f64>
where
    I: IntoIterator<Item = i32>,
{
    let (sum, cnt) = scores
        .into_iter()
        .fold((0i64, 0u64), |(sum, cnt), score| (sum + i64::from(score), cnt + 1));

    (cnt > 0).then(|| sum as f64 / cnt as f64)
}

/// `?page=0&size=20`, page numbers start from zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    page: u64,
    #[serde(default = "PageRequest::default_size")]
    size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: Self::DEFAULT_SIZE,
        }
    }
}

impl PageRequest {
    pub const DEFAULT_SIZE: u64 = 20;
    pub const MAX_SIZE: u64 = 2000;

    pub fn new(page: u64, size: u64) -> Self {
        Self { page, size }
    }

    fn default_size() -> u64 {
        Self::DEFAULT_SIZE
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        match self.size {
            0 => Self::DEFAULT_SIZE,
            size => size.min(Self::MAX_SIZE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    /// zero based number of this page
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

/// runs `select` for the requested page and counts the whole result set
pub async fn fetch_page<'db, C, E>(
    select: Select<E>,
    db: &'db C,
    request: PageRequest,
) -> Result<Page<E::Model>, DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: Send + Sync + 'db,
{
    let size = request.size();
    let paginator = select.paginate(db, size);

    let total_elements = paginator.num_items().await?;

    // pages past the end are empty, including ones whose offset overflows
    let content = match request.page().checked_mul(size) {
        Some(offset) if offset < total_elements => paginator.fetch_page(request.page()).await?,
        _ => Vec::new(),
    };

    Ok(Page {
        content,
        number: request.page(),
        size,
        total_elements,
        total_pages: total_elements.div_ceil(size),
    })
}
