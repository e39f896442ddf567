#![allow(unused_imports)]

extern crate actix_web as aw;

#[macro_use]
#[path = "../src/main.rs"]
mod main;
pub use main::*;


use ::sea_orm::{DbConn, EntityTrait, PaginatorTrait};

use entity::tour_rating::RatingKey;
use main::data::{PageRequest, RatingDto, RatingPatch};
use main::manager::{RatingManager, RatingManagerError};

async fn rating_cnt(db: &DbConn) -> u64 {
    entity::tour_rating::Entity::find().count(db).await.unwrap()
}

#[tokio::test]
async fn created_rating_is_listed() {
    let db = db::setup().await.unwrap();
    let manager = RatingManager::new(&db);

    let dto = RatingDto::new(Some(4), Some("ok"), 7);
    let created = manager.create(1, dto.clone()).await.unwrap();
    assert_eq!(created, dto);

    let page = manager.list(1, PageRequest::default()).await.unwrap();
    assert_eq!(page.content, vec![dto]);
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.total_pages, 1);

    // ratings are scoped to their tour
    let page = manager.list(2, PageRequest::default()).await.unwrap();
    assert!(page.content.is_empty());
}

#[tokio::test]
async fn missing_tour_fails_before_writing() {
    let db = db::setup().await.unwrap();
    let manager = RatingManager::new(&db);

    let err = manager
        .create(99, RatingDto::new(Some(4), None, 7))
        .await
        .unwrap_err();
    assert!(matches!(err, RatingManagerError::TourNotFound(99)));
    assert_eq!(err.to_string(), "Tour does not exist 99");

    let err = manager
        .update_full(99, RatingDto::new(Some(4), None, 7))
        .await
        .unwrap_err();
    assert!(matches!(err, RatingManagerError::RatingNotFound(_)));

    let err = manager.delete(99, 7).await.unwrap_err();
    assert!(matches!(
        err,
        RatingManagerError::RatingNotFound(RatingKey {
            tour_id: 99,
            customer_id: 7
        })
    ));

    let err = manager
        .list(99, PageRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RatingManagerError::TourNotFound(99)));

    let err = manager.average(99).await.unwrap_err();
    assert!(matches!(err, RatingManagerError::TourNotFound(99)));

    assert_eq!(rating_cnt(&db).await, 0);
}

#[tokio::test]
async fn average_is_mean_of_scores() {
    let db = db::setup().await.unwrap();
    let manager = RatingManager::new(&db);

    assert_eq!(manager.average(1).await.unwrap().average, None);

    db::seed_rating(&db, 1, 1, 3, None).await.unwrap();
    db::seed_rating(&db, 1, 2, 5, None).await.unwrap();
    db::seed_rating(&db, 2, 1, 0, None).await.unwrap();

    assert_eq!(manager.average(1).await.unwrap().average, Some(4.0));
    assert_eq!(manager.average(2).await.unwrap().average, Some(0.0));
    assert_eq!(manager.average(3).await.unwrap().average, None);
}

#[tokio::test]
async fn unscored_ratings_left_out_of_average() {
    let db = db::setup().await.unwrap();
    let manager = RatingManager::new(&db);

    manager
        .create(1, RatingDto::new(None, Some("no score"), 1))
        .await
        .unwrap();
    assert_eq!(manager.average(1).await.unwrap().average, None);

    db::seed_rating(&db, 1, 2, 3, None).await.unwrap();
    assert_eq!(manager.average(1).await.unwrap().average, Some(3.0));
}

#[tokio::test]
async fn partial_update_keeps_absent_fields() {
    let db = db::setup().await.unwrap();
    let manager = RatingManager::new(&db);
    db::seed_rating(&db, 1, 7, 2, Some("meh")).await.unwrap();

    let updated = manager
        .update_partial(
            1,
            RatingPatch {
                score: Some(5),
                comment: None,
                customer_id: 7,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated, RatingDto::new(Some(5), Some("meh"), 7));

    let updated = manager
        .update_partial(
            1,
            RatingPatch {
                score: None,
                comment: Some("great".into()),
                customer_id: 7,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated, RatingDto::new(Some(5), Some("great"), 7));

    let stored = db::ratings_of(&db, 1).await.unwrap();
    assert_eq!(stored[0].score, Some(5));
    assert_eq!(stored[0].comment.as_deref(), Some("great"));
}

#[tokio::test]
async fn full_update_overwrites_both_fields() {
    let db = db::setup().await.unwrap();
    let manager = RatingManager::new(&db);
    let seeded = db::seed_rating(&db, 1, 7, 2, Some("meh")).await.unwrap();

    let updated = manager
        .update_full(1, RatingDto::new(Some(3), None, 7))
        .await
        .unwrap();
    assert_eq!(updated, RatingDto::new(Some(3), None, 7));

    let stored = db::ratings_of(&db, 1).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].comment, None);
    assert_eq!(stored[0].created_at, seeded.created_at);
    assert!(stored[0].updated_at >= seeded.updated_at);
}

#[tokio::test]
async fn full_update_writes_null_score() {
    let db = db::setup().await.unwrap();
    let manager = RatingManager::new(&db);
    db::seed_rating(&db, 1, 7, 2, Some("meh")).await.unwrap();

    let updated = manager
        .update_full(1, RatingDto::new(None, None, 7))
        .await
        .unwrap();
    assert_eq!(updated, RatingDto::new(None, None, 7));

    let stored = db::ratings_of(&db, 1).await.unwrap();
    assert_eq!(stored[0].score, None);
    assert_eq!(stored[0].comment, None);
}

#[tokio::test]
async fn delete_removes_only_the_pair() {
    let db = db::setup().await.unwrap();
    let manager = RatingManager::new(&db);
    db::seed_rating(&db, 1, 7, 2, None).await.unwrap();
    db::seed_rating(&db, 1, 8, 4, None).await.unwrap();
    db::seed_rating(&db, 2, 7, 4, None).await.unwrap();

    let err = manager.delete(1, 9).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Tour-Rating pair for request(1 for customer9)"
    );
    assert_eq!(rating_cnt(&db).await, 3);

    manager.delete(1, 7).await.unwrap();
    assert_eq!(rating_cnt(&db).await, 2);

    let remaining = db::ratings_of(&db, 1).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].customer_id, 8);

    assert!(manager.verify_rating(RatingKey::new(2, 7)).await.is_ok());
}

#[tokio::test]
async fn duplicate_rating_rejected() {
    let db = db::setup().await.unwrap();
    let manager = RatingManager::new(&db);

    manager
        .create(1, RatingDto::new(Some(4), Some("first"), 7))
        .await
        .unwrap();

    let err = manager
        .create(1, RatingDto::new(Some(1), None, 7))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RatingManagerError::AlreadyRated(RatingKey {
            tour_id: 1,
            customer_id: 7
        })
    ));

    let stored = db::ratings_of(&db, 1).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].score, Some(4));
}

#[tokio::test]
async fn concurrent_duplicate_insert_rejected_by_key() {
    let db = db::setup().await.unwrap();
    let manager = RatingManager::new(&db);

    // another request stored the pair after `create` looked it up
    db::seed_rating(&db, 1, 7, 4, Some("first")).await.unwrap();

    let err = manager
        .insert(RatingKey::new(1, 7), RatingDto::new(Some(1), None, 7))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RatingManagerError::AlreadyRated(RatingKey {
            tour_id: 1,
            customer_id: 7
        })
    ));

    let stored = db::ratings_of(&db, 1).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].comment.as_deref(), Some("first"));
}

#[tokio::test]
async fn out_of_range_score_rejected_by_entity() {
    let db = db::setup().await.unwrap();

    assert!(db::seed_rating(&db, 1, 7, 6, None).await.is_err());
    assert!(db::seed_rating(&db, 1, 7, 3, Some("x".repeat(300).as_str()))
        .await
        .is_err());
    assert_eq!(rating_cnt(&db).await, 0);
}
