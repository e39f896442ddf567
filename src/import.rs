use std::{collections::HashSet, path::Path};

use ::log::{debug, info};
use ::sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, TransactionTrait,
};
use ::serde::Deserialize;

use entity::{tour, tour_package};

#[derive(Debug, ::thiserror::Error)]
pub enum ImportError {
    #[error("can't read import file: {0}")]
    IO(#[from] std::io::Error),
    #[error("import file is malformed: {0}")]
    Json(#[from] ::serde_json::Error),
    #[error("tour `{title}` references unknown package `{code}`")]
    UnknownPackage { title: String, code: String },
    #[error("DbErr: `{0}`")]
    DbErr(#[from] DbErr),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ImportFile {
    pub packages: Vec<PackageRecord>,
    pub tours: Vec<TourRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackageRecord {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourRecord {
    pub package_code: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub blurb: String,
    pub price: i32,
    pub duration: String,
    pub difficulty: tour::Difficulty,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub packages: usize,
    pub tours: usize,
}

pub async fn import_file(db: &DbConn, path: &Path) -> Result<ImportSummary, ImportError> {
    info!("importing tours from `{}`", path.display());

    let raw = std::fs::read_to_string(path)?;
    let file: ImportFile = ::serde_json::from_str(&raw)?;

    import(db, file).await
}

/// Loads packages and tours in one transaction.
///
/// Packages are matched by code and tours by title; records already stored are skipped,
/// so the same file can be imported on every start.
pub async fn import(db: &DbConn, file: ImportFile) -> Result<ImportSummary, ImportError> {
    let txn = db.begin().await?;
    let mut summary = ImportSummary::default();

    let mut known_codes = tour_package::Entity::find()
        .all(&txn)
        .await?
        .into_iter()
        .map(|p| p.code)
        .collect::<HashSet<_>>();

    for package in file.packages {
        if known_codes.contains(&package.code) {
            debug!("package `{}` already exists", package.code);
            continue;
        }

        tour_package::ActiveModel {
            code: ActiveValue::Set(package.code.clone()),
            name: ActiveValue::Set(package.name),
        }
        .insert(&txn)
        .await?;

        known_codes.insert(package.code);
        summary.packages += 1;
    }

    for record in file.tours {
        if !known_codes.contains(&record.package_code) {
            // dropping `txn` rolls the whole import back
            return Err(ImportError::UnknownPackage {
                title: record.title,
                code: record.package_code,
            });
        }

        let exists = tour::Entity::find()
            .filter(tour::Column::Title.eq(record.title.as_str()))
            .count(&txn)
            .await?
            > 0;
        if exists {
            debug!("tour `{}` already exists", record.title);
            continue;
        }

        tour::ActiveModel {
            title: ActiveValue::Set(record.title),
            description: ActiveValue::Set(record.description),
            blurb: ActiveValue::Set(record.blurb),
            price: ActiveValue::Set(record.price),
            duration: ActiveValue::Set(record.duration),
            tour_package_code: ActiveValue::Set(record.package_code),
            difficulty: ActiveValue::Set(record.difficulty),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        summary.tours += 1;
    }

    txn.commit().await?;

    info!(
        "imported {} packages and {} tours",
        summary.packages, summary.tours
    );

    Ok(summary)
}
