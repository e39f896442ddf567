use super::*;

use entity::tour::Difficulty;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tour::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tour::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .unique_key()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tour::Title).string().not_null())
                    .col(ColumnDef::new(Tour::Description).text().not_null())
                    .col(ColumnDef::new(Tour::Blurb).text().not_null())
                    .col(ColumnDef::new(Tour::Price).integer().not_null())
                    .col(ColumnDef::new(Tour::Duration).string().not_null())
                    .col(
                        ColumnDef::new(Tour::TourPackageCode)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tour::Difficulty)
                            .integer()
                            .default(Difficulty::Varies)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_tour-tour_package_code")
                            .from(Tour::Table, Tour::TourPackageCode)
                            .to(TourPackage::Table, TourPackage::Code)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tour-tour_package_code")
                    .table(Tour::Table)
                    .col(Tour::TourPackageCode)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tour::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TourPackage {
    Table,
    Code,
}

#[derive(DeriveIden)]
pub(crate) enum Tour {
    Table,
    Id,
    Title,
    Description,
    Blurb,
    Price,
    Duration,
    TourPackageCode,
    Difficulty,
}
