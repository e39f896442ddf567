use super::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TourRating::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TourRating::TourId).integer().not_null())
                    .col(ColumnDef::new(TourRating::CustomerId).integer().not_null())
                    .col(ColumnDef::new(TourRating::Score).integer().null())
                    .col(ColumnDef::new(TourRating::Comment).string_len(255).null())
                    .col(
                        ColumnDef::new(TourRating::CreatedAt)
                            .date_time()
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TourRating::UpdatedAt)
                            .date_time()
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_tour_rating")
                            .col(TourRating::TourId)
                            .col(TourRating::CustomerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_tour_rating-tour_id")
                            .from(TourRating::Table, TourRating::TourId)
                            .to(Tour::Table, Tour::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TourRating::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tour {
    Table,
    Id,
}

#[derive(DeriveIden)]
pub(crate) enum TourRating {
    Table,
    TourId,
    CustomerId,
    Score,
    Comment,
    CreatedAt,
    UpdatedAt,
}
