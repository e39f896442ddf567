use super::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TourPackage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TourPackage::Code)
                            .string_len(16)
                            .not_null()
                            .unique_key()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TourPackage::Name).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TourPackage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum TourPackage {
    Table,
    Code,
    Name,
}
