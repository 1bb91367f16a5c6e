use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Admins::Table)
                .if_not_exists()
                .col(ColumnDef::new(Admins::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Admins::Name).string().not_null())
                .col(ColumnDef::new(Admins::Email).string().not_null())
                .col(ColumnDef::new(Admins::PasswordHash).string().not_null())
                .col(ColumnDef::new(Admins::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Admins::UpdatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Admins::DeletedAt).timestamp_with_time_zone().null())
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("uk_admins_email")
                .table(Admins::Table)
                .col(Admins::Email)
                .unique()
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_index(Index::drop().name("uk_admins_email").table(Admins::Table).to_owned()).await?;
        m.drop_table(Table::drop().table(Admins::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Admins {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
