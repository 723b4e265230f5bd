use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(pk_auto(Students::Id))
                    .col(string(Students::Name))
                    .col(string_uniq(Students::StudentNumber))
                    .col(integer(Students::Age))
                    .col(string(Students::Gender))
                    .col(string(Students::Major))
                    .col(string_null(Students::Email))
                    .col(string_null(Students::Phone))
                    .col(date(Students::EnrollmentDate))
                    .col(timestamp_with_time_zone(Students::CreatedTime))
                    .col(timestamp_with_time_zone(Students::UpdatedTime))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Students {
    Table,
    Id,
    Name,
    StudentNumber,
    Age,
    Gender,
    Major,
    Email,
    Phone,
    EnrollmentDate,
    CreatedTime,
    UpdatedTime,
}
