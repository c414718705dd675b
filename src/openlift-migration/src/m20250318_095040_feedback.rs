use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Feedback::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Feedback::BodyPart).text().not_null())
                    .col(ColumnDef::new(Feedback::Feeling).text().not_null())
                    .col(ColumnDef::new(Feedback::Intensity).small_integer().null())
                    .col(ColumnDef::new(Feedback::Note).text().null())
                    .col(
                        ColumnDef::new(Feedback::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Feedback::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Feedback {
    Table,
    Id,
    BodyPart,
    Feeling,
    Intensity,
    Note,
    CreatedAt,
}
