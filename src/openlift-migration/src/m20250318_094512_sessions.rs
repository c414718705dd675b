use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sessions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sessions::Title).text().null())
                    .col(ColumnDef::new(Sessions::StartedAt).date_time().null())
                    .col(ColumnDef::new(Sessions::EndedAt).date_time().null())
                    .col(
                        ColumnDef::new(Sessions::Archived)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SessionExercises::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SessionExercises::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SessionExercises::SessionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SessionExercises::Position)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SessionExercises::Name).text().not_null())
                    .col(
                        ColumnDef::new(SessionExercises::BodyParts)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SessionExercises::CompletedSets)
                            .integer()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_exercises_session")
                            .from(SessionExercises::Table, SessionExercises::SessionId)
                            .to(Sessions::Table, Sessions::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SessionExercises::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Sessions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Sessions {
    Table,
    Id,
    Title,
    StartedAt,
    EndedAt,
    Archived,
}

#[derive(Iden)]
pub enum SessionExercises {
    Table,
    Id,
    SessionId,
    Position,
    Name,
    BodyParts,
    CompletedSets,
}
