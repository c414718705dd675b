use sea_orm_migration::prelude::*;

use crate::m20250318_094512_sessions::SessionExercises;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(SessionExercises::Table)
                    .add_column(ColumnDef::new(PlannedSets::PlannedSets).integer().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(SessionExercises::Table)
                    .drop_column(PlannedSets::PlannedSets)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum PlannedSets {
    PlannedSets,
}
