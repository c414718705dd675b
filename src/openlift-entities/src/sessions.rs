use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: Option<String>,
    pub started_at: Option<DateTime>,
    pub ended_at: Option<DateTime>,
    pub archived: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::session_exercises::Entity")]
    SessionExercises,
}

impl Related<super::session_exercises::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionExercises.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
