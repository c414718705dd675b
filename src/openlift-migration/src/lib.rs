pub use sea_orm_migration::prelude::*;

pub mod m20250318_094512_sessions;
mod m20250318_095040_feedback;
mod m20250506_113045_planned_sets;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250318_094512_sessions::Migration),
            Box::new(m20250318_095040_feedback::Migration),
            Box::new(m20250506_113045_planned_sets::Migration),
        ]
    }
}
