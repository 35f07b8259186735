pub use sea_orm_migration::prelude::*;

mod m20260601_000001_city;
mod m20260601_000002_jyotirlinga;
mod m20260601_000003_darshan_type;
mod m20260601_000004_time_slot;
mod m20260601_000005_app_user;
mod m20260601_000006_admin_user;
mod m20260601_000007_booking;
mod m20260601_000008_quote;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260601_000001_city::Migration),
            Box::new(m20260601_000002_jyotirlinga::Migration),
            Box::new(m20260601_000003_darshan_type::Migration),
            Box::new(m20260601_000004_time_slot::Migration),
            Box::new(m20260601_000005_app_user::Migration),
            Box::new(m20260601_000006_admin_user::Migration),
            Box::new(m20260601_000007_booking::Migration),
            Box::new(m20260601_000008_quote::Migration),
        ]
    }
}
