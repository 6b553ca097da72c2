use sea_orm_migration::prelude::*;

pub(crate) trait ColumnDefExt {
    fn large_text<T: HasDatabaseBackend>(&mut self, manager: &T) -> &mut ColumnDef;
    fn datetime_millisecond_precision<T: HasDatabaseBackend>(
        &mut self,
        manager: &T,
    ) -> &mut ColumnDef;
}

impl ColumnDefExt for ColumnDef {
    fn large_text<T: HasDatabaseBackend>(&mut self, _manager: &T) -> &mut ColumnDef {
        self.text();

        #[cfg(feature = "mysql")]
        if matches!(_manager.backend(), sea_orm::DatabaseBackend::MySql) {
            self.custom(Alias::new("longtext"));
        }

        self
    }

    fn datetime_millisecond_precision<T: HasDatabaseBackend>(
        &mut self,
        manager: &T,
    ) -> &mut ColumnDef {
        let dt = match manager.backend() {
            sea_orm::DatabaseBackend::MySql => "datetime(3)",
            sea_orm::DatabaseBackend::Postgres => "timestamp(3)",
            sea_orm::DatabaseBackend::Sqlite => "datetime",
        };

        self.custom(Alias::new(dt));

        self
    }
}

pub(crate) trait HasDatabaseBackend {
    fn backend(&self) -> sea_orm::DatabaseBackend;
}

impl HasDatabaseBackend for SchemaManager<'_> {
    fn backend(&self) -> sea_orm::DatabaseBackend {
        self.get_database_backend()
    }
}
