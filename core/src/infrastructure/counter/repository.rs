use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    counter::{entities::Counter, ports::CounterRepository},
};
use crate::entity::counters::{ActiveModel, Entity};

#[derive(Debug, Clone)]
pub struct PostgresCounterRepository {
    pub db: DatabaseConnection,
}

impl PostgresCounterRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_active_model(counter: &Counter) -> ActiveModel {
        ActiveModel {
            id: Set(counter.id),
            count: Set(counter.count),
            created_at: Set(counter.created_at.fixed_offset()),
            updated_at: Set(counter.updated_at.fixed_offset()),
        }
    }
}

impl CounterRepository for PostgresCounterRepository {
    async fn get(&self, counter_id: i32) -> Result<Option<Counter>, CoreError> {
        let counter = Entity::find_by_id(counter_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get counter: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(counter.map(Counter::from))
    }

    async fn create(&self, counter: Counter) -> Result<Counter, CoreError> {
        let created = Entity::insert(Self::to_active_model(&counter))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create counter: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(Counter::from(created))
    }

    async fn update(&self, counter: Counter) -> Result<Counter, CoreError> {
        Entity::update(Self::to_active_model(&counter))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update counter: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(counter)
    }

    async fn delete(&self, counter_id: i32) -> Result<bool, CoreError> {
        let result = Entity::delete_by_id(counter_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete counter: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::*;
    use crate::entity::counters;

    #[tokio::test]
    async fn get_maps_absence_to_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<counters::Model>::new()])
            .into_connection();

        let repository = PostgresCounterRepository::new(db);
        let counter = repository.get(1).await.unwrap();

        assert!(counter.is_none());
    }

    #[tokio::test]
    async fn get_maps_row_to_domain_counter() {
        let now = chrono::Utc::now().fixed_offset();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![counters::Model {
                id: 1,
                count: 4,
                created_at: now,
                updated_at: now,
            }]])
            .into_connection();

        let repository = PostgresCounterRepository::new(db);
        let counter = repository.get(1).await.unwrap().unwrap();

        assert_eq!(counter.id, 1);
        assert_eq!(counter.count, 4);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_went_away() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let repository = PostgresCounterRepository::new(db);

        assert!(repository.delete(1).await.unwrap());
        assert!(!repository.delete(1).await.unwrap());
    }
}
