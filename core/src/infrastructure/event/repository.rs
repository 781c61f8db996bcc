use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    event::{entities::Event, ports::EventRepository, value_objects::UpdateEventInput},
};
use crate::entity::events::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct PostgresEventRepository {
    pub db: DatabaseConnection,
}

impl PostgresEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_active_model(event: &Event) -> ActiveModel {
        ActiveModel {
            id: Set(event.id.clone()),
            baby_id: Set(event.baby_id.clone()),
            event_type: Set(event.event_type.clone()),
            start_date: Set(event.start_date),
            end_date: Set(event.end_date),
            description: Set(event.description.clone()),
            created_at: Set(event.created_at.fixed_offset()),
        }
    }
}

impl EventRepository for PostgresEventRepository {
    async fn get_by_id(&self, event_id: &str) -> Result<Option<Event>, CoreError> {
        let event = Entity::find_by_id(event_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get event: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(event.map(Event::from))
    }

    async fn get_by_baby(&self, baby_id: &str) -> Result<Vec<Event>, CoreError> {
        let events = Entity::find()
            .filter(Column::BabyId.eq(baby_id))
            .order_by_desc(Column::StartDate)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get events: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(events.iter().map(Event::from).collect())
    }

    async fn create(&self, event: Event) -> Result<Event, CoreError> {
        let created = Entity::insert(Self::to_active_model(&event))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create event: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(Event::from(created))
    }

    async fn update(
        &self,
        event_id: &str,
        input: UpdateEventInput,
    ) -> Result<Option<Event>, CoreError> {
        let Some(model) = Entity::find_by_id(event_id).one(&self.db).await.map_err(|e| {
            error!("Failed to get event: {}", e);
            CoreError::Storage(e.to_string())
        })?
        else {
            return Ok(None);
        };

        let mut event = Event::from(&model);
        event.update(
            input.event_type,
            input.start_date,
            input.end_date,
            input.description,
        );

        Entity::update(Self::to_active_model(&event))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update event: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        self.get_by_id(event_id).await
    }

    async fn delete(&self, event_id: &str) -> Result<bool, CoreError> {
        let result = Entity::delete_by_id(event_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete event: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(result.rows_affected > 0)
    }
}
