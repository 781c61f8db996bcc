use crate::domain::event::entities::Event;
use crate::entity::events::Model as EventModel;

impl From<&EventModel> for Event {
    fn from(model: &EventModel) -> Self {
        Self {
            id: model.id.clone(),
            baby_id: model.baby_id.clone(),
            event_type: model.event_type.clone(),
            start_date: model.start_date,
            end_date: model.end_date,
            description: model.description.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Self::from(&model)
    }
}
