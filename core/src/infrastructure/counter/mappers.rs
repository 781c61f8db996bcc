use crate::domain::counter::entities::Counter;
use crate::entity::counters::Model as CounterModel;

impl From<&CounterModel> for Counter {
    fn from(model: &CounterModel) -> Self {
        Self {
            id: model.id,
            count: model.count,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<CounterModel> for Counter {
    fn from(model: CounterModel) -> Self {
        Self::from(&model)
    }
}
