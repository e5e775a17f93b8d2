use crate::actor_framework::Entity;
use crate::domain::{Order, OrderId};

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> Option<&OrderId> {
        self.id.as_ref()
    }

    /// Called by the store actor only; the id never changes afterwards.
    fn assign_id(&mut self, id: OrderId) {
        self.id = Some(id);
    }
}
