//! Module exposing the seven restaurant record types

use crate::core::module::Module;
use crate::core::Record;
use crate::entities::{
    Expense, InventoryItem, MenuItem, Order, Reservation, Restaurant, Staff,
};
use crate::server::entity_registry::EntityRegistry;
use crate::server::handlers::RouteContext;
use crate::storage::RestaurantStores;

/// Registers every restaurant record type against its store
pub struct RestaurantModule {
    stores: RestaurantStores,
}

impl RestaurantModule {
    pub fn new(stores: RestaurantStores) -> Self {
        Self { stores }
    }
}

impl Module for RestaurantModule {
    fn name(&self) -> &str {
        "restaurant"
    }

    fn resource_names(&self) -> Vec<&str> {
        vec![
            Restaurant::resource_name(),
            Staff::resource_name(),
            MenuItem::resource_name(),
            Order::resource_name(),
            Reservation::resource_name(),
            InventoryItem::resource_name(),
            Expense::resource_name(),
        ]
    }

    fn register_entities(&self, context: &RouteContext, registry: &mut EntityRegistry) {
        let stores = &self.stores;
        registry.register_record(stores.restaurants.clone(), context);
        registry.register_record(stores.staff.clone(), context);
        registry.register_record(stores.menu.clone(), context);
        registry.register_record(stores.orders.clone(), context);
        registry.register_record(stores.reservations.clone(), context);
        registry.register_record(stores.inventory.clone(), context);
        registry.register_record(stores.expenses.clone(), context);
    }
}
