//! Record definitions for the restaurant domain
//!
//! Seven record types, each with its own store and route set:
//!
//! | Record | Path |
//! |---|---|
//! | [`Restaurant`] | `/restaurants` |
//! | [`Staff`] | `/staff` |
//! | [`MenuItem`] | `/menu` |
//! | [`Order`] | `/orders` |
//! | [`Reservation`] | `/reservations` |
//! | [`InventoryItem`] | `/inventory` |
//! | [`Expense`] | `/expenses` |

#[macro_use]
pub mod macros;

pub mod expense;
pub mod inventory;
pub mod menu;
pub mod module;
pub mod order;
pub mod reservation;
pub mod restaurant;
pub mod staff;

pub use expense::{Expense, ExpenseDraft};
pub use inventory::{InventoryItem, InventoryItemDraft};
pub use menu::{MenuItem, MenuItemDraft};
pub use module::RestaurantModule;
pub use order::{Order, OrderDraft};
pub use reservation::{Reservation, ReservationDraft};
pub use restaurant::{Restaurant, RestaurantDraft};
pub use staff::{Staff, StaffDraft};
