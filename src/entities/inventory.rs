//! Inventory item record

impl_record!(
    InventoryItem,
    InventoryItemDraft,
    "inventory",
    labels: ("Inventory item", "Inventory items"),
    required: ["restaurantId", "name", "quantity"],
    owned {
        name: String,
        quantity: f64,
        /// Unit of `quantity` (e.g., "kg")
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
    }
);
