//! Menu item record

impl_record!(
    MenuItem,
    MenuItemDraft,
    "menu",
    labels: ("Menu item", "Menu items"),
    required: ["restaurantId", "name", "price"],
    owned {
        name: String,
        price: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        category: Option<String>,
    }
);
