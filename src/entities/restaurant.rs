//! Restaurant record

impl_record!(
    Restaurant,
    RestaurantDraft,
    "restaurants",
    labels: ("Restaurant", "Restaurants"),
    required: ["name", "location"],
    {
        /// Display name
        name: String,
        /// Address or area
        location: String,
    }
);
