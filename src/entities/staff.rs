//! Staff record

impl_record!(
    Staff,
    StaffDraft,
    "staff",
    labels: ("Staff member", "Staff"),
    required: ["restaurantId", "name", "position", "schedule"],
    owned {
        name: String,
        /// Role in the team (e.g., "Chef", "Waiter")
        position: String,
        /// Free-form working schedule
        schedule: String,
    }
);
