//! Reservation record

impl_record!(
    Reservation,
    ReservationDraft,
    "reservations",
    labels: ("Reservation", "Reservations"),
    required: ["restaurantId", "name", "dateTime"],
    owned {
        /// Guest name
        name: String,
        /// Requested slot, kept as sent by the client
        date_time: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        party_size: Option<u32>,
    }
);
