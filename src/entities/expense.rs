//! Expense record

impl_record!(
    Expense,
    ExpenseDraft,
    "expenses",
    labels: ("Expense", "Expenses"),
    required: ["restaurantId", "description", "amount"],
    owned {
        description: String,
        amount: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        category: Option<String>,
    }
);
