//! Macros for reducing boilerplate when defining records
//!
//! Every record shares the same skeleton (id, creation timestamp, optional
//! restaurant reference) and differs only in its domain fields. These macros
//! generate the record struct, its create draft and the `Record` impl.

/// Complete macro to create a record type with its draft and `Record` impl
///
/// Two forms are accepted. `owned { ... }` records carry a `restaurantId`
/// reference; the plain `{ ... }` form does not. Field attributes are
/// forwarded to both the record and the draft, which is how optional fields
/// and serde defaults are declared.
///
/// # Example
///
/// ```rust,ignore
/// use bistro::prelude::*;
///
/// impl_record!(
///     Staff,
///     StaffDraft,
///     "staff",
///     labels: ("Staff member", "Staff"),
///     required: ["restaurantId", "name", "position", "schedule"],
///     owned {
///         name: String,
///         position: String,
///         schedule: String,
///     }
/// );
///
/// // Usage
/// let staff = Staff::create(&UuidGenerator, StaffDraft {
///     restaurant_id: "r-1".to_string(),
///     name: "Bob".to_string(),
///     position: "Chef".to_string(),
///     schedule: "Mon-Fri".to_string(),
/// });
/// ```
#[macro_export]
macro_rules! impl_record {
    (
        $type:ident,
        $draft:ident,
        $resource:expr,
        labels: ($label:expr, $label_plural:expr),
        required: [ $( $required:expr ),* $(,)? ],
        owned {
            $( $(#[$meta:meta])* $field:ident : $field_type:ty ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $type {
            /// Unique identifier for this record
            pub id: String,

            /// Owning restaurant (not checked against the restaurant store)
            pub restaurant_id: String,

            $( $(#[$meta])* pub $field : $field_type, )*

            /// Creation time in epoch milliseconds
            pub created_at: i64,
        }

        /// Create payload accepted for this record
        #[derive(Debug, Clone, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $draft {
            pub restaurant_id: String,
            $( $(#[$meta])* pub $field : $field_type, )*
        }

        impl $crate::core::entity::Record for $type {
            type Draft = $draft;

            fn resource_name() -> &'static str {
                $resource
            }

            fn label() -> &'static str {
                $label
            }

            fn label_plural() -> &'static str {
                $label_plural
            }

            fn required_fields() -> &'static [&'static str] {
                &[ $( $required ),* ]
            }

            fn from_draft(id: String, created_at: i64, draft: $draft) -> Self {
                Self {
                    id,
                    restaurant_id: draft.restaurant_id,
                    $( $field: draft.$field, )*
                    created_at,
                }
            }

            fn id(&self) -> &str {
                &self.id
            }

            fn created_at(&self) -> i64 {
                self.created_at
            }

            fn restaurant_id(&self) -> Option<&str> {
                Some(&self.restaurant_id)
            }
        }
    };

    (
        $type:ident,
        $draft:ident,
        $resource:expr,
        labels: ($label:expr, $label_plural:expr),
        required: [ $( $required:expr ),* $(,)? ],
        {
            $( $(#[$meta:meta])* $field:ident : $field_type:ty ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $type {
            /// Unique identifier for this record
            pub id: String,

            $( $(#[$meta])* pub $field : $field_type, )*

            /// Creation time in epoch milliseconds
            pub created_at: i64,
        }

        /// Create payload accepted for this record
        #[derive(Debug, Clone, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $draft {
            $( $(#[$meta])* pub $field : $field_type, )*
        }

        impl $crate::core::entity::Record for $type {
            type Draft = $draft;

            fn resource_name() -> &'static str {
                $resource
            }

            fn label() -> &'static str {
                $label
            }

            fn label_plural() -> &'static str {
                $label_plural
            }

            fn required_fields() -> &'static [&'static str] {
                &[ $( $required ),* ]
            }

            fn from_draft(id: String, created_at: i64, draft: $draft) -> Self {
                Self {
                    id,
                    $( $field: draft.$field, )*
                    created_at,
                }
            }

            fn id(&self) -> &str {
                &self.id
            }

            fn created_at(&self) -> i64 {
                self.created_at
            }
        }
    };
}
