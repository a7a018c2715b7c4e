//! Diesel schema for product persistence.

diesel::table! {
    /// Product catalog records.
    products (id) {
        /// Product identifier.
        id -> Uuid,
        /// Product name, unique across the catalog.
        #[max_length = 255]
        name -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Unit price in cents.
        unit_price_cents -> Int8,
        /// Availability flag.
        active -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
