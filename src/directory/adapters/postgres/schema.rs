//! Diesel schema for client persistence.

diesel::table! {
    /// Client directory records.
    clients (id) {
        /// Client identifier.
        id -> Uuid,
        /// Client display name.
        #[max_length = 255]
        name -> Varchar,
        /// Contact email address.
        #[max_length = 255]
        email -> Varchar,
        /// Optional contact phone number.
        #[max_length = 50]
        phone -> Nullable<Varchar>,
        /// Inquiry this client was converted from, unique when present.
        source_inquiry_id -> Nullable<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
