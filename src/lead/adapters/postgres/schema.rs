//! Diesel schema for inquiry persistence.

diesel::table! {
    /// Inquiry records with tag snapshot and embedded history.
    inquiries (id) {
        /// Inquiry identifier.
        id -> Uuid,
        /// Contact display name.
        #[max_length = 255]
        name -> Varchar,
        /// Contact email address.
        #[max_length = 255]
        email -> Varchar,
        /// Optional contact phone number.
        #[max_length = 50]
        phone -> Nullable<Varchar>,
        /// Optional free-form message.
        message -> Nullable<Text>,
        /// Pipeline status.
        #[max_length = 50]
        status -> Varchar,
        /// Urgency level.
        #[max_length = 50]
        priority -> Varchar,
        /// Creation-time tag snapshot as a JSON array.
        tags -> Jsonb,
        /// Requested product associations as a JSON array.
        product_lines -> Jsonb,
        /// Follow-up history as a JSON array, oldest first.
        follow_ups -> Jsonb,
        /// Last contact timestamp, if any.
        last_contact_at -> Nullable<Timestamptz>,
        /// Next follow-up reminder, if any.
        next_follow_up_at -> Nullable<Timestamptz>,
        /// One-way conversion flag.
        converted_to_client -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
