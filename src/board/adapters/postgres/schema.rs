//! Diesel schema for board task persistence.

diesel::table! {
    /// Board task records with column placement.
    board_tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Lifecycle column.
        #[max_length = 50]
        status -> Varchar,
        /// Position within the column.
        position -> Integer,
        /// Urgency level.
        #[max_length = 50]
        priority -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Optional assignee display name.
        #[max_length = 255]
        assigned_to -> Nullable<Varchar>,
        /// Optional linked client.
        client_id -> Nullable<Uuid>,
        /// Optional linked inquiry.
        inquiry_id -> Nullable<Uuid>,
        /// Label set as a JSON array.
        tags -> Jsonb,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
