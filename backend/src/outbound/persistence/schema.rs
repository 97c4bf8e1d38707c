//! Diesel table definitions.
//!
//! These must match `backend/migrations` exactly.

diesel::table! {
    /// Submitted comments. `analysis_result` is filled once the model answers.
    comments (id) {
        id -> Int4,
        content -> Text,
        /// Always null while authentication is disabled.
        user_id -> Nullable<Text>,
        analysis_result -> Nullable<Jsonb>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Read-only strategy catalogue seeded by migration.
    strategies (id) {
        id -> Int4,
        name -> Text,
        description -> Text,
        icon -> Text,
        category -> Text,
        pros -> Array<Text>,
        cons -> Array<Text>,
        risk_level -> Text,
    }
}

diesel::table! {
    /// Generated replies; append-only.
    responses (id) {
        id -> Int4,
        comment_id -> Int4,
        strategy_id -> Int4,
        generated_text -> Text,
        context -> Nullable<Jsonb>,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(responses -> comments (comment_id));
diesel::joinable!(responses -> strategies (strategy_id));

diesel::allow_tables_to_appear_in_same_query!(comments, responses, strategies);
