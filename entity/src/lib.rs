pub mod admin;
pub mod user;

/*
 Two account kinds, one table each. Both are keyed by email (unique per table)
 and both carry a deleted_at marker so a deactivated account stops resolving
 without losing its row.
 */
