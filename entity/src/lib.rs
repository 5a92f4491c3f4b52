pub mod user;

/*
 A user row is write-once: registration inserts the encrypted name next to
 the password hash and nothing ever touches it again. Deletion is a manual
 admin action, not an API surface.
 */
