use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct RUserCreate {
    pub name: String,
    pub password: String,
}

/// One stored record as the API shows it: `name` is the ciphertext token,
/// `password` the hash token. Both opaque.
#[derive(Serialize, Deserialize, Debug)]
pub struct UserEntry {
    pub name: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UsersRes {
    pub users: Vec<UserEntry>,
}

/// Reveal request. The frontend sends `globalPassword`; `password` is the
/// legacy key some clients still use.
#[derive(Serialize, Deserialize, Debug)]
pub struct RReveal {
    #[serde(rename = "globalPassword")]
    pub global_password: Option<String>,
    pub password: Option<String>,
}

pub struct DBUserCreate {
    pub name_encrypted: String,
    pub password_hash: String,
}
