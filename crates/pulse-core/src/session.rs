// File: crates/pulse-core/src/session.rs
// Summary: Demo session object (mocked sign-in) persisted through an injectable key-value store.
// Notes:
// - Every login and registration succeeds; there is no credential check.
// - The store only ever sees two keys: the JSON user record and an auth flag.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

pub const USER_KEY: &str = "dashboard_user";
pub const AUTH_KEY: &str = "dashboard_auth";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl User {
    /// The account shown when nothing has been stored yet.
    pub fn demo() -> Self {
        Self {
            id: "1".to_string(),
            name: "John Anderson".to_string(),
            email: "john.anderson@company.com".to_string(),
            role: "Business Manager".to_string(),
            avatar: None,
            company: Some("SAP Demo Corp".to_string()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RegisterData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub company: Option<String>,
}

/// Key-value persistence behind a session (browser local storage in spirit).
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> { Ok(self.values.get(key).cloned()) }
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// All keys in one JSON object file; a missing file reads as empty.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    pub fn path(&self) -> &Path { &self.path }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => serde_json::from_str(&text)
                .map_err(|e| ChartError::Storage(format!("{}: {e}", self.path.display()))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(map)?)?;
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> { Ok(self.load()?.get(key).cloned()) }
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut map = self.load()?;
        map.insert(key.to_string(), value.to_string());
        self.save(&map)
    }
    fn remove(&mut self, key: &str) -> Result<()> {
        let mut map = self.load()?;
        if map.remove(key).is_some() { self.save(&map)?; }
        Ok(())
    }
}

/// The signed-in user, if any, and the store it is persisted in.
pub struct Session<S: SessionStore> {
    store: S,
    user: Option<User>,
}

impl<S: SessionStore> Session<S> {
    /// Load whatever user the store holds. An unreadable record counts as signed out.
    pub fn restore(store: S) -> Result<Self> {
        let user = match store.get(USER_KEY)? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(u) => Some(u),
                Err(e) => {
                    log::warn!("discarding unreadable stored user: {e}");
                    None
                }
            },
            None => None,
        };
        Ok(Self { store, user })
    }

    /// Like `restore`, but an empty store yields the demo account (not persisted).
    pub fn restore_or_demo(store: S) -> Result<Self> {
        let mut s = Self::restore(store)?;
        if s.user.is_none() { s.user = Some(User::demo()); }
        Ok(s)
    }

    /// Sign in; any credentials work. Emails containing `admin` get the administrator profile.
    pub fn login(&mut self, email: &str, _password: &str) -> Result<&User> {
        let admin = email.contains("admin");
        let user = User {
            id: "1".to_string(),
            name: if admin { "Admin User" } else { "John Anderson" }.to_string(),
            email: email.to_string(),
            role: if admin { "Administrator" } else { "Business Manager" }.to_string(),
            avatar: None,
            company: Some("SAP Demo Corp".to_string()),
        };
        log::info!("signed in as {} ({})", user.email, user.role);
        self.persist(user)
    }

    pub fn register(&mut self, data: RegisterData) -> Result<&User> {
        let user = User {
            id: Utc::now().timestamp_millis().to_string(),
            name: data.name,
            email: data.email,
            role: "User".to_string(),
            avatar: None,
            company: Some(data.company.unwrap_or_else(|| "Demo Company".to_string())),
        };
        log::info!("registered {}", user.email);
        self.persist(user)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.user = None;
        self.store.remove(USER_KEY)?;
        self.store.remove(AUTH_KEY)?;
        Ok(())
    }

    pub fn user(&self) -> Option<&User> { self.user.as_ref() }

    pub fn is_authenticated(&self) -> bool { self.user.is_some() }

    pub fn store(&self) -> &S { &self.store }

    pub fn into_store(self) -> S { self.store }

    fn persist(&mut self, user: User) -> Result<&User> {
        let raw = serde_json::to_string(&user)?;
        self.store.set(USER_KEY, &raw)?;
        self.store.set(AUTH_KEY, "true")?;
        Ok(&*self.user.insert(user))
    }
}
