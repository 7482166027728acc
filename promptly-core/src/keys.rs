use std::fmt;

use tracing::debug;

/// Environment variables consulted when no key is stored, in order.
const KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// A Gemini API key. Debug output is redacted so the secret cannot leak
/// through logs or error messages.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key, trimming surrounding whitespace. Returns `None`
    /// for an empty or all-whitespace value.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The secret itself, for embedding in a request.
    pub fn reveal(&self) -> &str {
        &self.0
    }

    /// A form safe to print: everything but the last four characters is
    /// masked.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        let visible: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        format!("****{visible}")
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum KeyState {
    Missing,
    Active(ApiKey),
    Rejected,
}

/// Application-owned credential lifecycle: resolve a key once, hand it to
/// the dispatcher per call, and drop it when the provider rejects it so
/// the next attempt asks the user again instead of replaying a dead key.
#[derive(Debug, Clone)]
pub struct KeyStore {
    state: KeyState,
}

impl Default for KeyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyStore {
    pub fn new() -> Self {
        Self {
            state: KeyState::Missing,
        }
    }

    /// Resolve a usable key: an already-active one, else the stored
    /// settings value, else the environment fallback chain. A store in
    /// the rejected state stays unresolved until [`KeyStore::install`] is
    /// called with fresh credentials.
    pub fn resolve(&mut self, stored: Option<&str>) -> Option<&ApiKey> {
        self.resolve_with(stored, |name| std::env::var(name).ok())
    }

    fn resolve_with(
        &mut self,
        stored: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Option<&ApiKey> {
        if self.state == KeyState::Missing {
            let found = stored
                .and_then(ApiKey::new)
                .or_else(|| env_key(lookup));
            if let Some(key) = found {
                self.state = KeyState::Active(key);
            }
        }

        self.current()
    }

    /// The active key, if any.
    pub fn current(&self) -> Option<&ApiKey> {
        match &self.state {
            KeyState::Active(key) => Some(key),
            KeyState::Missing | KeyState::Rejected => None,
        }
    }

    /// Adopt a fresh key, replacing whatever state came before.
    pub fn install(&mut self, key: ApiKey) {
        self.state = KeyState::Active(key);
    }

    /// Discard the active key after the provider refused it.
    pub fn invalidate(&mut self) {
        debug!("credential rejected by provider, dropping it");
        self.state = KeyState::Rejected;
    }

    /// Forget everything, returning to the initial state so the next
    /// resolve consults stored settings and the environment again.
    pub fn clear(&mut self) {
        self.state = KeyState::Missing;
    }

    /// True when no key is active and the user has to supply one.
    pub fn needs_authorization(&self) -> bool {
        self.current().is_none()
    }
}

/// First environment variable with a non-empty raw value wins; its value
/// is then trimmed. A whitespace-only winner yields no key rather than
/// falling through to the next variable.
fn env_key(lookup: impl Fn(&str) -> Option<String>) -> Option<ApiKey> {
    let raw = KEY_ENV_VARS
        .iter()
        .find_map(|name| lookup(name).filter(|value| !value.is_empty()))?;
    ApiKey::new(&raw)
}
