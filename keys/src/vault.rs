//! Deterministic in-memory key vault.

use std::collections::{HashMap, HashSet};

use crate::error::KeyVaultError;
use crate::inspector::{KeyAttributes, KeyInspector};
use custos_types::{ActorAddress, KeyId, TrustId};

#[derive(Clone, Debug)]
struct KeyRecord {
    trust: TrustId,
    is_root: bool,
    /// Copies of this key currently held, per actor. Zero-count entries
    /// are removed so `holdings` only lists actual holders.
    holdings: HashMap<ActorAddress, u128>,
}

#[derive(Clone, Debug)]
struct TrustRecord {
    root: KeyId,
    keys: HashSet<KeyId>,
}

/// In-memory implementation of the capability-key system.
///
/// Ids are issued sequentially, so a vault driven with the same calls in
/// the same order always produces the same trusts and keys. Used by the
/// engine's tests and by embedders without a real key system.
#[derive(Clone, Debug, Default)]
pub struct InMemoryKeyVault {
    trusts: HashMap<TrustId, TrustRecord>,
    keys: HashMap<KeyId, KeyRecord>,
    next_trust: u64,
    next_key: u64,
}

impl InMemoryKeyVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new trust and mint its root key to `holder`.
    pub fn create_trust(&mut self, holder: &ActorAddress) -> (TrustId, KeyId) {
        let trust = TrustId::new(self.next_trust);
        self.next_trust += 1;
        let root = self.mint(trust, true, holder);
        self.trusts.insert(
            trust,
            TrustRecord {
                root,
                keys: HashSet::from([root]),
            },
        );
        (trust, root)
    }

    /// Create a new (non-root) key within an existing trust and mint one
    /// copy to `holder`.
    pub fn create_key(
        &mut self,
        trust: TrustId,
        holder: &ActorAddress,
    ) -> Result<KeyId, KeyVaultError> {
        if !self.trusts.contains_key(&trust) {
            return Err(KeyVaultError::UnknownTrust(trust));
        }
        let key = self.mint(trust, false, holder);
        if let Some(record) = self.trusts.get_mut(&trust) {
            record.keys.insert(key);
        }
        Ok(key)
    }

    /// Mint one additional copy of an existing key to `holder`.
    pub fn grant_key(&mut self, key: KeyId, holder: &ActorAddress) -> Result<(), KeyVaultError> {
        let record = self.keys.get_mut(&key).ok_or(KeyVaultError::UnknownKey(key))?;
        *record.holdings.entry(holder.clone()).or_insert(0) += 1;
        Ok(())
    }

    /// Move one copy of a key from one holder to another.
    pub fn transfer_key(
        &mut self,
        key: KeyId,
        from: &ActorAddress,
        to: &ActorAddress,
    ) -> Result<(), KeyVaultError> {
        self.remove_copy(key, from)?;
        if let Some(record) = self.keys.get_mut(&key) {
            *record.holdings.entry(to.clone()).or_insert(0) += 1;
        }
        Ok(())
    }

    /// Destroy one copy of a key held by `holder`.
    pub fn burn_key(&mut self, key: KeyId, holder: &ActorAddress) -> Result<(), KeyVaultError> {
        self.remove_copy(key, holder)
    }

    /// The root key of a trust, if the trust exists.
    pub fn root_key(&self, trust: TrustId) -> Option<KeyId> {
        self.trusts.get(&trust).map(|t| t.root)
    }

    fn mint(&mut self, trust: TrustId, is_root: bool, holder: &ActorAddress) -> KeyId {
        let key = KeyId::new(self.next_key);
        self.next_key += 1;
        self.keys.insert(
            key,
            KeyRecord {
                trust,
                is_root,
                holdings: HashMap::from([(holder.clone(), 1)]),
            },
        );
        key
    }

    fn remove_copy(&mut self, key: KeyId, holder: &ActorAddress) -> Result<(), KeyVaultError> {
        let record = self.keys.get_mut(&key).ok_or(KeyVaultError::UnknownKey(key))?;
        match record.holdings.get_mut(holder) {
            Some(count) if *count > 0 => {
                *count -= 1;
                if *count == 0 {
                    record.holdings.remove(holder);
                }
                Ok(())
            }
            _ => Err(KeyVaultError::NotHeld {
                holder: holder.clone(),
                key,
            }),
        }
    }
}

impl KeyInspector for InMemoryKeyVault {
    fn inspect(&self, key: KeyId) -> Option<KeyAttributes> {
        self.keys.get(&key).map(|r| KeyAttributes {
            trust: r.trust,
            is_root: r.is_root,
        })
    }

    fn key_balance_of(&self, holder: &ActorAddress, key: KeyId) -> u128 {
        self.keys
            .get(&key)
            .and_then(|r| r.holdings.get(holder))
            .copied()
            .unwrap_or(0)
    }

    fn validate_key_set(&self, trust: TrustId, keys: &[KeyId], allow_root: bool) -> bool {
        keys.iter().all(|key| match self.keys.get(key) {
            Some(record) => record.trust == trust && (allow_root || !record.is_root),
            None => false,
        })
    }
}
