//! The Notary engine.

use std::collections::HashMap;

use crate::error::NotaryError;
use custos_keys::{KeyAttributes, KeyInspector};
use custos_types::{ActorAddress, Arn, EventId, KeyId, Role, TrustId};

/// Resolution of the root-destination question for distributions: whether
/// a scribe may direct entitlement onto the trust's own root key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistributionPolicy {
    pub root_destination_allowed: bool,
}

impl Default for DistributionPolicy {
    /// The stricter reading: the root key is excluded as a destination.
    fn default() -> Self {
        Self {
            root_destination_allowed: false,
        }
    }
}

/// Trusted actors for one (ledger, trust, role), with the human-readable
/// alias recorded when each actor was added.
type RoleRegistry = HashMap<(ActorAddress, TrustId, Role), HashMap<ActorAddress, String>>;

/// Spendable withdrawal allowances: (ledger, key, module, asset) -> amount.
type AllowanceTable = HashMap<(ActorAddress, KeyId, ActorAddress, Arn), u128>;

/// The authorization gate.
///
/// Owns the narrow view into the external key system and serves any number
/// of ledgers — every table is keyed by the calling ledger's identity, so
/// two ledgers sharing one Notary cannot see each other's roles or
/// allowances.
pub struct Notary<K: KeyInspector> {
    vault: K,
    trusted: RoleRegistry,
    allowances: AllowanceTable,
    policy: DistributionPolicy,
}

impl<K: KeyInspector> Notary<K> {
    pub fn new(vault: K) -> Self {
        Self::with_policy(vault, DistributionPolicy::default())
    }

    pub fn with_policy(vault: K, policy: DistributionPolicy) -> Self {
        Self {
            vault,
            trusted: HashMap::new(),
            allowances: HashMap::new(),
            policy,
        }
    }

    pub fn vault(&self) -> &K {
        &self.vault
    }

    pub fn vault_mut(&mut self) -> &mut K {
        &mut self.vault
    }

    /// Trust or distrust `actor` for `role` on behalf of a trust.
    ///
    /// `caller` must hold `root_key` and it must be its trust's root key.
    /// Adding an already-trusted actor fails as redundant; removing a
    /// not-currently-trusted actor fails as unknown. The alias is stored
    /// only on addition.
    pub fn set_trusted_role(
        &mut self,
        caller: &ActorAddress,
        root_key: KeyId,
        ledger: &ActorAddress,
        role: Role,
        actor: &ActorAddress,
        trusted: bool,
        alias: &str,
    ) -> Result<(), NotaryError> {
        let attrs = self.resolve_key(root_key)?;
        if !attrs.is_root {
            return Err(NotaryError::NotRootKey(root_key));
        }
        self.require_holder(caller, root_key)?;

        let registry = self
            .trusted
            .entry((ledger.clone(), attrs.trust, role))
            .or_default();
        if trusted {
            if registry.contains_key(actor) {
                return Err(NotaryError::RedundantActor {
                    actor: actor.clone(),
                    role,
                });
            }
            registry.insert(actor.clone(), alias.to_string());
            tracing::info!(
                ledger = %ledger,
                trust = %attrs.trust,
                role = %role,
                actor = %actor,
                alias,
                "actor trusted for role"
            );
        } else {
            if registry.remove(actor).is_none() {
                return Err(NotaryError::UnknownActor {
                    actor: actor.clone(),
                    role,
                });
            }
            tracing::info!(
                ledger = %ledger,
                trust = %attrs.trust,
                role = %role,
                actor = %actor,
                "actor distrusted for role"
            );
        }
        Ok(())
    }

    /// Set (overwrite) the spendable withdrawal allowance for
    /// (ledger, key, module, asset).
    ///
    /// `caller` must hold `held_key`, and `held_key` must either be `key`
    /// itself or the root key of `key`'s trust — the root key acts on
    /// behalf of any member key. Self-service callers pass the same key
    /// twice.
    #[allow(clippy::too_many_arguments)]
    pub fn set_withdrawal_allowance(
        &mut self,
        caller: &ActorAddress,
        held_key: KeyId,
        ledger: &ActorAddress,
        module: &ActorAddress,
        key: KeyId,
        arn: Arn,
        amount: u128,
    ) -> Result<(), NotaryError> {
        let held = self.resolve_key(held_key)?;
        self.require_holder(caller, held_key)?;
        let target = self.resolve_key(key)?;
        if held_key != key && !(held.is_root && held.trust == target.trust) {
            return Err(NotaryError::KeyMismatch {
                held: held_key,
                key,
            });
        }

        let slot = (ledger.clone(), key, module.clone(), arn);
        if amount == 0 {
            self.allowances.remove(&slot);
        } else {
            self.allowances.insert(slot, amount);
        }
        tracing::info!(
            ledger = %ledger,
            key = %key,
            module = %module,
            arn = %arn,
            amount = %amount,
            "withdrawal allowance set"
        );
        Ok(())
    }

    /// Authorize a deposit of `amount` of `arn` by `module` against a
    /// trust's root key. Returns the trust id on success.
    pub fn notarize_deposit(
        &self,
        ledger: &ActorAddress,
        module: &ActorAddress,
        key: KeyId,
        arn: Arn,
        amount: u128,
    ) -> Result<TrustId, NotaryError> {
        let attrs = self.resolve_key(key)?;
        if !attrs.is_root {
            return Err(NotaryError::NotRootKey(key));
        }
        self.require_trusted(ledger, attrs.trust, Role::CollateralProvider, module)?;
        tracing::info!(
            ledger = %ledger,
            module = %module,
            key = %key,
            arn = %arn,
            amount = %amount,
            "deposit notarized"
        );
        Ok(attrs.trust)
    }

    /// Authorize a withdrawal of `amount` of `arn` by `module` against a
    /// key, consuming that much of the key's allowance at authorization
    /// time. Returns the trust id on success.
    pub fn notarize_withdrawal(
        &mut self,
        ledger: &ActorAddress,
        module: &ActorAddress,
        key: KeyId,
        arn: Arn,
        amount: u128,
    ) -> Result<TrustId, NotaryError> {
        let attrs = self.resolve_key(key)?;
        self.require_trusted(ledger, attrs.trust, Role::CollateralProvider, module)?;

        let slot = (ledger.clone(), key, module.clone(), arn);
        let available = self.allowances.get(&slot).copied().unwrap_or(0);
        if available < amount {
            return Err(NotaryError::InsufficientAllowance {
                needed: amount,
                available,
            });
        }
        let remaining = available - amount;
        if remaining == 0 {
            self.allowances.remove(&slot);
        } else {
            self.allowances.insert(slot, remaining);
        }
        tracing::info!(
            ledger = %ledger,
            module = %module,
            key = %key,
            arn = %arn,
            amount = %amount,
            remaining = %remaining,
            "withdrawal notarized"
        );
        Ok(attrs.trust)
    }

    /// Authorize a distribution of entitlement over `arn` from
    /// `source_key` to `destinations` within one trust. Returns the trust
    /// id on success.
    #[allow(clippy::too_many_arguments)]
    pub fn notarize_distribution(
        &self,
        ledger: &ActorAddress,
        scribe: &ActorAddress,
        module: &ActorAddress,
        arn: Arn,
        source_key: KeyId,
        destinations: &[KeyId],
        amounts: &[u128],
    ) -> Result<TrustId, NotaryError> {
        if destinations.len() != amounts.len() {
            return Err(NotaryError::LengthMismatch {
                destinations: destinations.len(),
                amounts: amounts.len(),
            });
        }
        let attrs = self.resolve_key(source_key)?;
        self.require_trusted(ledger, attrs.trust, Role::Scribe, scribe)?;
        self.require_trusted(ledger, attrs.trust, Role::CollateralProvider, module)?;
        if !self.vault.validate_key_set(
            attrs.trust,
            destinations,
            self.policy.root_destination_allowed,
        ) {
            return Err(NotaryError::InvalidDestinations { trust: attrs.trust });
        }
        tracing::info!(
            ledger = %ledger,
            scribe = %scribe,
            module = %module,
            arn = %arn,
            source = %source_key,
            destinations = destinations.len(),
            "distribution notarized"
        );
        Ok(attrs.trust)
    }

    /// Authorize the registration of a trigger event for a trust by an
    /// event dispatcher. Gates the external event log.
    pub fn notarize_event_registration(
        &self,
        ledger: &ActorAddress,
        dispatcher: &ActorAddress,
        trust: TrustId,
        event_id: EventId,
        description: &str,
    ) -> Result<(), NotaryError> {
        self.require_trusted(ledger, trust, Role::Dispatcher, dispatcher)?;
        tracing::info!(
            ledger = %ledger,
            dispatcher = %dispatcher,
            trust = %trust,
            event = %event_id,
            description,
            "event registration notarized"
        );
        Ok(())
    }

    /// Whether `actor` is currently trusted for `role` on behalf of
    /// `trust` under the given ledger.
    pub fn is_trusted(
        &self,
        ledger: &ActorAddress,
        trust: TrustId,
        role: Role,
        actor: &ActorAddress,
    ) -> bool {
        self.trusted
            .get(&(ledger.clone(), trust, role))
            .is_some_and(|r| r.contains_key(actor))
    }

    /// The actors currently trusted for `role` on behalf of `trust`.
    pub fn trusted_actors(
        &self,
        ledger: &ActorAddress,
        trust: TrustId,
        role: Role,
    ) -> Vec<ActorAddress> {
        self.trusted
            .get(&(ledger.clone(), trust, role))
            .map(|r| r.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// The alias recorded when `actor` was trusted, if it currently is.
    pub fn actor_alias(
        &self,
        ledger: &ActorAddress,
        trust: TrustId,
        role: Role,
        actor: &ActorAddress,
    ) -> Option<&str> {
        self.trusted
            .get(&(ledger.clone(), trust, role))
            .and_then(|r| r.get(actor))
            .map(String::as_str)
    }

    /// The current spendable allowance for (ledger, key, module, asset).
    pub fn withdrawal_allowance(
        &self,
        ledger: &ActorAddress,
        key: KeyId,
        module: &ActorAddress,
        arn: Arn,
    ) -> u128 {
        self.allowances
            .get(&(ledger.clone(), key, module.clone(), arn))
            .copied()
            .unwrap_or(0)
    }

    fn resolve_key(&self, key: KeyId) -> Result<KeyAttributes, NotaryError> {
        self.vault.inspect(key).ok_or(NotaryError::InvalidKey(key))
    }

    fn require_holder(&self, actor: &ActorAddress, key: KeyId) -> Result<(), NotaryError> {
        if self.vault.key_balance_of(actor, key) == 0 {
            return Err(NotaryError::KeyNotHeld {
                actor: actor.clone(),
                key,
            });
        }
        Ok(())
    }

    fn require_trusted(
        &self,
        ledger: &ActorAddress,
        trust: TrustId,
        role: Role,
        actor: &ActorAddress,
    ) -> Result<(), NotaryError> {
        if !self.is_trusted(ledger, trust, role, actor) {
            return Err(NotaryError::UntrustedActor {
                actor: actor.clone(),
                role,
                trust,
            });
        }
        Ok(())
    }
}
