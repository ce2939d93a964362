//! The balance-context data structure.

use std::collections::{HashMap, HashSet};

use crate::error::ContextError;
use custos_types::{ActorAddress, Arn};

/// Balance bookkeeping for one scope.
///
/// Raw balance maps are mirrored by explicit membership registries so
/// callers can enumerate what is held in scope without scanning. The
/// registries are kept incrementally consistent with the balances:
/// asset and (provider, asset) entries prune themselves when their
/// balance returns to zero, while `provider_registry` is append-only —
/// it records every module that has ever deposited in scope, for audit
/// and introspection, even after its balance drops to zero.
#[derive(Clone, Debug, Default)]
pub struct BalanceContext {
    /// Scope-wide total per asset, across all providers.
    arn_balances: HashMap<Arn, u128>,
    /// Per-provider contribution to each asset.
    provider_balances: HashMap<(ActorAddress, Arn), u128>,
    /// Assets currently non-zero anywhere in scope.
    arn_registry: HashSet<Arn>,
    /// Every provider that has ever deposited in scope. Never shrinks.
    provider_registry: HashSet<ActorAddress>,
    /// Assets each provider currently holds a non-zero balance of.
    provider_arns: HashMap<ActorAddress, HashSet<Arn>>,
    /// Providers currently holding a non-zero balance of each asset.
    arn_providers: HashMap<Arn, HashSet<ActorAddress>>,
}

impl BalanceContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` of `arn` to this scope on behalf of `provider`.
    ///
    /// Registers the provider and asset in all relevant registries
    /// (repeat registration is a no-op) and adds to both the aggregate
    /// and the per-provider balance. Returns the resulting per-provider
    /// balance. A zero amount registers nothing and changes nothing.
    ///
    /// # Panics
    /// On balance overflow, which is unreachable under the platform's
    /// numeric domain and indicates a corrupted ledger.
    pub fn deposit(&mut self, provider: &ActorAddress, arn: Arn, amount: u128) -> u128 {
        if amount == 0 {
            return self.provider_balance(provider, arn);
        }

        self.arn_registry.insert(arn);
        self.provider_registry.insert(provider.clone());
        self.provider_arns
            .entry(provider.clone())
            .or_default()
            .insert(arn);
        self.arn_providers
            .entry(arn)
            .or_default()
            .insert(provider.clone());

        let aggregate = self.arn_balances.entry(arn).or_insert(0);
        *aggregate = aggregate
            .checked_add(amount)
            .unwrap_or_else(|| panic!("aggregate balance overflow for asset {arn}"));

        let share = self
            .provider_balances
            .entry((provider.clone(), arn))
            .or_insert(0);
        *share = share
            .checked_add(amount)
            .unwrap_or_else(|| panic!("provider balance overflow for asset {arn}"));
        *share
    }

    /// Debit `amount` of `arn` from `provider`'s share of this scope.
    ///
    /// Fails with [`ContextError::Overdraft`], mutating nothing, unless
    /// the asset is currently registered in scope and the provider's
    /// balance covers the amount. Prunes the (provider, asset)
    /// membership when the provider's balance reaches zero, and the
    /// asset registry entry when the aggregate reaches zero. Returns the
    /// resulting per-provider balance.
    pub fn withdrawal(
        &mut self,
        provider: &ActorAddress,
        arn: Arn,
        amount: u128,
    ) -> Result<u128, ContextError> {
        let available = if self.arn_registry.contains(&arn) {
            self.provider_balance(provider, arn)
        } else {
            0
        };
        if available < amount {
            return Err(ContextError::Overdraft {
                arn,
                needed: amount,
                available,
            });
        }

        let share = available - amount;
        if share == 0 {
            self.provider_balances.remove(&(provider.clone(), arn));
            if let Some(arns) = self.provider_arns.get_mut(provider) {
                arns.remove(&arn);
                if arns.is_empty() {
                    self.provider_arns.remove(provider);
                }
            }
            if let Some(providers) = self.arn_providers.get_mut(&arn) {
                providers.remove(provider);
                if providers.is_empty() {
                    self.arn_providers.remove(&arn);
                }
            }
        } else if let Some(entry) = self.provider_balances.get_mut(&(provider.clone(), arn)) {
            *entry = share;
        }

        let aggregate = self.balance(arn).saturating_sub(amount);
        if aggregate == 0 {
            self.arn_balances.remove(&arn);
            self.arn_registry.remove(&arn);
        } else if let Some(entry) = self.arn_balances.get_mut(&arn) {
            *entry = aggregate;
        }

        Ok(share)
    }

    /// The scope-wide balance of one asset. Zero for unregistered assets.
    pub fn balance(&self, arn: Arn) -> u128 {
        self.arn_balances.get(&arn).copied().unwrap_or(0)
    }

    /// One provider's share of one asset. Zero for unknown pairs.
    pub fn provider_balance(&self, provider: &ActorAddress, arn: Arn) -> u128 {
        self.provider_balances
            .get(&(provider.clone(), arn))
            .copied()
            .unwrap_or(0)
    }

    /// Whether the asset currently has a non-zero balance in scope.
    pub fn is_registered(&self, arn: Arn) -> bool {
        self.arn_registry.contains(&arn)
    }

    /// Assets currently held in scope.
    pub fn arns(&self) -> Vec<Arn> {
        self.arn_registry.iter().copied().collect()
    }

    /// Assets the given provider currently holds in scope.
    pub fn arns_for_provider(&self, provider: &ActorAddress) -> Vec<Arn> {
        self.provider_arns
            .get(provider)
            .map(|s| s.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Every provider that has ever deposited in scope.
    pub fn providers(&self) -> Vec<ActorAddress> {
        self.provider_registry.iter().cloned().collect()
    }

    /// Providers currently holding a non-zero balance of the given asset.
    pub fn providers_for_arn(&self, arn: Arn) -> Vec<ActorAddress> {
        self.arn_providers
            .get(&arn)
            .map(|s| s.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Contributing providers for one asset, paired with their balances.
    pub fn holdings(&self, arn: Arn) -> Vec<(ActorAddress, u128)> {
        self.providers_for_arn(arn)
            .into_iter()
            .map(|p| {
                let balance = self.provider_balance(&p, arn);
                (p, balance)
            })
            .collect()
    }

    /// Verify the context invariant: every aggregate covers each single
    /// provider's share, and the registries exactly mirror the non-zero
    /// balance entries. Exposed for consistency checks in tests.
    pub fn invariant_holds(&self) -> bool {
        for ((provider, arn), share) in &self.provider_balances {
            if *share == 0 || self.balance(*arn) < *share {
                return false;
            }
            let mirrored = self
                .provider_arns
                .get(provider)
                .is_some_and(|s| s.contains(arn))
                && self
                    .arn_providers
                    .get(arn)
                    .is_some_and(|s| s.contains(provider));
            if !mirrored || !self.provider_registry.contains(provider) {
                return false;
            }
        }
        for (arn, aggregate) in &self.arn_balances {
            if *aggregate == 0 || !self.arn_registry.contains(arn) {
                return false;
            }
        }
        self.arn_registry.len() == self.arn_balances.len()
            && self
                .arn_providers
                .values()
                .map(|s| s.len())
                .sum::<usize>()
                == self.provider_balances.len()
    }
}
