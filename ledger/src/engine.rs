//! The ledger engine.

use std::collections::HashMap;

use crate::error::LedgerError;
use custos_context::BalanceContext;
use custos_keys::KeyInspector;
use custos_notary::Notary;
use custos_types::{ActorAddress, Arn, KeyId, TrustId};

/// The three per-module balances resulting from one mutation:
/// key scope, owning-trust scope, and platform-wide scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BalanceReceipt {
    pub key_balance: u128,
    pub trust_balance: u128,
    pub ledger_balance: u128,
}

/// Selects one balance scope for the read endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// The platform-wide singleton scope.
    Ledger,
    /// One trust's scope.
    Trust(TrustId),
    /// One capability key's scope.
    Key(KeyId),
}

/// The three-tier ledger.
///
/// Scoped contexts are created implicitly (zero-valued) on first use and
/// never destroyed. The engine's `address` is its identity when calling
/// the Notary — a Notary instance may serve several ledgers, and every
/// role registration and allowance is keyed by that identity.
pub struct LedgerEngine {
    address: ActorAddress,
    global: BalanceContext,
    trusts: HashMap<TrustId, BalanceContext>,
    keys: HashMap<KeyId, BalanceContext>,
}

impl LedgerEngine {
    pub fn new(address: ActorAddress) -> Self {
        Self {
            address,
            global: BalanceContext::new(),
            trusts: HashMap::new(),
            keys: HashMap::new(),
        }
    }

    /// This ledger's identity towards the Notary.
    pub fn address(&self) -> &ActorAddress {
        &self.address
    }

    /// Credit `amount` of `arn`, custodied by `module`, to a trust's root
    /// key.
    ///
    /// Fails closed with no state change unless the amount is positive,
    /// the key is a valid root key, and `module` is a trusted collateral
    /// provider for its trust. On success the same deposit is applied to
    /// the global, trust, and key scopes and the three resulting
    /// per-module balances are returned.
    pub fn deposit<K: KeyInspector>(
        &mut self,
        notary: &Notary<K>,
        module: &ActorAddress,
        root_key: KeyId,
        arn: Arn,
        amount: u128,
    ) -> Result<BalanceReceipt, LedgerError> {
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        let trust = notary.notarize_deposit(&self.address, module, root_key, arn, amount)?;

        let ledger_balance = self.global.deposit(module, arn, amount);
        let trust_balance = self
            .trusts
            .entry(trust)
            .or_default()
            .deposit(module, arn, amount);
        let key_balance = self
            .keys
            .entry(root_key)
            .or_default()
            .deposit(module, arn, amount);

        tracing::info!(
            ledger = %self.address,
            module = %module,
            key = %root_key,
            trust = %trust,
            arn = %arn,
            amount = %amount,
            "deposit applied"
        );
        Ok(BalanceReceipt {
            key_balance,
            trust_balance,
            ledger_balance,
        })
    }

    /// Debit `amount` of `arn`, custodied by `module`, from a key.
    ///
    /// The overdraft check runs against the key scope — the most
    /// restrictive tier — *before* notarization, so every caller error is
    /// detected before any mutation, including the Notary's allowance
    /// decrement. Notarization then validates the key, the module's
    /// provider role, and the spendable allowance (consuming it). After
    /// that point the mutation cannot legitimately fail: a scope refusing
    /// the debit, or the resulting balances violating
    /// `global >= trust >= key`, means the engine itself is corrupt and
    /// panics.
    pub fn withdrawal<K: KeyInspector>(
        &mut self,
        notary: &mut Notary<K>,
        module: &ActorAddress,
        key: KeyId,
        arn: Arn,
        amount: u128,
    ) -> Result<BalanceReceipt, LedgerError> {
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        let available = self
            .keys
            .get(&key)
            .map(|ctx| ctx.provider_balance(module, arn))
            .unwrap_or(0);
        if available < amount {
            return Err(LedgerError::Overdraft {
                arn,
                needed: amount,
                available,
            });
        }

        let trust = notary.notarize_withdrawal(&self.address, module, key, arn, amount)?;

        let key_ctx = self
            .keys
            .get_mut(&key)
            .unwrap_or_else(|| panic!("key scope vanished for {key}"));
        let key_balance = must_withdraw(key_ctx, module, arn, amount, "key");
        let trust_ctx = self
            .trusts
            .get_mut(&trust)
            .unwrap_or_else(|| panic!("trust scope missing for notarized {trust}"));
        let trust_balance = must_withdraw(trust_ctx, module, arn, amount, "trust");
        let ledger_balance = must_withdraw(&mut self.global, module, arn, amount, "global");

        assert!(
            ledger_balance >= trust_balance && trust_balance >= key_balance,
            "scope ordering violated after withdrawal of {amount} {arn}: \
             global {ledger_balance} / trust {trust_balance} / key {key_balance}"
        );

        tracing::info!(
            ledger = %self.address,
            module = %module,
            key = %key,
            trust = %trust,
            arn = %arn,
            amount = %amount,
            "withdrawal applied"
        );
        Ok(BalanceReceipt {
            key_balance,
            trust_balance,
            ledger_balance,
        })
    }

    /// Move entitlement over `arn` from `source_key` to other keys of the
    /// same trust, without touching the custody module's physical
    /// holdings.
    ///
    /// Only the key scopes are mutated: the asset already arrived at the
    /// trust via an earlier top-level deposit, and the compensating
    /// withdrawal against the source exactly cancels the destination
    /// deposits, so the trust- and global-level sums are unchanged by
    /// construction. Returns the resulting source-key balance.
    #[allow(clippy::too_many_arguments)]
    pub fn distribute<K: KeyInspector>(
        &mut self,
        notary: &Notary<K>,
        scribe: &ActorAddress,
        module: &ActorAddress,
        arn: Arn,
        source_key: KeyId,
        destinations: &[KeyId],
        amounts: &[u128],
    ) -> Result<u128, LedgerError> {
        if destinations.len() != amounts.len() {
            return Err(LedgerError::LengthMismatch {
                destinations: destinations.len(),
                amounts: amounts.len(),
            });
        }
        if amounts.is_empty() || amounts.iter().any(|a| *a == 0) {
            return Err(LedgerError::ZeroAmount);
        }
        let total = amounts
            .iter()
            .try_fold(0u128, |acc, a| acc.checked_add(*a))
            .ok_or(LedgerError::AmountOverflow)?;
        let available = self
            .keys
            .get(&source_key)
            .map(|ctx| ctx.provider_balance(module, arn))
            .unwrap_or(0);
        if available < total {
            return Err(LedgerError::Overdraft {
                arn,
                needed: total,
                available,
            });
        }

        let trust = notary.notarize_distribution(
            &self.address,
            scribe,
            module,
            arn,
            source_key,
            destinations,
            amounts,
        )?;

        for (destination, amount) in destinations.iter().zip(amounts) {
            self.keys
                .entry(*destination)
                .or_default()
                .deposit(module, arn, *amount);
        }
        let source_ctx = self
            .keys
            .get_mut(&source_key)
            .unwrap_or_else(|| panic!("key scope vanished for {source_key}"));
        let source_balance = must_withdraw(source_ctx, module, arn, total, "key");

        tracing::info!(
            ledger = %self.address,
            scribe = %scribe,
            module = %module,
            trust = %trust,
            arn = %arn,
            source = %source_key,
            destinations = destinations.len(),
            total = %total,
            "distribution applied"
        );
        Ok(source_balance)
    }

    /// Assets currently held in a scope. Empty for unknown scopes.
    pub fn arns(&self, scope: Scope) -> Vec<Arn> {
        self.scope_context(scope)
            .map(BalanceContext::arns)
            .unwrap_or_default()
    }

    /// Assets a provider currently holds in a scope.
    pub fn arns_for_provider(&self, scope: Scope, provider: &ActorAddress) -> Vec<Arn> {
        self.scope_context(scope)
            .map(|ctx| ctx.arns_for_provider(provider))
            .unwrap_or_default()
    }

    /// Every provider that has ever deposited in a scope.
    pub fn providers(&self, scope: Scope) -> Vec<ActorAddress> {
        self.scope_context(scope)
            .map(BalanceContext::providers)
            .unwrap_or_default()
    }

    /// Providers currently holding the given asset in a scope.
    pub fn providers_for_arn(&self, scope: Scope, arn: Arn) -> Vec<ActorAddress> {
        self.scope_context(scope)
            .map(|ctx| ctx.providers_for_arn(arn))
            .unwrap_or_default()
    }

    /// The scope-wide balance of one asset.
    pub fn balance(&self, scope: Scope, arn: Arn) -> u128 {
        self.scope_context(scope)
            .map(|ctx| ctx.balance(arn))
            .unwrap_or(0)
    }

    /// One provider's share of one asset in a scope.
    pub fn provider_balance(&self, scope: Scope, provider: &ActorAddress, arn: Arn) -> u128 {
        self.scope_context(scope)
            .map(|ctx| ctx.provider_balance(provider, arn))
            .unwrap_or(0)
    }

    /// Contributing providers for one asset in a scope, with balances.
    pub fn holdings(&self, scope: Scope, arn: Arn) -> Vec<(ActorAddress, u128)> {
        self.scope_context(scope)
            .map(|ctx| ctx.holdings(arn))
            .unwrap_or_default()
    }

    /// The full balance sheet of a scope: every asset with every
    /// contributing provider and balance.
    ///
    /// Cost is unbounded — proportional to assets × providers in scope.
    /// Discouraged for scopes with large registries; prefer the targeted
    /// accessors.
    pub fn balance_sheet(&self, scope: Scope) -> Vec<(Arn, Vec<(ActorAddress, u128)>)> {
        let Some(ctx) = self.scope_context(scope) else {
            return Vec::new();
        };
        ctx.arns()
            .into_iter()
            .map(|arn| (arn, ctx.holdings(arn)))
            .collect()
    }

    fn scope_context(&self, scope: Scope) -> Option<&BalanceContext> {
        match scope {
            Scope::Ledger => Some(&self.global),
            Scope::Trust(trust) => self.trusts.get(&trust),
            Scope::Key(key) => self.keys.get(&key),
        }
    }
}

/// Apply a withdrawal that the Notary has already authorized and the
/// pre-flight check has already covered. A refusal at this point means a
/// scope diverged from the notarized state — a defect, not bad input.
fn must_withdraw(
    ctx: &mut BalanceContext,
    module: &ActorAddress,
    arn: Arn,
    amount: u128,
    scope: &str,
) -> u128 {
    ctx.withdrawal(module, arn, amount)
        .unwrap_or_else(|err| panic!("{scope} scope diverged from notarized state: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use custos_keys::InMemoryKeyVault;
    use custos_notary::NotaryError;
    use custos_types::Role;

    fn test_address(n: u8) -> ActorAddress {
        ActorAddress::new(format!("cst_{:0>60}", n))
    }

    fn test_arn(n: u8) -> Arn {
        Arn::new([n; 32])
    }

    struct Fixture {
        ledger: LedgerEngine,
        notary: Notary<InMemoryKeyVault>,
        alice: ActorAddress,
        module: ActorAddress,
        scribe: ActorAddress,
        trust: TrustId,
        root: KeyId,
    }

    /// A trust with its module trusted as provider and a trusted scribe.
    fn fixture() -> Fixture {
        let mut vault = InMemoryKeyVault::new();
        let alice = test_address(1);
        let (trust, root) = vault.create_trust(&alice);
        let mut notary = Notary::new(vault);
        let ledger = LedgerEngine::new(test_address(100));
        let module = test_address(10);
        let scribe = test_address(20);
        notary
            .set_trusted_role(
                &alice,
                root,
                ledger.address(),
                Role::CollateralProvider,
                &module,
                true,
                "vault module",
            )
            .unwrap();
        notary
            .set_trusted_role(&alice, root, ledger.address(), Role::Scribe, &scribe, true, "payroll")
            .unwrap();
        Fixture {
            ledger,
            notary,
            alice,
            module,
            scribe,
            trust,
            root,
        }
    }

    fn allow(f: &mut Fixture, key: KeyId, arn: Arn, amount: u128) {
        let ledger = f.ledger.address().clone();
        f.notary
            .set_withdrawal_allowance(&f.alice, f.root, &ledger, &f.module, key, arn, amount)
            .unwrap();
    }

    #[test]
    fn deposit_credits_all_three_scopes() {
        let mut f = fixture();
        let arn = test_arn(1);

        let receipt = f
            .ledger
            .deposit(&f.notary, &f.module, f.root, arn, 100)
            .unwrap();
        assert_eq!(
            receipt,
            BalanceReceipt {
                key_balance: 100,
                trust_balance: 100,
                ledger_balance: 100
            }
        );
        assert_eq!(f.ledger.balance(Scope::Ledger, arn), 100);
        assert_eq!(f.ledger.balance(Scope::Trust(f.trust), arn), 100);
        assert_eq!(f.ledger.balance(Scope::Key(f.root), arn), 100);
    }

    #[test]
    fn scenario_deposit_allow_withdraw_exhaust() {
        // Trust T, root key R, trusted module M:
        // deposit 100, allow 40, withdraw 40 → (60,60,60), second withdraw
        // fails with the allowance exhausted and balances unchanged.
        let mut f = fixture();
        let arn = test_arn(1);

        let receipt = f
            .ledger
            .deposit(&f.notary, &f.module, f.root, arn, 100)
            .unwrap();
        assert_eq!(receipt.key_balance, 100);

        let root = f.root;
        allow(&mut f, root, arn, 40);
        let receipt = f
            .ledger
            .withdrawal(&mut f.notary, &f.module, f.root, arn, 40)
            .unwrap();
        assert_eq!(
            receipt,
            BalanceReceipt {
                key_balance: 60,
                trust_balance: 60,
                ledger_balance: 60
            }
        );

        let err = f
            .ledger
            .withdrawal(&mut f.notary, &f.module, f.root, arn, 40)
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Notary(NotaryError::InsufficientAllowance { available: 0, .. })
        ));
        assert_eq!(f.ledger.balance(Scope::Ledger, arn), 60);
        assert_eq!(f.ledger.balance(Scope::Trust(f.trust), arn), 60);
        assert_eq!(f.ledger.balance(Scope::Key(f.root), arn), 60);
    }

    #[test]
    fn deposit_then_full_withdrawal_restores_registries() {
        let mut f = fixture();
        let arn = test_arn(1);

        f.ledger.deposit(&f.notary, &f.module, f.root, arn, 100).unwrap();
        let root = f.root;
        allow(&mut f, root, arn, 100);
        let receipt = f
            .ledger
            .withdrawal(&mut f.notary, &f.module, f.root, arn, 100)
            .unwrap();
        assert_eq!(
            receipt,
            BalanceReceipt {
                key_balance: 0,
                trust_balance: 0,
                ledger_balance: 0
            }
        );

        for scope in [Scope::Ledger, Scope::Trust(f.trust), Scope::Key(f.root)] {
            assert!(f.ledger.arns(scope).is_empty());
            assert!(f.ledger.providers_for_arn(scope, arn).is_empty());
            // Historical participation survives a zeroed balance.
            assert_eq!(f.ledger.providers(scope), vec![f.module.clone()]);
        }
    }

    #[test]
    fn zero_amounts_rejected() {
        let mut f = fixture();
        let arn = test_arn(1);

        assert!(matches!(
            f.ledger.deposit(&f.notary, &f.module, f.root, arn, 0),
            Err(LedgerError::ZeroAmount)
        ));
        assert!(matches!(
            f.ledger.withdrawal(&mut f.notary, &f.module, f.root, arn, 0),
            Err(LedgerError::ZeroAmount)
        ));
    }

    #[test]
    fn untrusted_module_cannot_deposit() {
        let mut f = fixture();
        let stranger = test_address(66);

        let err = f
            .ledger
            .deposit(&f.notary, &stranger, f.root, test_arn(1), 100)
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Notary(NotaryError::UntrustedActor { .. })
        ));
        assert_eq!(f.ledger.balance(Scope::Ledger, test_arn(1)), 0);
        assert!(f.ledger.providers(Scope::Ledger).is_empty());
    }

    #[test]
    fn deposit_requires_root_key() {
        let mut f = fixture();
        let bob = test_address(2);
        let member = f.notary.vault_mut().create_key(f.trust, &bob).unwrap();

        let err = f
            .ledger
            .deposit(&f.notary, &f.module, member, test_arn(1), 100)
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Notary(NotaryError::NotRootKey(_))
        ));
    }

    #[test]
    fn overdraft_detected_before_allowance_is_consumed() {
        let mut f = fixture();
        let arn = test_arn(1);
        f.ledger.deposit(&f.notary, &f.module, f.root, arn, 50).unwrap();
        let root = f.root;
        allow(&mut f, root, arn, 500);

        let err = f
            .ledger
            .withdrawal(&mut f.notary, &f.module, f.root, arn, 80)
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Overdraft {
                needed: 80,
                available: 50,
                ..
            }
        ));
        // The allowance survives the rejected attempt untouched.
        assert_eq!(
            f.notary
                .withdrawal_allowance(f.ledger.address(), f.root, &f.module, arn),
            500
        );
        assert_eq!(f.ledger.balance(Scope::Key(f.root), arn), 50);
    }

    #[test]
    fn distribution_moves_entitlement_and_is_trust_neutral() {
        let mut f = fixture();
        let bob = test_address(2);
        let carol = test_address(3);
        let arn = test_arn(1);
        let key_b = f.notary.vault_mut().create_key(f.trust, &bob).unwrap();
        let key_c = f.notary.vault_mut().create_key(f.trust, &carol).unwrap();

        f.ledger.deposit(&f.notary, &f.module, f.root, arn, 100).unwrap();
        let source_balance = f
            .ledger
            .distribute(&f.notary, &f.scribe, &f.module, arn, f.root, &[key_b, key_c], &[30, 20])
            .unwrap();

        assert_eq!(source_balance, 50);
        assert_eq!(f.ledger.balance(Scope::Key(f.root), arn), 50);
        assert_eq!(f.ledger.balance(Scope::Key(key_b), arn), 30);
        assert_eq!(f.ledger.balance(Scope::Key(key_c), arn), 20);
        // Trust- and global-level balances are untouched.
        assert_eq!(f.ledger.balance(Scope::Trust(f.trust), arn), 100);
        assert_eq!(f.ledger.balance(Scope::Ledger, arn), 100);
        // The key scopes still sum to the trust total.
        let key_sum = f.ledger.balance(Scope::Key(f.root), arn)
            + f.ledger.balance(Scope::Key(key_b), arn)
            + f.ledger.balance(Scope::Key(key_c), arn);
        assert_eq!(key_sum, 100);
    }

    #[test]
    fn distributed_entitlement_can_be_withdrawn_by_member_key() {
        let mut f = fixture();
        let bob = test_address(2);
        let arn = test_arn(1);
        let key_b = f.notary.vault_mut().create_key(f.trust, &bob).unwrap();

        f.ledger.deposit(&f.notary, &f.module, f.root, arn, 100).unwrap();
        f.ledger
            .distribute(&f.notary, &f.scribe, &f.module, arn, f.root, &[key_b], &[40])
            .unwrap();

        allow(&mut f, key_b, arn, 40);
        let receipt = f
            .ledger
            .withdrawal(&mut f.notary, &f.module, key_b, arn, 40)
            .unwrap();
        assert_eq!(receipt.key_balance, 0);
        assert_eq!(receipt.trust_balance, 60);
        assert_eq!(receipt.ledger_balance, 60);
    }

    #[test]
    fn distribution_caller_errors_leave_state_unchanged() {
        let mut f = fixture();
        let bob = test_address(2);
        let arn = test_arn(1);
        let key_b = f.notary.vault_mut().create_key(f.trust, &bob).unwrap();
        f.ledger.deposit(&f.notary, &f.module, f.root, arn, 100).unwrap();

        // Length mismatch.
        let err = f
            .ledger
            .distribute(&f.notary, &f.scribe, &f.module, arn, f.root, &[key_b], &[10, 20])
            .unwrap_err();
        assert!(matches!(err, LedgerError::LengthMismatch { .. }));

        // Zero amount.
        let err = f
            .ledger
            .distribute(&f.notary, &f.scribe, &f.module, arn, f.root, &[key_b], &[0])
            .unwrap_err();
        assert!(matches!(err, LedgerError::ZeroAmount));

        // Empty distribution.
        let err = f
            .ledger
            .distribute(&f.notary, &f.scribe, &f.module, arn, f.root, &[], &[])
            .unwrap_err();
        assert!(matches!(err, LedgerError::ZeroAmount));

        // More than the source key's entitlement.
        let err = f
            .ledger
            .distribute(&f.notary, &f.scribe, &f.module, arn, f.root, &[key_b], &[101])
            .unwrap_err();
        assert!(matches!(err, LedgerError::Overdraft { .. }));

        // Untrusted scribe.
        let stranger = test_address(66);
        let err = f
            .ledger
            .distribute(&f.notary, &stranger, &f.module, arn, f.root, &[key_b], &[10])
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Notary(NotaryError::UntrustedActor { .. })
        ));

        assert_eq!(f.ledger.balance(Scope::Key(f.root), arn), 100);
        assert_eq!(f.ledger.balance(Scope::Key(key_b), arn), 0);
        assert_eq!(f.ledger.balance(Scope::Trust(f.trust), arn), 100);
    }

    #[test]
    fn distribution_amount_overflow_is_a_caller_error() {
        let mut f = fixture();
        let bob = test_address(2);
        let arn = test_arn(1);
        let key_b = f.notary.vault_mut().create_key(f.trust, &bob).unwrap();
        f.ledger.deposit(&f.notary, &f.module, f.root, arn, 100).unwrap();

        let err = f
            .ledger
            .distribute(
                &f.notary,
                &f.scribe,
                &f.module,
                arn,
                f.root,
                &[key_b, key_b],
                &[u128::MAX, 1],
            )
            .unwrap_err();
        assert!(matches!(err, LedgerError::AmountOverflow));
    }

    #[test]
    fn scope_ordering_holds_across_operations() {
        let mut f = fixture();
        let bob = test_address(2);
        let arn = test_arn(1);
        let key_b = f.notary.vault_mut().create_key(f.trust, &bob).unwrap();

        f.ledger.deposit(&f.notary, &f.module, f.root, arn, 100).unwrap();
        f.ledger
            .distribute(&f.notary, &f.scribe, &f.module, arn, f.root, &[key_b], &[40])
            .unwrap();
        allow(&mut f, key_b, arn, 25);
        f.ledger
            .withdrawal(&mut f.notary, &f.module, key_b, arn, 25)
            .unwrap();

        let global = f.ledger.provider_balance(Scope::Ledger, &f.module, arn);
        let trust = f.ledger.provider_balance(Scope::Trust(f.trust), &f.module, arn);
        for key in [f.root, key_b] {
            let key_balance = f.ledger.provider_balance(Scope::Key(key), &f.module, arn);
            assert!(global >= trust && trust >= key_balance);
        }
        assert_eq!(global, 75);
        assert_eq!(trust, 75);
    }

    #[test]
    fn read_endpoints_safe_on_unknown_scopes() {
        let f = fixture();
        let arn = test_arn(9);
        let unknown_trust = Scope::Trust(TrustId::new(999));
        let unknown_key = Scope::Key(KeyId::new(999));

        for scope in [unknown_trust, unknown_key] {
            assert!(f.ledger.arns(scope).is_empty());
            assert!(f.ledger.providers(scope).is_empty());
            assert_eq!(f.ledger.balance(scope, arn), 0);
            assert_eq!(f.ledger.provider_balance(scope, &f.module, arn), 0);
            assert!(f.ledger.holdings(scope, arn).is_empty());
            assert!(f.ledger.balance_sheet(scope).is_empty());
        }
    }

    #[test]
    fn balance_sheet_lists_every_asset_with_holdings() {
        let mut f = fixture();
        // Derived ARNs, as a custody module would present them.
        let a1 = custos_crypto::derive_arn(&f.module, 20, b"0");
        let a2 = custos_crypto::derive_arn(&f.module, 721, b"42");
        f.ledger.deposit(&f.notary, &f.module, f.root, a1, 100).unwrap();
        f.ledger.deposit(&f.notary, &f.module, f.root, a2, 5).unwrap();

        let mut sheet = f.ledger.balance_sheet(Scope::Ledger);
        sheet.sort_by_key(|(arn, _)| *arn.as_bytes());
        let mut expected = vec![
            (a1, vec![(f.module.clone(), 100)]),
            (a2, vec![(f.module.clone(), 5)]),
        ];
        expected.sort_by_key(|(arn, _)| *arn.as_bytes());
        assert_eq!(sheet, expected);
    }
}
