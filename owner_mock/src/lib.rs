#![no_std]

use common_proxies::proxy_fund_me::FundMeProxy;

multiversx_sc::imports!();

/// Test-only owner with contract semantics: deploys a vault it then owns and
/// drives withdrawals against it. Deployed without the payable flag it cannot
/// receive the drained EGLD, which exercises the transfer-failure rollback.
#[multiversx_sc::contract]
pub trait OwnerMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(deployVault)]
    fn deploy_vault(
        &self,
        template: ManagedAddress,
        price_feed_address: ManagedAddress,
        minimum_usd: BigUint,
    ) -> ManagedAddress {
        let vault = self
            .tx()
            .typed(FundMeProxy)
            .init(price_feed_address, minimum_usd)
            .from_source(template)
            .code_metadata(CodeMetadata::UPGRADEABLE)
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        self.vault().set(&vault);

        vault
    }

    #[endpoint(withdrawVault)]
    fn withdraw_vault(&self) {
        self.tx()
            .to(self.vault().get())
            .typed(FundMeProxy)
            .withdraw()
            .sync_call();
    }

    #[endpoint(cheaperWithdrawVault)]
    fn cheaper_withdraw_vault(&self) {
        self.tx()
            .to(self.vault().get())
            .typed(FundMeProxy)
            .cheaper_withdraw()
            .sync_call();
    }

    /// Drains the vault twice in one transaction. The second drain runs
    /// against an already-empty ledger and must pay nothing.
    #[endpoint(withdrawVaultTwice)]
    fn withdraw_vault_twice(&self) {
        let vault = self.vault().get();

        self.tx()
            .to(&vault)
            .typed(FundMeProxy)
            .withdraw()
            .sync_call();

        self.tx()
            .to(&vault)
            .typed(FundMeProxy)
            .cheaper_withdraw()
            .sync_call();
    }

    #[view(getVault)]
    #[storage_mapper("vault")]
    fn vault(&self) -> SingleValueMapper<ManagedAddress>;
}
