#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod governance;
pub mod signer_directory;
pub mod types;

// ============================================================
// Contract
// Proposal voting on signer verification plus the signer registry.
// Governance outcomes are applied to the registry by the admin;
// the two modules never call each other.
// ============================================================

#[multiversx_sc::contract]
pub trait SignerGovernance:
    governance::GovernanceModule + signer_directory::SignerDirectoryModule
{
    /// The deployer becomes the registry admin.
    #[init]
    fn init(&self) {
        let caller = self.blockchain().get_caller();
        self.registry_admin().set(&caller);
        self.proposal_counter().set(0u64);
        self.total_signers().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
