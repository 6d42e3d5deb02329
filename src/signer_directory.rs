multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_REGISTERED, ERR_INVALID_SIGNER_DATA, ERR_NOT_AUTHORIZED, ERR_SIGNER_INDEX_FULL,
    ERR_SIGNER_NOT_FOUND, ERR_STATUS_TOO_LONG,
};
use crate::types::{SignerProfile, STATUS_PENDING, STATUS_VERIFIED};

/// Capacity of the signer index
pub const MAX_SIGNERS: usize = 1_000;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_CONTACT_LEN: usize = 100;
pub const MAX_LOCATION_LEN: usize = 100;
pub const MAX_WEBSITE_LEN: usize = 200;
pub const MAX_CAPABILITIES_LEN: usize = 500;
pub const MAX_STATUS_LEN: usize = 20;

/// Registry of signer institutions. Profiles are self-registered and
/// self-maintained; only the registry admin changes verification status.
#[multiversx_sc::module]
pub trait SignerDirectoryModule {
    #[endpoint(registerSigner)]
    fn register_signer(
        &self,
        name: ManagedBuffer,
        contact: ManagedBuffer,
        location: ManagedBuffer,
        website: ManagedBuffer,
        capabilities: ManagedBuffer,
    ) {
        let caller = self.blockchain().get_caller();
        require!(self.signers(&caller).is_empty(), ERR_ALREADY_REGISTERED);
        self.require_valid_signer_data(&name, &contact, &location, &website, &capabilities);
        require!(
            self.signer_index().len() < MAX_SIGNERS,
            ERR_SIGNER_INDEX_FULL
        );

        let height = self.blockchain().get_block_nonce();
        let profile = SignerProfile {
            name,
            contact,
            location,
            website,
            capabilities,
            verification_status: ManagedBuffer::from(STATUS_PENDING),
            registered_at: height,
            is_active: true,
        };

        self.signers(&caller).set(&profile);
        self.signer_index().push(&caller);
        self.total_signers().update(|total| *total += 1);

        self.signer_registered_event(&caller, height);
    }

    /// Owner-only by construction: the caller can only touch its own profile.
    #[endpoint(updateSignerInfo)]
    fn update_signer_info(
        &self,
        name: ManagedBuffer,
        contact: ManagedBuffer,
        location: ManagedBuffer,
        website: ManagedBuffer,
        capabilities: ManagedBuffer,
    ) {
        let caller = self.blockchain().get_caller();
        require!(!self.signers(&caller).is_empty(), ERR_SIGNER_NOT_FOUND);
        self.require_valid_signer_data(&name, &contact, &location, &website, &capabilities);

        let existing = self.signers(&caller).get();
        let updated = SignerProfile {
            name,
            contact,
            location,
            website,
            capabilities,
            verification_status: existing.verification_status,
            registered_at: existing.registered_at,
            is_active: existing.is_active,
        };
        self.signers(&caller).set(&updated);

        self.signer_updated_event(&caller);
    }

    /// Soft delete. Succeeds on an already inactive profile; there is no
    /// reactivation endpoint.
    #[endpoint(deactivateSigner)]
    fn deactivate_signer(&self) {
        let caller = self.blockchain().get_caller();
        require!(!self.signers(&caller).is_empty(), ERR_SIGNER_NOT_FOUND);

        self.signers(&caller).update(|profile| profile.is_active = false);

        self.signer_deactivated_event(&caller);
    }

    /// Admin-only. The status is free-form; "verified" is the value counted
    /// by `getVerifiedSignerCount`.
    #[endpoint(setVerificationStatus)]
    fn set_verification_status(&self, signer: ManagedAddress, new_status: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.registry_admin().get(), ERR_NOT_AUTHORIZED);
        require!(!self.signers(&signer).is_empty(), ERR_SIGNER_NOT_FOUND);
        require!(new_status.len() <= MAX_STATUS_LEN, ERR_STATUS_TOO_LONG);

        self.signers(&signer)
            .update(|profile| profile.verification_status = new_status.clone());

        self.verification_status_changed_event(&signer, &caller, &new_status);
    }

    fn require_valid_signer_data(
        &self,
        name: &ManagedBuffer,
        contact: &ManagedBuffer,
        location: &ManagedBuffer,
        website: &ManagedBuffer,
        capabilities: &ManagedBuffer,
    ) {
        require!(
            !name.is_empty() && !contact.is_empty(),
            ERR_INVALID_SIGNER_DATA
        );
        require!(
            name.len() <= MAX_NAME_LEN
                && contact.len() <= MAX_CONTACT_LEN
                && location.len() <= MAX_LOCATION_LEN
                && website.len() <= MAX_WEBSITE_LEN
                && capabilities.len() <= MAX_CAPABILITIES_LEN,
            ERR_INVALID_SIGNER_DATA
        );
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getSigner)]
    fn get_signer(&self, signer: &ManagedAddress) -> OptionalValue<SignerProfile<Self::Api>> {
        let mapper = self.signers(signer);
        if mapper.is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(mapper.get())
    }

    #[view(getTotalSigners)]
    fn get_total_signers(&self) -> u64 {
        self.total_signers().get()
    }

    #[view(getAllSigners)]
    fn get_all_signers(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for signer in self.signer_index().iter() {
            result.push(signer);
        }
        result
    }

    #[view(isRegistered)]
    fn is_registered(&self, signer: &ManagedAddress) -> bool {
        !self.signers(signer).is_empty()
    }

    #[view(getActiveSignerCount)]
    fn get_active_signer_count(&self) -> u64 {
        self.signer_index()
            .iter()
            .filter(|signer| self.signers(signer).get().is_active)
            .count() as u64
    }

    #[view(getVerifiedSignerCount)]
    fn get_verified_signer_count(&self) -> u64 {
        let verified = ManagedBuffer::from(STATUS_VERIFIED);
        self.signer_index()
            .iter()
            .filter(|signer| self.signers(signer).get().has_status(&verified))
            .count() as u64
    }

    /// Signers whose current status equals `status`, in registration order.
    #[view(getSignersByStatus)]
    fn get_signers_by_status(&self, status: ManagedBuffer) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for signer in self.signer_index().iter() {
            if self.signers(&signer).get().has_status(&status) {
                result.push(signer);
            }
        }
        result
    }

    #[view(getRegistryAdmin)]
    fn get_registry_admin(&self) -> ManagedAddress {
        self.registry_admin().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("signerRegistered")]
    fn signer_registered_event(&self, #[indexed] signer: &ManagedAddress, height: u64);

    #[event("signerUpdated")]
    fn signer_updated_event(&self, #[indexed] signer: &ManagedAddress);

    #[event("signerDeactivated")]
    fn signer_deactivated_event(&self, #[indexed] signer: &ManagedAddress);

    #[event("verificationStatusChanged")]
    fn verification_status_changed_event(
        &self,
        #[indexed] signer: &ManagedAddress,
        #[indexed] admin: &ManagedAddress,
        status: &ManagedBuffer,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("registryAdmin")]
    fn registry_admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("signers")]
    fn signers(&self, signer: &ManagedAddress) -> SingleValueMapper<SignerProfile<Self::Api>>;

    #[storage_mapper("signerIndex")]
    fn signer_index(&self) -> VecMapper<ManagedAddress>;

    #[storage_mapper("totalSigners")]
    fn total_signers(&self) -> SingleValueMapper<u64>;
}
