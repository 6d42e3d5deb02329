// Shared whitebox harness for the signer governance contract tests.

#![allow(dead_code)]

use multiversx_sc::types::Address;
use multiversx_sc_scenario::{
    api::DebugApi, managed_address, managed_buffer, rust_biguint, whitebox_legacy::*,
};
use signer_governance::{
    governance::GovernanceModule, signer_directory::SignerDirectoryModule, SignerGovernance,
};

pub const WASM_PATH: &str = "output/signer-governance.wasm";

pub struct GovernanceSetup<Builder>
where
    Builder: 'static + Copy + Fn() -> signer_governance::ContractObj<DebugApi>,
{
    pub b_mock: BlockchainStateWrapper,
    pub admin: Address,
    pub sc: ContractObjWrapper<signer_governance::ContractObj<DebugApi>, Builder>,
}

impl<Builder> GovernanceSetup<Builder>
where
    Builder: 'static + Copy + Fn() -> signer_governance::ContractObj<DebugApi>,
{
    pub fn new(builder: Builder) -> Self {
        let rust_zero = rust_biguint!(0);
        let mut b_mock = BlockchainStateWrapper::new();
        let admin = b_mock.create_user_account(&rust_zero);
        let sc = b_mock.create_sc_account(&rust_zero, Some(&admin), builder, WASM_PATH);

        b_mock
            .execute_tx(&admin, &sc, &rust_zero, |sc| {
                sc.init();
            })
            .assert_ok();

        Self { b_mock, admin, sc }
    }

    pub fn new_user(&mut self) -> Address {
        self.b_mock.create_user_account(&rust_biguint!(0))
    }

    pub fn new_users(&mut self, count: usize) -> Vec<Address> {
        (0..count).map(|_| self.new_user()).collect()
    }

    pub fn set_height(&mut self, height: u64) {
        self.b_mock.set_block_nonce(height);
    }

    // ── Proposal engine ──

    pub fn create_proposal(
        &mut self,
        proposer: &Address,
        target: &Address,
        intent: &[u8],
        description: &[u8],
    ) -> TxResult {
        self.b_mock
            .execute_tx(proposer, &self.sc, &rust_biguint!(0), |sc| {
                sc.create_proposal(
                    managed_address!(target),
                    managed_buffer!(intent),
                    managed_buffer!(description),
                );
            })
    }

    pub fn create_proposal_ok(&mut self, proposer: &Address, target: &Address) -> u64 {
        let mut proposal_id = u64::MAX;
        self.b_mock
            .execute_tx(proposer, &self.sc, &rust_biguint!(0), |sc| {
                proposal_id = sc.create_proposal(
                    managed_address!(target),
                    managed_buffer!(b"verify"),
                    managed_buffer!(b"Audited key ceremony"),
                );
            })
            .assert_ok();
        proposal_id
    }

    pub fn vote(&mut self, voter: &Address, proposal_id: u64, choice: bool) -> TxResult {
        self.b_mock
            .execute_tx(voter, &self.sc, &rust_biguint!(0), |sc| {
                sc.vote(proposal_id, choice);
            })
    }

    pub fn finalize(&mut self, caller: &Address, proposal_id: u64) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.sc, &rust_biguint!(0), |sc| {
                sc.finalize_proposal(proposal_id);
            })
    }

    // ── Signer directory ──

    pub fn register(&mut self, signer: &Address, name: &[u8], contact: &[u8]) -> TxResult {
        self.b_mock
            .execute_tx(signer, &self.sc, &rust_biguint!(0), |sc| {
                sc.register_signer(
                    managed_buffer!(name),
                    managed_buffer!(contact),
                    managed_buffer!(b"Zurich"),
                    managed_buffer!(b"https://signer.example"),
                    managed_buffer!(b"threshold signing"),
                );
            })
    }

    pub fn set_status(&mut self, caller: &Address, signer: &Address, status: &[u8]) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.sc, &rust_biguint!(0), |sc| {
                sc.set_verification_status(managed_address!(signer), managed_buffer!(status));
            })
    }

    pub fn deactivate(&mut self, signer: &Address) -> TxResult {
        self.b_mock
            .execute_tx(signer, &self.sc, &rust_biguint!(0), |sc| {
                sc.deactivate_signer();
            })
    }
}
