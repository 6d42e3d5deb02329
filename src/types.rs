multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub const INTENT_VERIFY: &[u8] = b"verify";
pub const INTENT_REJECT: &[u8] = b"reject";
pub const INTENT_REMOVE: &[u8] = b"remove";

pub const STATUS_PENDING: &[u8] = b"pending";
pub const STATUS_VERIFIED: &[u8] = b"verified";

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Voting window open or awaiting finalization.
    Active,
    /// Quorum met and approval rate at or above threshold. Terminal.
    Passed,
    /// Quorum met but approval rate below threshold. Terminal.
    Failed,
}

impl ProposalStatus {
    pub fn is_active(&self) -> bool {
        *self == ProposalStatus::Active
    }
}

// ============================================================
// Proposal Intent — what the proposer wants done to the signer
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalIntent {
    Verify,
    Reject,
    Remove,
}

impl ProposalIntent {
    /// Parses the textual intent accepted by `createProposal`.
    pub fn from_name<M: ManagedTypeApi>(name: &ManagedBuffer<M>) -> Option<Self> {
        [
            ProposalIntent::Verify,
            ProposalIntent::Reject,
            ProposalIntent::Remove,
        ]
        .into_iter()
        .find(|intent| *name == ManagedBuffer::<M>::from(intent.name()))
    }

    pub fn name(&self) -> &'static [u8] {
        match self {
            ProposalIntent::Verify => INTENT_VERIFY,
            ProposalIntent::Reject => INTENT_REJECT,
            ProposalIntent::Remove => INTENT_REMOVE,
        }
    }
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    /// Signer institution the proposal is about
    pub target_signer: ManagedAddress<M>,
    pub intent: ProposalIntent,
    pub description: ManagedBuffer<M>,
    /// Block nonce at which voting opens
    pub start_height: u64,
    /// Last block nonce at which votes are accepted
    pub end_height: u64,
    pub yes_votes: u64,
    pub no_votes: u64,
    pub status: ProposalStatus,
    pub created_at: u64,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn total_votes(&self) -> u64 {
        self.yes_votes + self.no_votes
    }

    pub fn is_open_at(&self, height: u64) -> bool {
        self.status.is_active() && height <= self.end_height
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VoteRecord {
    /// true = yes, false = no
    pub choice: bool,
    pub cast_at: u64,
}

/// Tally snapshot returned by `getProposalResults`. Never stored.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ProposalResults {
    pub yes_votes: u64,
    pub no_votes: u64,
    pub total_votes: u64,
    pub approval_rate: u64,
    pub status: ProposalStatus,
    pub meets_threshold: bool,
}

// ============================================================
// Signer Profile — institution registry record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct SignerProfile<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub contact: ManagedBuffer<M>,
    pub location: ManagedBuffer<M>,
    pub website: ManagedBuffer<M>,
    pub capabilities: ManagedBuffer<M>,
    /// Admin-controlled. "pending" on registration; free-form afterwards.
    pub verification_status: ManagedBuffer<M>,
    pub registered_at: u64,
    pub is_active: bool,
}

impl<M: ManagedTypeApi> SignerProfile<M> {
    pub fn has_status(&self, status: &ManagedBuffer<M>) -> bool {
        self.verification_status == *status
    }
}
