multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_FINALIZED, ERR_ALREADY_VOTED, ERR_DESCRIPTION_TOO_LONG, ERR_INSUFFICIENT_VOTES,
    ERR_INVALID_INTENT, ERR_PROPOSAL_EXPIRED, ERR_PROPOSAL_INDEX_FULL, ERR_PROPOSAL_NOT_ACTIVE,
    ERR_PROPOSAL_NOT_FOUND, ERR_PROPOSAL_STILL_OPEN,
};
use crate::types::{Proposal, ProposalIntent, ProposalResults, ProposalStatus, VoteRecord};

// ============================================================
// Constants
// ============================================================

/// Voting window in blocks (~1 week at 10 minute blocks)
pub const VOTING_PERIOD: u64 = 1_008;

/// Quorum — minimum yes + no votes before a proposal can be finalized
pub const MIN_VOTES_REQUIRED: u64 = 3;

/// Minimum yes percentage (of votes cast) for a proposal to pass
pub const APPROVAL_THRESHOLD: u64 = 60;

/// Capacity of the proposal index
pub const MAX_PROPOSALS: usize = 1_000;

pub const MAX_DESCRIPTION_LEN: usize = 500;

/// floor(yes * 100 / total), 0 when nobody voted.
pub fn approval_rate(yes_votes: u64, no_votes: u64) -> u64 {
    let total = yes_votes + no_votes;
    if total == 0 {
        return 0;
    }
    yes_votes * 100 / total
}

/// The finalize gate: quorum met and approval rate at or above threshold.
pub fn meets_threshold(yes_votes: u64, no_votes: u64) -> bool {
    yes_votes + no_votes >= MIN_VOTES_REQUIRED
        && approval_rate(yes_votes, no_votes) >= APPROVAL_THRESHOLD
}

#[multiversx_sc::module]
pub trait GovernanceModule {
    // ========================================================
    // ENDPOINT: createProposal
    // Anyone can propose a verification change for a signer.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        target_signer: ManagedAddress,
        intent: ManagedBuffer,
        description: ManagedBuffer,
    ) -> u64 {
        let caller = self.blockchain().get_caller();

        let intent = match ProposalIntent::from_name(&intent) {
            Some(intent) => intent,
            None => sc_panic!(ERR_INVALID_INTENT),
        };
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            ERR_DESCRIPTION_TOO_LONG
        );
        require!(
            self.proposal_index().len() < MAX_PROPOSALS,
            ERR_PROPOSAL_INDEX_FULL
        );

        let proposal_id = self.proposal_counter().get();
        let height = self.blockchain().get_block_nonce();

        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            target_signer: target_signer.clone(),
            intent,
            description,
            start_height: height,
            end_height: height + VOTING_PERIOD,
            yes_votes: 0,
            no_votes: 0,
            status: ProposalStatus::Active,
            created_at: height,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_index().push(&proposal_id);
        self.proposal_counter().set(proposal_id + 1);
        self.eligible_voters().insert(caller.clone());

        self.proposal_created_event(proposal_id, &caller, &target_signer, intent, height);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // One unweighted yes/no vote per address per proposal.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, choice: bool) {
        let caller = self.blockchain().get_caller();
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );

        let mut proposal = self.proposals(proposal_id).get();
        require!(proposal.status.is_active(), ERR_PROPOSAL_NOT_ACTIVE);

        // Status stays Active until finalize runs, so the window is checked here
        let height = self.blockchain().get_block_nonce();
        require!(height <= proposal.end_height, ERR_PROPOSAL_EXPIRED);
        require!(
            self.votes(proposal_id, &caller).is_empty(),
            ERR_ALREADY_VOTED
        );

        if choice {
            proposal.yes_votes += 1;
        } else {
            proposal.no_votes += 1;
        }

        self.votes(proposal_id, &caller).set(VoteRecord {
            choice,
            cast_at: height,
        });
        self.proposals(proposal_id).set(&proposal);
        self.eligible_voters().insert(caller.clone());

        self.vote_cast_event(proposal_id, &caller, choice, height);
    }

    // ========================================================
    // ENDPOINT: finalizeProposal
    // Called after the window closes. Active → Passed or Failed, once.
    // Fails without touching state while quorum is not met.
    // ========================================================

    #[endpoint(finalizeProposal)]
    fn finalize_proposal(&self, proposal_id: u64) -> ProposalStatus {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );

        let mut proposal = self.proposals(proposal_id).get();

        let height = self.blockchain().get_block_nonce();
        require!(height > proposal.end_height, ERR_PROPOSAL_STILL_OPEN);
        require!(proposal.status.is_active(), ERR_ALREADY_FINALIZED);
        require!(
            proposal.total_votes() >= MIN_VOTES_REQUIRED,
            ERR_INSUFFICIENT_VOTES
        );

        let rate = approval_rate(proposal.yes_votes, proposal.no_votes);
        proposal.status = if rate >= APPROVAL_THRESHOLD {
            ProposalStatus::Passed
        } else {
            ProposalStatus::Failed
        };
        self.proposals(proposal_id).set(&proposal);

        self.proposal_finalized_event(proposal_id, proposal.status, rate);

        proposal.status
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> OptionalValue<Proposal<Self::Api>> {
        let mapper = self.proposals(proposal_id);
        if mapper.is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(mapper.get())
    }

    #[view(getVote)]
    fn get_vote(&self, proposal_id: u64, voter: &ManagedAddress) -> OptionalValue<VoteRecord> {
        let mapper = self.votes(proposal_id, voter);
        if mapper.is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(mapper.get())
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> bool {
        !self.votes(proposal_id, voter).is_empty()
    }

    #[view(getAllProposals)]
    fn get_all_proposals(&self) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for proposal_id in self.proposal_index().iter() {
            result.push(proposal_id);
        }
        result
    }

    /// Proposals that still accept votes at the current block.
    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        let height = self.blockchain().get_block_nonce();

        for proposal_id in self.proposal_index().iter() {
            if self.proposals(proposal_id).is_empty() {
                continue;
            }
            if self.proposals(proposal_id).get().is_open_at(height) {
                result.push(proposal_id);
            }
        }
        result
    }

    /// Advisory tally. `meets_threshold` may disagree with the stored
    /// status until the proposal is finalized.
    #[view(getProposalResults)]
    fn get_proposal_results(&self, proposal_id: u64) -> OptionalValue<ProposalResults> {
        let mapper = self.proposals(proposal_id);
        if mapper.is_empty() {
            return OptionalValue::None;
        }

        let proposal = mapper.get();
        OptionalValue::Some(ProposalResults {
            yes_votes: proposal.yes_votes,
            no_votes: proposal.no_votes,
            total_votes: proposal.total_votes(),
            approval_rate: approval_rate(proposal.yes_votes, proposal.no_votes),
            status: proposal.status,
            meets_threshold: meets_threshold(proposal.yes_votes, proposal.no_votes),
        })
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_counter().get()
    }

    #[view(isEligibleVoter)]
    fn is_eligible_voter(&self, address: &ManagedAddress) -> bool {
        self.eligible_voters().contains(address)
    }

    #[view(getEligibleVoterCount)]
    fn get_eligible_voter_count(&self) -> u64 {
        self.eligible_voters().len() as u64
    }

    #[view(getGovernanceConfig)]
    fn get_governance_config(&self) -> MultiValue4<u64, u64, u64, u64> {
        (
            VOTING_PERIOD,
            MIN_VOTES_REQUIRED,
            APPROVAL_THRESHOLD,
            MAX_PROPOSALS as u64,
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] target_signer: &ManagedAddress,
        #[indexed] intent: ProposalIntent,
        height: u64,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] choice: bool,
        height: u64,
    );

    #[event("proposalFinalized")]
    fn proposal_finalized_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] status: ProposalStatus,
        approval_rate: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("proposalCounter")]
    fn proposal_counter(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("proposalIndex")]
    fn proposal_index(&self) -> VecMapper<u64>;

    #[storage_mapper("votes")]
    fn votes(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<VoteRecord>;

    // Informational only; voting is not gated on membership.
    #[storage_mapper("eligibleVoters")]
    fn eligible_voters(&self) -> UnorderedSetMapper<ManagedAddress>;
}
