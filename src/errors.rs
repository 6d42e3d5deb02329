// User-facing error messages. Every failure aborts the call and reverts its writes.

// ── NotAuthorized ──
pub const ERR_NOT_AUTHORIZED: &str = "Caller is not the registry admin";
pub const ERR_INVALID_INTENT: &str = "Invalid proposal intent";

// ── NotFound ──
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";
pub const ERR_SIGNER_NOT_FOUND: &str = "Signer not registered";

// ── AlreadyExists ──
pub const ERR_ALREADY_REGISTERED: &str = "Signer already registered";
pub const ERR_ALREADY_VOTED: &str = "Already voted";

// ── InvalidState ──
pub const ERR_PROPOSAL_NOT_ACTIVE: &str = "Proposal is not active";
pub const ERR_PROPOSAL_EXPIRED: &str = "Voting period has expired";
pub const ERR_PROPOSAL_STILL_OPEN: &str = "Voting period has not ended";
pub const ERR_ALREADY_FINALIZED: &str = "Proposal already finalized";

// ── InvalidData ──
pub const ERR_INVALID_SIGNER_DATA: &str = "Invalid signer data";
pub const ERR_DESCRIPTION_TOO_LONG: &str = "Description too long";
pub const ERR_STATUS_TOO_LONG: &str = "Verification status too long";

// ── CapacityExceeded ──
pub const ERR_PROPOSAL_INDEX_FULL: &str = "Proposal index full";
pub const ERR_SIGNER_INDEX_FULL: &str = "Signer index full";

// Retryable: finalize may be called again later.
pub const ERR_INSUFFICIENT_VOTES: &str = "Insufficient votes to finalize";
