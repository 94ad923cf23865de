use soroban_sdk::{testutils::Address as _, Address, Env, String};
use voting::{VotingContract, VotingContractClient, VotingError, WorkflowStatus};

struct Ballot<'a> {
    env: Env,
    client: VotingContractClient<'a>,
    admin: Address,
}

impl<'a> Ballot<'a> {
    fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let contract_id = env.register(VotingContract, (admin.clone(),));
        let client = VotingContractClient::new(&env, &contract_id);

        Ballot { env, client, admin }
    }

    fn voter(&self) -> Address {
        let voter = Address::generate(&self.env);
        self.client.register_voter(&self.admin, &voter);
        voter
    }

    fn propose(&self, voter: &Address, description: &str) -> u32 {
        self.client
            .add_proposal(voter, &String::from_str(&self.env, description))
    }

    fn total_votes(&self, reader: &Address) -> u32 {
        let count = self.client.get_proposal_count();
        self.client
            .get_proposals(reader, &0, &count)
            .iter()
            .map(|proposal| proposal.vote_count)
            .sum()
    }
}

#[test]
fn two_voters_elect_the_same_proposal() {
    let ballot = Ballot::new();
    let client = &ballot.client;
    let admin = &ballot.admin;

    let a = ballot.voter();
    let b = ballot.voter();

    client.start_proposals_registration(admin);
    assert_eq!(client.get_proposal(&a, &0).description, String::from_str(&ballot.env, ""));

    assert_eq!(ballot.propose(&a, "Proposal X"), 1);
    assert_eq!(ballot.propose(&b, "Proposal Y"), 2);

    client.end_proposals_registration(admin);
    client.start_voting_session(admin);

    client.cast_vote(&a, &2);
    client.cast_vote(&b, &2);

    client.end_voting_session(admin);
    client.tally_votes(admin);

    let winner = client.get_winner();
    assert_eq!(winner.id, 2);
    assert_eq!(winner.vote_count, 2);
    assert_eq!(winner.description, String::from_str(&ballot.env, "Proposal Y"));
    assert_eq!(client.get_workflow_status(), WorkflowStatus::VotesTallied);
}

#[test]
fn three_way_tie_is_won_by_the_first_proposal() {
    let ballot = Ballot::new();
    let client = &ballot.client;
    let admin = &ballot.admin;

    let voters = [ballot.voter(), ballot.voter(), ballot.voter()];

    client.start_proposals_registration(admin);
    for (i, voter) in voters.iter().enumerate() {
        let id = ballot.propose(voter, "candidate");
        assert_eq!(id, i as u32 + 1);
    }

    client.end_proposals_registration(admin);
    client.start_voting_session(admin);
    client.cast_vote(&voters[0], &2);
    client.cast_vote(&voters[1], &3);
    client.cast_vote(&voters[2], &1);
    client.end_voting_session(admin);

    assert_eq!(client.tally_votes(admin), 1);
    assert_eq!(client.get_winner().id, 1);
}

#[test]
fn vote_totals_match_voters_who_voted() {
    let ballot = Ballot::new();
    let client = &ballot.client;
    let admin = &ballot.admin;

    let voters = [
        ballot.voter(),
        ballot.voter(),
        ballot.voter(),
        ballot.voter(),
    ];

    client.start_proposals_registration(admin);
    ballot.propose(&voters[0], "Proposal X");
    ballot.propose(&voters[1], "Proposal Y");
    client.end_proposals_registration(admin);
    client.start_voting_session(admin);

    client.cast_vote(&voters[0], &1);
    client.cast_vote(&voters[1], &2);
    client.cast_vote(&voters[2], &1);

    // Rejected calls leave the totals alone.
    assert_eq!(
        client.try_cast_vote(&voters[0], &2),
        Err(Ok(VotingError::AlreadyVoted))
    );
    assert_eq!(
        client.try_cast_vote(&voters[3], &99),
        Err(Ok(VotingError::ProposalNotFound))
    );

    let voted = voters
        .iter()
        .filter(|voter| client.get_voter(&voters[0], voter).has_voted)
        .count() as u32;
    assert_eq!(voted, 3);
    assert_eq!(ballot.total_votes(&voters[0]), voted);
}

#[test]
fn winner_is_stable_after_tally() {
    let ballot = Ballot::new();
    let client = &ballot.client;
    let admin = &ballot.admin;

    let a = ballot.voter();
    client.start_proposals_registration(admin);
    ballot.propose(&a, "Proposal X");
    client.end_proposals_registration(admin);
    client.start_voting_session(admin);
    client.cast_vote(&a, &1);
    client.end_voting_session(admin);

    assert_eq!(
        client.try_get_winner(),
        Err(Ok(VotingError::TallyNotDone))
    );

    client.tally_votes(admin);
    let first = client.get_winner();

    assert_eq!(
        client.try_tally_votes(admin),
        Err(Ok(VotingError::PhaseViolation))
    );
    assert_eq!(client.get_winner(), first);
    assert_eq!(client.get_winning_proposal_id(), 1);
}
