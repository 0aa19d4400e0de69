/// One candidate's ballot.
///
/// Deliberately three-state: a plain "selected" boolean cannot distinguish
/// a down-vote from no vote at all.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Ballot {
    NotVoted,
    VotedUp,
    VotedDown,
}

impl Ballot {
    /// True only for a positive vote.
    pub fn selected(self) -> bool {
        self == Ballot::VotedUp
    }

    /// True once either vote has been cast; never reverts.
    pub fn user_voted(self) -> bool {
        self != Ballot::NotVoted
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    pub asset_path: String,
}

impl Candidate {
    pub fn new(id: u32, name: impl Into<String>, asset_path: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            asset_path: asset_path.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub id: u32,
    pub name: String,
    pub asset_path: String,
    pub ballot: Ballot,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VoteError {
    UnknownId(u32),
}

impl std::fmt::Display for VoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoteError::UnknownId(id) => write!(f, "no candidate with id {id}"),
        }
    }
}

impl std::error::Error for VoteError {}

/// In-memory ballot box for one page visit.
///
/// The candidate set is fixed at construction; the only mutations are the
/// two vote actions, which are last-write-wins per candidate. Nothing is
/// persisted; the session is dropped on navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteSession {
    votes: Vec<Vote>,
}

impl VoteSession {
    pub fn new(candidates: impl IntoIterator<Item = Candidate>) -> Self {
        Self {
            votes: candidates
                .into_iter()
                .map(|c| Vote {
                    id: c.id,
                    name: c.name,
                    asset_path: c.asset_path,
                    ballot: Ballot::NotVoted,
                })
                .collect(),
        }
    }

    pub fn votes(&self) -> &[Vote] {
        &self.votes
    }

    pub fn vote_up(&mut self, id: u32) -> Result<(), VoteError> {
        self.cast(id, Ballot::VotedUp)
    }

    pub fn vote_down(&mut self, id: u32) -> Result<(), VoteError> {
        self.cast(id, Ballot::VotedDown)
    }

    fn cast(&mut self, id: u32, ballot: Ballot) -> Result<(), VoteError> {
        let vote = self
            .votes
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(VoteError::UnknownId(id))?;
        vote.ballot = ballot;
        Ok(())
    }

    /// Candidates the user has voted on either way.
    pub fn vote_count(&self) -> usize {
        self.votes.iter().filter(|v| v.ballot.user_voted()).count()
    }

    pub fn all_voted(&self) -> bool {
        self.votes.iter().all(|v| v.ballot.user_voted())
    }
}

#[cfg(test)]
mod tests {
    use super::{Ballot, Candidate, VoteError, VoteSession};

    fn five_candidates() -> Vec<Candidate> {
        (1..=5)
            .map(|id| Candidate::new(id, format!("Pillow {id}"), "/BodyPillow.glb"))
            .collect()
    }

    #[test]
    fn vote_up_marks_only_that_candidate() {
        let mut session = VoteSession::new(five_candidates());
        session.vote_up(2).expect("vote");

        let votes = session.votes();
        assert_eq!(votes[1].id, 2);
        assert_eq!(votes[1].ballot, Ballot::VotedUp);
        assert!(votes[1].ballot.selected());
        assert!(votes[1].ballot.user_voted());
        for vote in votes.iter().filter(|v| v.id != 2) {
            assert_eq!(vote.ballot, Ballot::NotVoted);
        }
    }

    #[test]
    fn mixed_votes_count_without_completing() {
        let mut session = VoteSession::new(five_candidates());
        session.vote_down(1).expect("vote");
        session.vote_up(2).expect("vote");
        session.vote_down(3).expect("vote");

        assert_eq!(session.vote_count(), 3);
        assert!(!session.all_voted());
    }

    #[test]
    fn last_write_wins_but_participation_sticks() {
        let mut session = VoteSession::new(five_candidates());
        session.vote_up(4).expect("vote");
        session.vote_down(4).expect("vote");

        let vote = &session.votes()[3];
        assert_eq!(vote.ballot, Ballot::VotedDown);
        assert!(!vote.ballot.selected());
        assert!(vote.ballot.user_voted());
    }

    #[test]
    fn voting_on_every_candidate_completes_the_session() {
        let mut session = VoteSession::new(five_candidates());
        for id in 1..=5 {
            session.vote_up(id).expect("vote");
        }
        assert!(session.all_voted());
        assert_eq!(session.vote_count(), 5);
    }

    #[test]
    fn unknown_id_is_an_error_and_a_no_op() {
        let mut session = VoteSession::new(five_candidates());
        assert_eq!(session.vote_up(99), Err(VoteError::UnknownId(99)));
        assert_eq!(session.vote_count(), 0);
    }

    #[test]
    fn repeated_up_vote_is_idempotent() {
        let mut session = VoteSession::new(five_candidates());
        session.vote_up(1).expect("vote");
        session.vote_up(1).expect("vote");
        assert_eq!(session.votes()[0].ballot, Ballot::VotedUp);
        assert_eq!(session.vote_count(), 1);
    }
}
