use crate::types::Point;

/// Why `apply_move` refused a move. The board is unchanged when one of
/// these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("illegal move at {0}: point is occupied")]
    Occupied(Point),

    #[error("illegal move at {0}: point is off the board")]
    OutOfBounds(Point),

    #[error("illegal move at {0}: suicide")]
    Suicidal(Point),

    #[error("illegal move at {0}: retakes ko")]
    Ko(Point),
}

/// A broken connectivity invariant. These indicate a bug in the board
/// bookkeeping; evaluation results are meaningless once one occurs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("stone at {0} has no owning chain")]
    StoneWithoutChain(Point),

    #[error("stone at {0} is claimed by a chain that does not list it")]
    ChainMembershipMismatch(Point),

    #[error("chain containing {0} holds stones of another color or an empty point")]
    MixedChain(Point),

    #[error("chain containing {0} is not connected")]
    DisconnectedChain(Point),

    #[error("chain containing {0} has no liberties")]
    ZeroLiberties(Point),

    #[error("chain containing {0} belongs to no group")]
    ChainWithoutGroup(Point),

    #[error("chain containing {0} is listed by a group other than its own")]
    ChainInTwoGroups(Point),

    #[error("empty {0} left in the arena")]
    EmptyEntity(&'static str),

    #[error("point {0} references a stale {1}")]
    StaleHandle(Point, &'static str),

    #[error("scratch visited set left with {0} marks")]
    ScratchNotClear(usize),

    #[error("incremental position hash does not match the stones on the board")]
    HashMismatch,

    #[error("undo of move {found} requested but the last move is {expected}")]
    UndoOutOfOrder { expected: usize, found: usize },

    #[error("undo expected a stone of the mover at {0}")]
    UndoMismatch(Point),

    #[error("captured stone at {0} cannot be restored: point is occupied")]
    CaptureMismatch(Point),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
