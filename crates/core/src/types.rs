use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use thiserror::Error;

use crate::config::ConfigError;

new_key_type! {
    pub struct MonsterId;
}

/// Index of a player in the session roster. Player `0` renders as `'1'`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn symbol(self) -> char {
        char::from(b'1' + self.0)
    }
}

/// Grid coordinate; `y` is the row and `x` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Self {
        let (dy, dx) = direction.delta();
        Self { y: self.y + dy, x: self.x + dx }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    Empty,
    Wall,
    Obstacle,
    Teleporter,
    Goal,
    Player(PlayerId),
    Monster,
}

impl CellKind {
    pub fn symbol(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Wall => '#',
            Self::Obstacle => 'X',
            Self::Teleporter => 'T',
            Self::Goal => 'G',
            Self::Player(id) => id.symbol(),
            Self::Monster => 'M',
        }
    }

    pub fn is_player(self) -> bool {
        matches!(self, Self::Player(_))
    }

    /// Cells a player can never step onto.
    pub fn blocks_movement(self) -> bool {
        matches!(self, Self::Wall | Self::Obstacle | Self::Player(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Left, Self::Down, Self::Right];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Left => (0, -1),
            Self::Down => (1, 0),
            Self::Right => (0, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    Attack,
    Regenerate,
    Status,
}

impl Command {
    pub fn from_token(token: char) -> Result<Self, GameError> {
        match token {
            'w' => Ok(Self::Move(Direction::Up)),
            'a' => Ok(Self::Move(Direction::Left)),
            's' => Ok(Self::Move(Direction::Down)),
            'd' => Ok(Self::Move(Direction::Right)),
            'k' => Ok(Self::Attack),
            'r' => Ok(Self::Regenerate),
            'p' => Ok(Self::Status),
            other => Err(GameError::UnknownCommand(other)),
        }
    }

    pub fn token(self) -> char {
        match self {
            Self::Move(Direction::Up) => 'w',
            Self::Move(Direction::Left) => 'a',
            Self::Move(Direction::Down) => 's',
            Self::Move(Direction::Right) => 'd',
            Self::Attack => 'k',
            Self::Regenerate => 'r',
            Self::Status => 'p',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerStatus {
    pub player: PlayerId,
    pub health: i32,
    pub has_sword: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { to: Pos },
    Teleported { via: Pos, to: Pos },
}

impl MoveOutcome {
    pub fn final_pos(self) -> Pos {
        match self {
            Self::Moved { to } | Self::Teleported { to, .. } => to,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackOutcome {
    Hit { monster: MonsterId, remaining_health: i32 },
    Defeated { monster: MonsterId },
    NoMonsterPresent,
}

/// What a resolved command did, as seen by the acting player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Moved {
        movement: MoveOutcome,
        combat: Option<AttackOutcome>,
        regenerated: Option<i32>,
    },
    ReachedGoal { level: u8 },
    Attacked(AttackOutcome),
    Regenerated(Option<i32>),
    Status(PlayerStatus),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Playing { level: u8 },
    Finished,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("invalid move")]
    MoveBlocked,
    #[error("invalid command '{0}'")]
    UnknownCommand(char),
    #[error("a sword is required to attack")]
    NoEquipmentForAttack,
    #[error("all levels are complete")]
    GameOver,
    #[error("level generation failed: {0}")]
    Generation(#[from] ConfigError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    LevelStarted { level: u8, size: usize },
    PlayerMoved { player: PlayerId, to: Pos },
    PlayerTeleported { player: PlayerId, from: Pos, to: Pos },
    MonsterAttacked { player: PlayerId, monster: MonsterId, remaining_health: i32 },
    MonsterDefeated { player: PlayerId, monster: MonsterId },
    HealthRegenerated { player: PlayerId, health: i32 },
    GoalReached { player: PlayerId, level: u8 },
    GameCompleted,
}
