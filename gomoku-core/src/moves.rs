//! 走法

use serde::{Deserialize, Serialize};

use crate::cell::Position;

/// 候选走法
///
/// `score` 只用于排序和诊断，不属于对局状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 落子位置
    pub pos: Position,
    /// 排序分值
    pub score: i32,
}

impl Move {
    /// 创建新走法
    pub fn new(pos: Position, score: i32) -> Self {
        Self { pos, score }
    }

    #[inline]
    pub fn row(&self) -> u8 {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> u8 {
        self.pos.col
    }
}

impl From<Position> for Move {
    fn from(pos: Position) -> Self {
        Self::new(pos, 0)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.pos, self.score)
    }
}
