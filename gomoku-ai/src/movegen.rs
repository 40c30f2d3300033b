//! 候选走法生成
//!
//! 只考虑与已有棋子相邻的空位，紧急点强制加入，按启发分值降序排列并截断。
//! 排序和紧急点优先级都以 AI 为准，与当前轮到哪一方无关。

use gomoku_core::{Board, Move, Position, Side};

use crate::evaluate::Evaluator;
use crate::tactics::{find_immediate_threat, ImmediateThreat, ThreatKind};

/// 默认候选数量上限
pub const MAX_CANDIDATES: usize = 20;

/// AI 成五点的优先级
pub const PRIORITY_WIN: i32 = 40_000_000;

/// 对手成五点的优先级
pub const PRIORITY_BLOCK_WIN: i32 = 30_000_000;

/// AI 冲四点的优先级
pub const PRIORITY_FOUR: i32 = 20_000_000;

/// 对手冲四点的优先级
pub const PRIORITY_BLOCK_FOUR: i32 = 10_000_000;

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成候选走法，最多 `cap` 个（紧急点总是保留）
    ///
    /// `ai` 是引擎执子方：普通空位按 `score_at(ai)` 排序，AI 的成五点优先级最高。
    pub fn generate(board: &Board, ai: Side, cap: usize) -> Vec<Move> {
        if board.is_empty() {
            return vec![Move::new(board.center(), 0)];
        }

        let mut forced = Vec::with_capacity(2);
        if let Some(threat) = find_immediate_threat(board, ai.opponent()) {
            forced.push(Move::new(threat.pos, Self::defence_priority(threat)));
        }
        if let Some(threat) = find_immediate_threat(board, ai) {
            let priority = Self::attack_priority(threat);
            match forced.iter_mut().find(|m| m.pos == threat.pos) {
                Some(existing) => existing.score = existing.score.max(priority),
                None => forced.push(Move::new(threat.pos, priority)),
            }
        }

        let mut moves: Vec<Move> = board
            .empty_positions()
            .filter(|&pos| board.has_occupied_neighbor(pos))
            .filter(|pos| !forced.iter().any(|m| m.pos == *pos))
            .map(|pos| Move::new(pos, Evaluator::score_at(board, ai, pos)))
            .collect();

        let keep = cap.max(forced.len());
        moves.extend(forced);
        // 稳定排序，同分时保持行优先顺序
        moves.sort_by(|a, b| b.score.cmp(&a.score));
        moves.truncate(keep);
        moves
    }

    /// 只取候选位置
    pub fn positions(board: &Board, ai: Side, cap: usize) -> Vec<Position> {
        Self::generate(board, ai, cap)
            .into_iter()
            .map(|m| m.pos)
            .collect()
    }

    fn attack_priority(threat: ImmediateThreat) -> i32 {
        match threat.kind {
            ThreatKind::Win => PRIORITY_WIN,
            ThreatKind::CriticalFour => PRIORITY_FOUR,
        }
    }

    fn defence_priority(threat: ImmediateThreat) -> i32 {
        match threat.kind {
            ThreatKind::Win => PRIORITY_BLOCK_WIN,
            ThreatKind::CriticalFour => PRIORITY_BLOCK_FOUR,
        }
    }
}
