//! 局面评估函数

use gomoku_core::{Board, Position, Side};

use crate::tactics::{find_immediate_threat, ThreatKind};
use crate::threat::{combination_bonus, threats_at, ThreatType};

/// 已分胜负的局面分值
pub const WIN_SCORE: i32 = 1_000_000;

/// 一步杀的战术修正，不低于成五的分值
pub const TACTICAL_BONUS: i32 = ThreatType::Five.cost();

/// 达到该分值视为必胜（成五分值的 90%）
pub const FORCED_WIN_THRESHOLD: i32 = ThreatType::Five.cost() / 10 * 9;

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 在空位 pos 落下 side 的棋子有多大价值
    ///
    /// 四个方向棋型分值之和，加上任意两个方向的组合加分。非空位返回 0。
    pub fn score_at(board: &Board, side: Side, pos: Position) -> i32 {
        if !board.is_empty_at(pos) {
            return 0;
        }

        let threats = threats_at(board, pos, side);
        let mut score: i32 = threats.iter().map(|t| t.cost()).sum();
        for i in 0..threats.len() {
            for j in (i + 1)..threats.len() {
                score += combination_bonus(threats[i], threats[j]);
            }
        }
        score
    }

    /// 双方在所有空位上的潜力之和，返回 (side, 对方)
    pub fn potentials(board: &Board, side: Side) -> (i64, i64) {
        let opponent = side.opponent();
        board.empty_positions().fold((0i64, 0i64), |(own, opp), pos| {
            (
                own + Self::score_at(board, side, pos) as i64,
                opp + Self::score_at(board, opponent, pos) as i64,
            )
        })
    }

    /// 一步杀修正，从 mover 的角度
    ///
    /// 任何一方有成五点时加减 [`TACTICAL_BONUS`]，压过所有棋型分值。
    pub fn tactical_bonus(board: &Board, mover: Side) -> i64 {
        let wins = |side| {
            find_immediate_threat(board, side).is_some_and(|t| t.kind == ThreatKind::Win)
        };

        if wins(mover) {
            TACTICAL_BONUS as i64
        } else if wins(mover.opponent()) {
            -(TACTICAL_BONUS as i64)
        } else {
            0
        }
    }

    /// 评估局面（AI 视角，正值对 AI 有利）
    ///
    /// 走子方的潜力乘以 1.5，偏向进攻；再叠加一步杀修正。
    pub fn evaluate(board: &Board, ai: Side, ai_to_move: bool) -> i32 {
        if let Some(winner) = board.winner() {
            return if winner == ai { WIN_SCORE } else { -WIN_SCORE };
        }
        if board.is_full() {
            return 0;
        }

        let mover = if ai_to_move { ai } else { ai.opponent() };
        let (own, opp) = Self::potentials(board, mover);
        let relative = own * 3 / 2 - opp + Self::tactical_bonus(board, mover);
        let relative = relative.clamp(-(WIN_SCORE as i64 - 1), WIN_SCORE as i64 - 1) as i32;

        if ai_to_move {
            relative
        } else {
            -relative
        }
    }

    /// 是否为必胜分值
    pub fn is_forced_win(score: i32) -> bool {
        score >= FORCED_WIN_THRESHOLD
    }

    /// 是否为必败分值
    pub fn is_forced_loss(score: i32) -> bool {
        score <= -FORCED_WIN_THRESHOLD
    }
}
