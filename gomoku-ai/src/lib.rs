//! 五子棋 AI 引擎
//!
//! 包含:
//! - 单方向棋型识别与组合加分
//! - 局面评估函数
//! - 一步杀/冲四检测
//! - 候选走法生成
//! - Minimax + Alpha-Beta 搜索
//! - 迭代加深

mod config;
mod evaluate;
mod movegen;
mod observer;
mod search;
mod tactics;
mod threat;

pub use config::{ConfigError, SearchConfig};
pub use evaluate::{Evaluator, FORCED_WIN_THRESHOLD, TACTICAL_BONUS, WIN_SCORE};
pub use gomoku_core::Difficulty;
pub use movegen::{
    MoveGenerator, MAX_CANDIDATES, PRIORITY_BLOCK_FOUR, PRIORITY_BLOCK_WIN, PRIORITY_FOUR, PRIORITY_WIN,
};
pub use observer::{NullObserver, SearchEvent, SearchObserver, TracingObserver};
pub use search::{AiEngine, Evaluation};
pub use tactics::{find_immediate_threat, ImmediateThreat, ThreatKind};
pub use threat::{
    classify, combination_bonus, extract_line, threats_at, Combination, Line, ThreatType, LINE_LEN,
    SEARCH_RADIUS,
};
