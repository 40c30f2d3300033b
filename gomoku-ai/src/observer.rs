//! 搜索过程观察者
//!
//! 搜索本身不做任何输出，深度、分值、耗时等诊断信息以事件形式交给观察者。

use std::time::Duration;

use gomoku_core::Position;
use tracing::{debug, info};

/// 搜索事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// 完成了一层搜索
    DepthCompleted {
        depth: u8,
        score: i32,
        best_move: Option<Position>,
        nodes: u64,
        elapsed: Duration,
    },
    /// 找到必胜，提前结束迭代加深
    ForcedWin { depth: u8, score: i32 },
    /// 当前深度必败，继续加深寻找防守
    ForcedLoss { depth: u8, score: i32 },
    /// 时间预算用尽，保留最后完成的一层
    BudgetExhausted { completed_depth: u8, elapsed: Duration },
    /// 搜索结束
    Finished {
        best_move: Option<Position>,
        score: i32,
        depth: u8,
        nodes: u64,
        elapsed: Duration,
    },
}

/// 搜索观察者
pub trait SearchObserver: Send {
    fn on_event(&mut self, event: &SearchEvent);
}

impl<F> SearchObserver for F
where
    F: FnMut(&SearchEvent) + Send,
{
    fn on_event(&mut self, event: &SearchEvent) {
        self(event)
    }
}

/// 忽略所有事件
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SearchObserver for NullObserver {
    fn on_event(&mut self, _event: &SearchEvent) {}
}

/// 把事件写入 tracing 日志
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_event(&mut self, event: &SearchEvent) {
        match event {
            SearchEvent::DepthCompleted {
                depth,
                score,
                best_move,
                nodes,
                elapsed,
            } => {
                debug!(depth, score, nodes, ?best_move, ?elapsed, "搜索完成一层");
            }
            SearchEvent::ForcedWin { depth, score } => {
                debug!(depth, score, "找到必胜，停止加深");
            }
            SearchEvent::ForcedLoss { depth, score } => {
                debug!(depth, score, "当前深度必败，继续加深寻找防守");
            }
            SearchEvent::BudgetExhausted {
                completed_depth,
                elapsed,
            } => {
                debug!(completed_depth, ?elapsed, "时间预算用尽");
            }
            SearchEvent::Finished {
                best_move,
                score,
                depth,
                nodes,
                elapsed,
            } => {
                info!(depth, score, nodes, ?best_move, ?elapsed, "AI 选定走法");
            }
        }
    }
}
