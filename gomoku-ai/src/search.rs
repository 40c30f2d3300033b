//! 搜索引擎
//!
//! 实现 Minimax + Alpha-Beta 剪枝 + 迭代加深

use std::time::{Duration, Instant};

use gomoku_core::{Board, Difficulty, Position, Side};

use crate::config::SearchConfig;
use crate::evaluate::Evaluator;
use crate::movegen::MoveGenerator;
use crate::observer::{SearchEvent, SearchObserver, TracingObserver};

/// 单个搜索节点的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// AI 视角的分值
    pub score: i32,
    /// 叶子节点为 None
    pub best_move: Option<Position>,
}

impl Evaluation {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// AI 引擎
///
/// 绑定一方执子和一份不可变的搜索配置；更换难度时重新创建引擎。
pub struct AiEngine {
    config: SearchConfig,
    side: Side,
    nodes_searched: u64,
    observer: Box<dyn SearchObserver>,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: SearchConfig, side: Side) -> Self {
        Self {
            config,
            side,
            nodes_searched: 0,
            observer: Box::new(TracingObserver),
        }
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty, side: Side) -> Self {
        Self::new(SearchConfig::from_difficulty(difficulty), side)
    }

    /// 替换观察者
    pub fn with_observer(mut self, observer: impl SearchObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// AI 执子方
    pub fn side(&self) -> Side {
        self.side
    }

    /// 获取上一次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// 搜索最佳走法
    ///
    /// 在棋盘的副本上搜索，调用方的棋盘不会被修改。只有棋盘下满时返回 None。
    pub fn best_move(&mut self, board: &Board) -> Option<Position> {
        self.nodes_searched = 0;
        if board.is_full() {
            return None;
        }

        let started = Instant::now();
        let mut work = board.clone();

        let (depth, result) = match self.config.time_budget() {
            Some(budget) => self.iterative_deepening(&mut work, budget, started),
            None => {
                let depth = self.config.max_depth;
                (depth, self.search(&mut work, depth, i32::MIN, i32::MAX, true))
            }
        };
        debug_assert_eq!(&work, board, "search must restore the board");

        // 根节点已是终局（例如已有人五连）时没有搜索结果，退回到第一个候选或第一个空位
        let best_move = result
            .best_move
            .or_else(|| {
                MoveGenerator::positions(&work, self.side, self.config.max_candidates)
                    .first()
                    .copied()
            })
            .or_else(|| work.empty_positions().next());

        self.observer.on_event(&SearchEvent::Finished {
            best_move,
            score: result.score,
            depth,
            nodes: self.nodes_searched,
            elapsed: started.elapsed(),
        });

        best_move
    }

    /// 迭代加深，返回 (最后完成的深度, 该深度的结果)
    ///
    /// 只在两层之间检查时间，一层一旦开始就会完整搜索完。
    fn iterative_deepening(
        &mut self,
        board: &mut Board,
        budget: Duration,
        started: Instant,
    ) -> (u8, Evaluation) {
        let mut completed = (0, Evaluation::leaf(0));

        for depth in 1..=self.config.max_depth {
            let result = self.search(board, depth, i32::MIN, i32::MAX, true);
            let elapsed = started.elapsed();
            completed = (depth, result);

            self.observer.on_event(&SearchEvent::DepthCompleted {
                depth,
                score: result.score,
                best_move: result.best_move,
                nodes: self.nodes_searched,
                elapsed,
            });

            if Evaluator::is_forced_win(result.score) {
                self.observer.on_event(&SearchEvent::ForcedWin {
                    depth,
                    score: result.score,
                });
                break;
            }
            if Evaluator::is_forced_loss(result.score) {
                self.observer.on_event(&SearchEvent::ForcedLoss {
                    depth,
                    score: result.score,
                });
            }
            if elapsed >= budget {
                if depth < self.config.max_depth {
                    self.observer.on_event(&SearchEvent::BudgetExhausted {
                        completed_depth: depth,
                        elapsed,
                    });
                }
                break;
            }
        }

        completed
    }

    /// Alpha-Beta 搜索
    ///
    /// `maximizing` 为真时轮到 AI 落子。返回的分值始终是 AI 视角；
    /// 每次试探落子都通过守卫在返回前撤销，棋盘前后完全一致。
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Evaluation {
        self.nodes_searched += 1;

        if depth == 0 || board.is_game_over() {
            return Evaluation::leaf(Evaluator::evaluate(board, self.side, maximizing));
        }

        let mover = if maximizing { self.side } else { self.side.opponent() };
        let candidates = MoveGenerator::positions(board, self.side, self.config.max_candidates);

        let mut best = Evaluation::leaf(if maximizing { i32::MIN } else { i32::MAX });
        for pos in candidates {
            let child = {
                let mut placed = board.play(pos, mover);
                self.search(&mut placed, depth - 1, alpha, beta, !maximizing)
            };

            if maximizing {
                if child.score > best.score || best.best_move.is_none() {
                    best = Evaluation {
                        score: child.score,
                        best_move: Some(pos),
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if child.score < best.score || best.best_move.is_none() {
                    best = Evaluation {
                        score: child.score,
                        best_move: Some(pos),
                    };
                }
                beta = beta.min(best.score);
            }

            if beta <= alpha {
                break; // 剪枝
            }
        }

        best
    }

    /// 不剪枝的完整 Minimax，走法顺序与 [`AiEngine::search`] 相同
    pub fn minimax(&mut self, board: &mut Board, depth: u8, maximizing: bool) -> Evaluation {
        self.nodes_searched += 1;

        if depth == 0 || board.is_game_over() {
            return Evaluation::leaf(Evaluator::evaluate(board, self.side, maximizing));
        }

        let mover = if maximizing { self.side } else { self.side.opponent() };
        let candidates = MoveGenerator::positions(board, self.side, self.config.max_candidates);

        let mut best = Evaluation::leaf(if maximizing { i32::MIN } else { i32::MAX });
        for pos in candidates {
            let child = board.with_stone(pos, mover, |b| self.minimax(b, depth - 1, !maximizing));
            let better = if maximizing {
                child.score > best.score
            } else {
                child.score < best.score
            };
            if better || best.best_move.is_none() {
                best = Evaluation {
                    score: child.score,
                    best_move: Some(pos),
                };
            }
        }

        best
    }
}
