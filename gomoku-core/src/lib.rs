//! 五子棋共享棋盘模型
//!
//! 包含:
//! - 格子、执子方、坐标等核心数据结构
//! - N×N 棋盘（落子、提子、五连判定、临时落子守卫）
//! - 候选走法与 AI 难度
//! - 棋盘图与坐标记号

mod board;
mod cell;
mod constants;
mod diagram;
mod difficulty;
mod error;
mod moves;
mod notation;

pub use board::{Board, Placed};
pub use cell::{Cell, Position, Side};
pub use constants::*;
pub use diagram::Diagram;
pub use difficulty::Difficulty;
pub use error::{GomokuError, Result};
pub use moves::Move;
pub use notation::Notation;
