//! 错误类型定义

use thiserror::Error;

/// 棋盘相关错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GomokuError {
    /// 棋盘尺寸不合法
    #[error("Invalid board size: {size} (expected {min}..={max})")]
    InvalidBoardSize { size: usize, min: usize, max: usize },

    /// 坐标越界
    #[error("Position ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: u8, col: u8, size: usize },

    /// 目标格已有棋子
    #[error("Position ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },

    /// 无效的棋盘图
    #[error("Invalid board diagram: {reason}")]
    InvalidDiagram { reason: String },

    /// 无效的坐标记号
    #[error("Invalid coordinate notation: {text:?}")]
    InvalidNotation { text: String },
}

/// 棋盘操作结果类型
pub type Result<T> = std::result::Result<T, GomokuError>;
