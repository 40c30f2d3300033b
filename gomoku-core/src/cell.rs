//! 棋子、格子与坐标定义

use serde::{Deserialize, Serialize};

/// 执子方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 黑方（先手）
    Black,
    /// 白方（后手）
    White,
}

impl Side {
    /// 获取对方
    pub fn opponent(&self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// 棋盘图中使用的字符
    pub fn to_char(&self) -> char {
        match self {
            Side::Black => 'X',
            Side::White => 'O',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// 棋盘格子
///
/// 以有符号整数存储，黑为 +1、白为 -1，取反即为对方。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(i8)]
pub enum Cell {
    White = -1,
    #[default]
    Empty = 0,
    Black = 1,
}

impl Cell {
    /// 有符号数值表示
    #[inline]
    pub const fn value(self) -> i8 {
        self as i8
    }

    /// 从有符号数值还原，非法值返回 None
    #[inline]
    pub const fn from_value(value: i8) -> Option<Cell> {
        match value {
            -1 => Some(Cell::White),
            0 => Some(Cell::Empty),
            1 => Some(Cell::Black),
            _ => None,
        }
    }

    /// 对方的棋子（空格仍为空格）
    #[inline]
    pub const fn opponent(self) -> Cell {
        match Cell::from_value(-self.value()) {
            Some(cell) => cell,
            None => Cell::Empty,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// 格子上棋子所属方
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Black => Some(Side::Black),
            Cell::White => Some(Side::White),
            Cell::Empty => None,
        }
    }

    /// 棋盘图字符
    pub fn to_char(self) -> char {
        match self.side() {
            Some(side) => side.to_char(),
            None => '.',
        }
    }

    /// 从棋盘图字符解析
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            'X' | 'x' => Some(Cell::Black),
            'O' | 'o' => Some(Cell::White),
            '.' | '+' | '_' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

/// 棋盘坐标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// 行（0 为最上方）
    pub row: u8,
    /// 列（0 为最左侧）
    pub col: u8,
}

impl Position {
    /// 创建新坐标（不检查边界，边界由棋盘负责）
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 在给定尺寸的棋盘上是否有效
    pub fn is_within(&self, size: usize) -> bool {
        (self.row as usize) < size && (self.col as usize) < size
    }

    /// 获取偏移后的位置，越界返回 None
    pub fn offset(&self, dr: i8, dc: i8, size: usize) -> Option<Position> {
        let row = self.row as i32 + dr as i32;
        let col = self.col as i32 + dc as i32;
        if row >= 0 && (row as usize) < size && col >= 0 && (col as usize) < size {
            Some(Position::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// 转换为数组索引
    pub fn to_index(&self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize, size: usize) -> Option<Self> {
        if index < size * size {
            Some(Position::new((index / size) as u8, (index % size) as u8))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u8, u8)> for Position {
    fn from((row, col): (u8, u8)) -> Self {
        Position::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_sign_flip() {
        assert_eq!(Cell::Black.opponent(), Cell::White);
        assert_eq!(Cell::White.opponent(), Cell::Black);
        assert_eq!(Cell::Empty.opponent(), Cell::Empty);
        assert_eq!(Cell::Black.value(), -Cell::White.value());
    }

    #[test]
    fn test_cell_side() {
        assert_eq!(Cell::from(Side::Black).side(), Some(Side::Black));
        assert_eq!(Cell::from(Side::White).side(), Some(Side::White));
        assert_eq!(Cell::Empty.side(), None);
    }

    #[test]
    fn test_cell_chars() {
        assert_eq!(Cell::from_char('X'), Some(Cell::Black));
        assert_eq!(Cell::from_char('o'), Some(Cell::White));
        assert_eq!(Cell::from_char('+'), Some(Cell::Empty));
        assert_eq!(Cell::from_char('?'), None);
        assert_eq!(Cell::White.to_char(), 'O');
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Black.opponent(), Side::White);
        assert_eq!(Side::White.opponent(), Side::Black);
    }

    #[test]
    fn test_position_offset() {
        let pos = Position::new(0, 4);
        assert_eq!(pos.offset(1, -1, 5), Some(Position::new(1, 3)));
        assert_eq!(pos.offset(-1, 0, 5), None);
        assert_eq!(pos.offset(0, 1, 5), None);
    }

    #[test]
    fn test_position_index() {
        let pos = Position::new(3, 7);
        let index = pos.to_index(15);
        assert_eq!(index, 52);
        assert_eq!(Position::from_index(index, 15), Some(pos));
        assert_eq!(Position::from_index(225, 15), None);
    }
}
