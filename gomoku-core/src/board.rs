//! 棋盘状态

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, Position, Side};
use crate::constants::{
    DIRECTIONS, MAX_BOARD_SIZE, MIN_BOARD_SIZE, NEIGHBORS, STANDARD_BOARD_SIZE, WIN_LENGTH,
};
use crate::diagram::Diagram;
use crate::error::{GomokuError, Result};

/// N×N 棋盘
///
/// 序列化为棋盘图的行列表，例如 `["X..", ".O.", "..."]`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRows", into = "BoardRows")]
pub struct Board {
    /// 边长
    size: usize,
    /// 索引为 row * size + col
    cells: Vec<Cell>,
    /// 棋盘上的棋子总数
    stones: usize,
}

impl Board {
    /// 创建指定边长的空棋盘
    pub fn new(size: usize) -> Result<Self> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GomokuError::InvalidBoardSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
            stones: 0,
        })
    }

    /// 创建 19 路空棋盘
    pub fn standard() -> Self {
        Self {
            size: STANDARD_BOARD_SIZE,
            cells: vec![Cell::Empty; STANDARD_BOARD_SIZE * STANDARD_BOARD_SIZE],
            stones: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// 中心点
    pub fn center(&self) -> Position {
        let mid = (self.size / 2) as u8;
        Position::new(mid, mid)
    }

    /// 检查行列是否在棋盘内（允许负数，便于方向遍历）
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.is_within(self.size)
    }

    /// 获取指定位置的格子，越界视为空
    #[inline]
    pub fn get(&self, pos: Position) -> Cell {
        if self.contains(pos) {
            self.cells[pos.to_index(self.size)]
        } else {
            Cell::Empty
        }
    }

    /// 按有符号行列读取，越界返回 None
    #[inline]
    pub fn cell_at(&self, row: i32, col: i32) -> Option<Cell> {
        if self.in_bounds(row, col) {
            Some(self.cells[row as usize * self.size + col as usize])
        } else {
            None
        }
    }

    /// 设置格子（不检查规则，越界忽略）
    #[inline]
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if !self.contains(pos) {
            return;
        }
        let slot = &mut self.cells[pos.to_index(self.size)];
        match (slot.is_empty(), cell.is_empty()) {
            (true, false) => self.stones += 1,
            (false, true) => self.stones -= 1,
            _ => {}
        }
        *slot = cell;
    }

    /// 落子（检查边界与占用）
    pub fn place(&mut self, pos: Position, side: Side) -> Result<()> {
        if !self.contains(pos) {
            return Err(GomokuError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size,
            });
        }
        if !self.is_empty_at(pos) {
            return Err(GomokuError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.set(pos, Cell::from(side));
        Ok(())
    }

    /// 移除棋子，返回原来的格子内容
    pub fn remove(&mut self, pos: Position) -> Cell {
        let previous = self.get(pos);
        self.set(pos, Cell::Empty);
        previous
    }

    /// 临时落子，返回的守卫在离开作用域时恢复原状
    pub fn play(&mut self, pos: Position, side: Side) -> Placed<'_> {
        let previous = self.get(pos);
        self.set(pos, Cell::from(side));
        Placed {
            board: self,
            pos,
            previous,
        }
    }

    /// 临时落子并执行闭包，闭包返回后恢复棋盘
    pub fn with_stone<R>(&mut self, pos: Position, side: Side, f: impl FnOnce(&mut Board) -> R) -> R {
        let mut placed = self.play(pos, side);
        f(&mut placed)
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.contains(pos) && self.get(pos).is_empty()
    }

    /// 棋盘是否没有任何棋子
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stones == 0
    }

    /// 棋盘是否已下满
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// 所有空位（按行优先顺序）
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(move |(index, _)| Position::new((index / size) as u8, (index % size) as u8))
    }

    /// 指定方的所有棋子位置
    pub fn stones(&self, side: Side) -> Vec<Position> {
        let target = Cell::from(side);
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == target)
            .map(|(index, _)| Position::new((index / size) as u8, (index % size) as u8))
            .collect()
    }

    /// 八邻域内是否有棋子
    pub fn has_occupied_neighbor(&self, pos: Position) -> bool {
        NEIGHBORS.iter().any(|&(dr, dc)| {
            pos.offset(dr, dc, self.size)
                .is_some_and(|next| !self.get(next).is_empty())
        })
    }

    /// 从 pos 出发沿 (dr, dc) 一个方向数连续的 cell（不含 pos 本身）
    fn run_one_way(&self, pos: Position, dr: i8, dc: i8, cell: Cell) -> usize {
        let mut count = 0;
        let mut row = pos.row as i32 + dr as i32;
        let mut col = pos.col as i32 + dc as i32;
        while self.cell_at(row, col) == Some(cell) {
            count += 1;
            row += dr as i32;
            col += dc as i32;
        }
        count
    }

    /// 视 pos 为 side 的棋子，计算过 pos 沿某一轴的连续长度
    pub fn count_run(&self, pos: Position, direction: (i8, i8), side: Side) -> usize {
        let (dr, dc) = direction;
        let cell = Cell::from(side);
        1 + self.run_one_way(pos, dr, dc, cell) + self.run_one_way(pos, -dr, -dc, cell)
    }

    /// 过 pos 的棋子是否连成五子，返回获胜方
    pub fn winner_at(&self, pos: Position) -> Option<Side> {
        let side = self.get(pos).side()?;
        DIRECTIONS
            .iter()
            .any(|&direction| self.count_run(pos, direction, side) >= WIN_LENGTH)
            .then_some(side)
    }

    /// 扫描整个棋盘寻找五连
    pub fn winner(&self) -> Option<Side> {
        for index in 0..self.cells.len() {
            let cell = self.cells[index];
            if cell.is_empty() {
                continue;
            }
            let pos = Position::new((index / self.size) as u8, (index % self.size) as u8);
            for &(dr, dc) in &DIRECTIONS {
                // 只从一段连子的起点开始数，避免重复
                let prev = (pos.row as i32 - dr as i32, pos.col as i32 - dc as i32);
                if self.cell_at(prev.0, prev.1) == Some(cell) {
                    continue;
                }
                if 1 + self.run_one_way(pos, dr, dc, cell) >= WIN_LENGTH {
                    return cell.side();
                }
            }
        }
        None
    }

    /// 对局是否结束（有人五连或棋盘已满）
    pub fn is_game_over(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&Diagram::render(self))
    }
}

/// 临时落子守卫
///
/// 通过 Deref 访问棋盘；Drop 时把该格恢复为落子前的内容。
pub struct Placed<'a> {
    board: &'a mut Board,
    pos: Position,
    previous: Cell,
}

impl Placed<'_> {
    /// 本次落子的位置
    pub fn position(&self) -> Position {
        self.pos
    }
}

impl Deref for Placed<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placed<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placed<'_> {
    fn drop(&mut self) {
        self.board.set(self.pos, self.previous);
    }
}

/// 序列化用的行表示
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
struct BoardRows(Vec<String>);

impl TryFrom<BoardRows> for Board {
    type Error = GomokuError;

    fn try_from(rows: BoardRows) -> Result<Self> {
        Diagram::parse(&rows.0.join("/"))
    }
}

impl From<Board> for BoardRows {
    fn from(board: Board) -> Self {
        BoardRows(Diagram::rows(&board))
    }
}
