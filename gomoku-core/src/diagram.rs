//! 棋盘图解析和生成
//!
//! 每行一个字符串，行之间用换行或 `/` 分隔：
//! - `.`、`+`、`_`：空格
//! - `X`：黑子
//! - `O`：白子
//!
//! 行内空白会被忽略，行数即棋盘边长。
//!
//! 示例：`X..../.O.../...../...../.....`

use crate::board::Board;
use crate::cell::{Cell, Position};
use crate::error::{GomokuError, Result};

/// 棋盘图格式处理
pub struct Diagram;

impl Diagram {
    /// 解析棋盘图
    pub fn parse(text: &str) -> Result<Board> {
        let rows: Vec<String> = text
            .split(['\n', '/'])
            .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect::<String>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.is_empty() {
            return Err(GomokuError::InvalidDiagram {
                reason: "Empty diagram".to_string(),
            });
        }

        let size = rows.len();
        let mut board = Board::new(size).map_err(|_| GomokuError::InvalidDiagram {
            reason: format!("Unsupported board size {}", size),
        })?;

        for (row_idx, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != size {
                return Err(GomokuError::InvalidDiagram {
                    reason: format!("Row {} has {} cells, expected {}", row_idx, width, size),
                });
            }

            for (col_idx, c) in row.chars().enumerate() {
                let cell = Cell::from_char(c).ok_or_else(|| GomokuError::InvalidDiagram {
                    reason: format!("Invalid cell character: {}", c),
                })?;
                board.set(Position::new(row_idx as u8, col_idx as u8), cell);
            }
        }

        Ok(board)
    }

    /// 棋盘的逐行表示
    pub fn rows(board: &Board) -> Vec<String> {
        let size = board.size();
        (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| board.get(Position::new(row as u8, col as u8)).to_char())
                    .collect()
            })
            .collect()
    }

    /// 渲染为多行棋盘图
    pub fn render(board: &Board) -> String {
        let mut text = Self::rows(board).join("\n");
        text.push('\n');
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Side;

    #[test]
    fn test_parse_multiline() {
        let board = Diagram::parse(
            "
            X . . . .
            . O . . .
            . . X . .
            . . . . .
            . . . . .
            ",
        )
        .unwrap();
        assert_eq!(board.size(), 5);
        assert_eq!(board.stone_count(), 3);
        assert_eq!(board.get(Position::new(0, 0)), Cell::Black);
        assert_eq!(board.get(Position::new(1, 1)), Cell::White);
        assert_eq!(board.stones(Side::Black).len(), 2);
    }

    #[test]
    fn test_render_roundtrip() {
        let text = "X....\n.O...\n..+..\n.....\n....O";
        let board = Diagram::parse(text).unwrap();
        let rendered = Diagram::render(&board);
        assert_eq!(rendered, "X....\n.O...\n.....\n.....\n....O\n");
        assert_eq!(Diagram::parse(&rendered).unwrap(), board);
        assert_eq!(board.to_string(), rendered);
    }

    #[test]
    fn test_invalid_diagrams() {
        // 空
        assert!(Diagram::parse("   ").is_err());

        // 行宽不一致
        assert!(Diagram::parse("...../..../...../...../.....").is_err());

        // 无效字符
        assert!(Diagram::parse("..?../...../...../...../.....").is_err());

        // 尺寸太小
        assert!(matches!(
            Diagram::parse("..../..../..../...."),
            Err(GomokuError::InvalidDiagram { .. })
        ));
    }
}
