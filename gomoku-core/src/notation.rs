//! 坐标记号
//!
//! 列用字母表示（A 为最左列），行用数字表示（1 为最下一行），
//! 例如 15 路棋盘的中心点记为 `H8`。

use crate::cell::Position;
use crate::constants::MAX_BOARD_SIZE;
use crate::error::{GomokuError, Result};

/// 坐标记号
pub struct Notation;

impl Notation {
    /// 将坐标转换为记号，棋盘外的坐标返回 None
    pub fn format(pos: Position, size: usize) -> Option<String> {
        if !pos.is_within(size) || pos.col as usize >= MAX_BOARD_SIZE {
            return None;
        }
        let column = (b'A' + pos.col) as char;
        let rank = size - pos.row as usize;
        Some(format!("{}{}", column, rank))
    }

    /// 解析记号
    pub fn parse(text: &str, size: usize) -> Result<Position> {
        let invalid = || GomokuError::InvalidNotation {
            text: text.to_string(),
        };

        let trimmed = text.trim();
        let mut chars = trimmed.chars();
        let column = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
        if !column.is_ascii_uppercase() {
            return Err(invalid());
        }
        let col = (column as u8 - b'A') as usize;

        let rank: usize = chars.as_str().parse().map_err(|_| invalid())?;
        if rank == 0 || rank > size || col >= size {
            return Err(invalid());
        }

        Ok(Position::new((size - rank) as u8, col as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_center() {
        assert_eq!(Notation::format(Position::new(7, 7), 15).as_deref(), Some("H8"));
        assert_eq!(Notation::format(Position::new(9, 9), 19).as_deref(), Some("J10"));
        assert_eq!(Notation::format(Position::new(0, 0), 19).as_deref(), Some("A19"));
        assert_eq!(Notation::format(Position::new(18, 0), 19).as_deref(), Some("A1"));
        assert_eq!(Notation::format(Position::new(0, 25), 26).as_deref(), Some("Z26"));
    }

    #[test]
    fn test_format_off_board() {
        assert_eq!(Notation::format(Position::new(15, 0), 15), None);
        assert_eq!(Notation::format(Position::new(0, 15), 15), None);
        assert_eq!(Notation::format(Position::new(200, 3), 15), None);
        assert_eq!(Notation::format(Position::new(3, 255), 19), None);
        // 超出字母范围的列
        assert_eq!(Notation::format(Position::new(0, 30), 40), None);
    }

    #[test]
    fn test_format_parse_agree() {
        let pos = Position::new(3, 11);
        let text = Notation::format(pos, 19).unwrap();
        assert_eq!(Notation::parse(&text, 19).unwrap(), pos);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Notation::parse("H8", 15).unwrap(), Position::new(7, 7));
        assert_eq!(Notation::parse(" j10 ", 19).unwrap(), Position::new(9, 9));
        assert_eq!(Notation::parse("A1", 19).unwrap(), Position::new(18, 0));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Notation::parse("", 15).is_err());
        assert!(Notation::parse("8H", 15).is_err());
        assert!(Notation::parse("H0", 15).is_err());
        assert!(Notation::parse("H16", 15).is_err());
        assert!(Notation::parse("P1", 15).is_err());
        assert!(matches!(
            Notation::parse("Z", 15),
            Err(GomokuError::InvalidNotation { .. })
        ));
    }
}
