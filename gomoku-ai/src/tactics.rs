//! 一步杀/冲四检测
//!
//! 评估函数和走法生成共用同一套检测，保证两处结论一致。

use gomoku_core::{Board, Cell, Position, Side, DIRECTIONS, WIN_LENGTH};

/// 紧急点类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThreatKind {
    /// 落下即成五
    Win,
    /// 落下形成至少一端开口的四连
    CriticalFour,
}

/// 紧急点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImmediateThreat {
    pub pos: Position,
    pub kind: ThreatKind,
}

/// 沿 (dr, dc) 数连子，返回 (个数, 连子末端之外是否为空位)
fn walk(board: &Board, pos: Position, dr: i32, dc: i32, cell: Cell) -> (usize, bool) {
    let mut count = 0;
    let mut row = pos.row as i32 + dr;
    let mut col = pos.col as i32 + dc;
    loop {
        match board.cell_at(row, col) {
            Some(c) if c == cell => count += 1,
            Some(Cell::Empty) => return (count, true),
            _ => return (count, false),
        }
        row += dr;
        col += dc;
    }
}

/// 假设 side 落在 pos，是否至少有一个方向形成一端开口的四连
fn makes_critical_four(board: &Board, pos: Position, side: Side) -> bool {
    let cell = Cell::from(side);
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let (forward, forward_open) = walk(board, pos, dr as i32, dc as i32, cell);
        let (backward, backward_open) = walk(board, pos, -(dr as i32), -(dc as i32), cell);
        1 + forward + backward >= WIN_LENGTH - 1 && (forward_open || backward_open)
    })
}

/// 寻找 side 的紧急点
///
/// 第一遍找直接成五的空位，第二遍找能冲出开口四的空位，按行优先顺序返回第一个。
/// 空位上的假设落子通过沿线数子完成，不修改棋盘。
pub fn find_immediate_threat(board: &Board, side: Side) -> Option<ImmediateThreat> {
    let wins = board.empty_positions().find(|&pos| {
        DIRECTIONS
            .iter()
            .any(|&direction| board.count_run(pos, direction, side) >= WIN_LENGTH)
    });
    if let Some(pos) = wins {
        return Some(ImmediateThreat {
            pos,
            kind: ThreatKind::Win,
        });
    }

    board
        .empty_positions()
        .find(|&pos| makes_critical_four(board, pos, side))
        .map(|pos| ImmediateThreat {
            pos,
            kind: ThreatKind::CriticalFour,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomoku_core::Diagram;

    /// 从 pos 沿 (dr, dc) 越过 side 的连子后，下一格是否为空位
    fn run_end_is_empty(board: &Board, pos: Position, dr: i8, dc: i8, side: Side) -> bool {
        let own = Some(Cell::from(side));
        let (mut row, mut col) = (pos.row as i32, pos.col as i32);
        while board.cell_at(row, col) == own {
            row += dr as i32;
            col += dc as i32;
        }
        board.cell_at(row, col) == Some(Cell::Empty)
    }

    #[test]
    fn test_direct_win() {
        let board = Diagram::parse(
            "
            .......
            .XXXX..
            .......
            ..OOO..
            .......
            .......
            .......",
        )
        .unwrap();
        let threat = find_immediate_threat(&board, Side::Black).unwrap();
        assert_eq!(threat.kind, ThreatKind::Win);
        assert_eq!(threat.pos, Position::new(1, 0));

        // 白方只有三连，能冲出四
        let threat = find_immediate_threat(&board, Side::White).unwrap();
        assert_eq!(threat.kind, ThreatKind::CriticalFour);
        assert_eq!(threat.pos, Position::new(3, 1));
    }

    #[test]
    fn test_gap_win() {
        let board = Diagram::parse(
            "
            .......
            .......
            .XX.XX.
            .......
            .......
            .......
            .......",
        )
        .unwrap();
        let threat = find_immediate_threat(&board, Side::Black).unwrap();
        assert_eq!(threat, ImmediateThreat { pos: Position::new(2, 3), kind: ThreatKind::Win });
    }

    #[test]
    fn test_blocked_three_is_not_critical() {
        let board = Diagram::parse(
            "
            .......
            OXXXO..
            .......
            .......
            .......
            .......
            .......",
        )
        .unwrap();
        assert_eq!(find_immediate_threat(&board, Side::Black), None);
    }

    #[test]
    fn test_empty_board_has_no_threat() {
        let board = gomoku_core::Board::new(9).unwrap();
        assert_eq!(find_immediate_threat(&board, Side::Black), None);
        assert_eq!(find_immediate_threat(&board, Side::White), None);
    }

    #[test]
    fn test_replaying_threat_is_consistent() {
        let positions = [
            "
            .........
            ..X......
            ...X.....
            ....X....
            .....X...
            .........
            ...OO....
            .........
            .........",
            "
            .........
            .........
            ..OXXX...
            .........
            .........
            .........
            .........
            .........
            .........",
            "
            X.......O
            .X......O
            ..X.....O
            ........O
            .........
            .........
            .........
            .........
            .........",
        ];

        for text in positions {
            let mut board = Diagram::parse(text).unwrap();
            for side in [Side::Black, Side::White] {
                let Some(threat) = find_immediate_threat(&board, side) else {
                    continue;
                };
                assert!(board.is_empty_at(threat.pos), "threat on occupied cell {}", threat.pos);

                board.with_stone(threat.pos, side, |b| match threat.kind {
                    ThreatKind::Win => assert_eq!(b.winner_at(threat.pos), Some(side)),
                    ThreatKind::CriticalFour => {
                        let open_four = DIRECTIONS.iter().any(|&(dr, dc)| {
                            b.count_run(threat.pos, (dr, dc), side) >= 4
                                && (run_end_is_empty(b, threat.pos, dr, dc, side)
                                    || run_end_is_empty(b, threat.pos, -dr, -dc, side))
                        });
                        assert!(open_four, "no open four through {}\n{}", threat.pos, b);
                        assert_eq!(b.winner_at(threat.pos), None);
                    }
                });
            }
        }
    }
}
