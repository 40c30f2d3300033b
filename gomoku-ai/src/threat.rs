//! 棋型识别
//!
//! 以某点为中心沿一个轴向截取长度为 `2 * SEARCH_RADIUS + 1` 的线段，
//! 假设该点属于指定一方，判断这一方向上形成的棋型。

use gomoku_core::{Board, Cell, Position, Side, DIRECTIONS};

/// 截取线段时向两侧延伸的格数
pub const SEARCH_RADIUS: usize = 4;

/// 线段长度
pub const LINE_LEN: usize = 2 * SEARCH_RADIUS + 1;

/// 以某点为中心的线段，`None` 表示棋盘外
pub type Line = [Option<Cell>; LINE_LEN];

/// 单方向棋型，按危险程度从低到高排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThreatType {
    Nothing,
    /// 紧贴对方棋子的单侧被堵子
    NearEnemy,
    Two,
    /// 带一个空位的三子
    ThreeBroken,
    /// 带一个空位的四子
    FourBroken,
    /// 两端都有空位的连三
    Three,
    /// 一端有空位的连四
    Four,
    /// 两端都有空位的连四（活四）
    StraightFour,
    Five,
}

impl ThreatType {
    /// 所有棋型，从强到弱
    pub const ALL: [ThreatType; 9] = [
        ThreatType::Five,
        ThreatType::StraightFour,
        ThreatType::Four,
        ThreatType::Three,
        ThreatType::FourBroken,
        ThreatType::ThreeBroken,
        ThreatType::Two,
        ThreatType::NearEnemy,
        ThreatType::Nothing,
    ];

    /// 棋型分值
    pub const fn cost(self) -> i32 {
        match self {
            ThreatType::Five => 100_000,
            ThreatType::StraightFour => 20_000,
            ThreatType::Four => 5_000,
            ThreatType::Three => 2_500,
            ThreatType::FourBroken => 1_200,
            ThreatType::ThreeBroken => 600,
            ThreatType::Two => 120,
            ThreatType::NearEnemy => 15,
            ThreatType::Nothing => 0,
        }
    }
}

/// 同一点上两个方向的组合棋型（只用于加分查表）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combination {
    ThreeAndFour,
    ThreeAndThree,
    ThreeAndThreeBroken,
}

impl Combination {
    /// 组合加分
    pub const fn cost(self) -> i32 {
        match self {
            Combination::ThreeAndFour => 12_000,
            Combination::ThreeAndThree => 6_000,
            Combination::ThreeAndThreeBroken => 3_000,
        }
    }
}

/// 两个方向的棋型组合加分
///
/// 三配四（含跳四）或双三才有加分。
pub fn combination_bonus(first: ThreatType, second: ThreatType) -> i32 {
    use ThreatType::{Four, FourBroken, Three};

    match (first, second) {
        (Three, Four | FourBroken) | (Four | FourBroken, Three) => Combination::ThreeAndFour.cost(),
        (Three, Three) => Combination::ThreeAndThree.cost(),
        _ => 0,
    }
}

/// 以 pos 为中心、沿 direction 截取线段
pub fn extract_line(board: &Board, pos: Position, direction: (i8, i8)) -> Line {
    let (dr, dc) = (direction.0 as i32, direction.1 as i32);
    let mut line = [None; LINE_LEN];
    for (k, slot) in line.iter_mut().enumerate() {
        let offset = k as i32 - SEARCH_RADIUS as i32;
        *slot = board.cell_at(pos.row as i32 + offset * dr, pos.col as i32 + offset * dc);
    }
    line
}

/// 中心一侧的扫描结果
#[derive(Debug, Default, Clone, Copy)]
struct Wing {
    /// 与中心直接相连的己方棋子数
    run: usize,
    /// 越过至多一个空位后的己方棋子总数
    stones: usize,
    /// 连子之后紧跟一个空位
    hole: bool,
    /// 扫描经过的格子数（己方子与空位）
    span: usize,
    /// 连子之后紧跟对方棋子或棋盘边缘
    closed: bool,
    /// 封堵者是对方棋子
    enemy: bool,
}

/// 从中心沿 step 方向扫描
fn scan_wing(line: &Line, own: Cell, step: isize) -> Wing {
    let mut wing = Wing::default();
    let mut index = SEARCH_RADIUS as isize;

    for _ in 0..SEARCH_RADIUS {
        index += step;
        match line[index as usize] {
            Some(cell) if cell == own => {
                wing.stones += 1;
                wing.span += 1;
                if !wing.hole {
                    wing.run += 1;
                }
            }
            Some(Cell::Empty) => {
                if wing.hole {
                    break;
                }
                wing.hole = true;
                wing.span += 1;
            }
            Some(_) => {
                if !wing.hole {
                    wing.closed = true;
                    wing.enemy = true;
                }
                break;
            }
            None => {
                if !wing.hole {
                    wing.closed = true;
                }
                break;
            }
        }
    }

    wing
}

/// 判断线段中心（视为 side 的棋子）在该方向上的棋型
pub fn classify(line: &Line, side: Side) -> ThreatType {
    let own = Cell::from(side);
    let left = scan_wing(line, own, -1);
    let right = scan_wing(line, own, 1);

    let contiguous = 1 + left.run + right.run;
    let total = 1 + left.stones + right.stones;
    let holes = left.hole as usize + right.hole as usize;
    let length = 1 + left.span + right.span;

    if contiguous >= 5 {
        ThreatType::Five
    } else if contiguous == 4 && holes == 2 {
        ThreatType::StraightFour
    } else if contiguous == 4 && holes == 1 {
        ThreatType::Four
    } else if contiguous == 3 && holes == 2 {
        ThreatType::Three
    } else if total >= 4 && holes >= 1 && length >= 5 {
        ThreatType::FourBroken
    } else if total >= 3 && holes >= 1 && length >= 5 {
        ThreatType::ThreeBroken
    } else if contiguous >= 2 && holes >= 1 && length >= 4 {
        ThreatType::Two
    } else if left.closed != right.closed && (left.enemy || right.enemy) {
        ThreatType::NearEnemy
    } else {
        ThreatType::Nothing
    }
}

/// 假设 side 落在 pos，四个方向各自的棋型
pub fn threats_at(board: &Board, pos: Position, side: Side) -> [ThreatType; 4] {
    DIRECTIONS.map(|direction| classify(&extract_line(board, pos, direction), side))
}
