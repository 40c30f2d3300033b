//! 棋盘常量定义

/// 标准棋盘边长（19 路）
pub const STANDARD_BOARD_SIZE: usize = 19;

/// 最小棋盘边长（至少要能摆下五连）
pub const MIN_BOARD_SIZE: usize = 5;

/// 最大棋盘边长（列坐标使用 A-Z 表示）
pub const MAX_BOARD_SIZE: usize = 26;

/// 连成几子获胜
pub const WIN_LENGTH: usize = 5;

/// 四个轴向：横、竖、\ 斜、/ 斜，以 (行增量, 列增量) 表示
pub const DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// 八邻域偏移
pub const NEIGHBORS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
