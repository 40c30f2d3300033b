//! AI 自对弈示例
//!
//! 运行方式:
//! ```bash
//! cargo run -p gomoku-ai --example self_play
//!
//! # 指定难度和棋盘大小
//! RUST_LOG=gomoku_ai=debug cargo run -p gomoku-ai --example self_play -- hard 15
//! ```

use std::env;
use std::time::Instant;

use anyhow::{anyhow, Result};
use gomoku_ai::AiEngine;
use gomoku_core::{Board, Difficulty, Notation, Side, STANDARD_BOARD_SIZE};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gomoku_ai=info".parse()?),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let difficulty: Difficulty = match args.first() {
        Some(text) => text.parse().map_err(|e: String| anyhow!(e))?,
        None => Difficulty::Easy,
    };
    let size: usize = match args.get(1) {
        Some(text) => text.parse()?,
        None => STANDARD_BOARD_SIZE,
    };

    println!("=== 五子棋自对弈 ({}, {}路) ===\n", difficulty, size);

    let mut board = Board::new(size)?;
    let mut black = AiEngine::from_difficulty(difficulty, Side::Black);
    let mut white = AiEngine::from_difficulty(difficulty, Side::White);
    let mut side = Side::Black;
    let mut record = Vec::new();
    let started = Instant::now();

    while !board.is_game_over() {
        let engine = match side {
            Side::Black => &mut black,
            Side::White => &mut white,
        };
        let Some(pos) = engine.best_move(&board) else {
            break;
        };
        board.place(pos, side)?;

        let notation = Notation::format(pos, size).unwrap_or_else(|| pos.to_string());
        println!(
            "{:>3}. {} {:<4} ({} 个节点)",
            record.len() + 1,
            side,
            notation,
            engine.nodes_searched()
        );
        record.push(notation);
        side = side.opponent();
    }

    println!("\n{}", board);
    match board.winner() {
        Some(winner) => println!("{} 获胜，共 {} 手", winner, record.len()),
        None => println!("和棋，共 {} 手", record.len()),
    }
    println!("棋谱: {}", record.join(" "));

    info!(moves = record.len(), elapsed = ?started.elapsed(), "对局结束");

    Ok(())
}
