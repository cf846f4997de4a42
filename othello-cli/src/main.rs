use std::path::PathBuf;

use anyhow::{Context, Result};
use othello_ai::Decider;
use othello_cli::{play_tournament, AppConfig, Match};
use othello_core::Color;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(AppConfig::default_path);

    // 配置只读取一次，日志级别来自配置文件，RUST_LOG 仍然生效
    let (config, source) = AppConfig::load(config_path.as_deref());

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(format!("othello={}", config.log_level).parse()?))
        .init();

    info!("黑白棋启动中...");
    source.report();

    let board = config.start_board().context("无法创建开局棋盘")?;
    let [first, second] = &config.players;
    let mut players: [Box<dyn Decider>; 2] = [
        first.build().context("无法创建第一名玩家")?,
        second.build().context("无法创建第二名玩家")?,
    ];

    if config.rounds == 1 {
        let [lead, follow] = &mut players;
        let (black, white) = if config.first_mover == Color::White {
            (follow.as_mut(), lead.as_mut())
        } else {
            (lead.as_mut(), follow.as_mut())
        };
        let mut game = Match::new(board, config.first_mover, black, white);
        let outcome = game.play_game();

        print!("{}", game.board());
        match outcome.winner {
            Color::Empty => println!("平局 {} : {}", outcome.black, outcome.white),
            winner => println!("{} 胜 {} : {}", winner, outcome.black, outcome.white),
        }
    } else {
        let result = play_tournament(
            &mut players,
            &board,
            config.first_mover,
            config.rounds,
            config.swap_order,
        );
        println!(
            "{} {} 胜, {} {} 胜, {} 平",
            players[0].name(),
            result.wins[0],
            players[1].name(),
            result.wins[1],
            result.draws
        );
    }

    Ok(())
}
