//! オセロのコンソール対局エントリポイント
//! 設定読み込み、ログ初期化、プレイヤー生成を行い、1局を終局まで進める。

use std::cell::RefCell;
use std::io::{self, Stdout, StdinLock};
use std::rc::Rc;

use othello::{
    config::{Config, PlayerKind},
    game::{Board, GameState, Player, Round, TurnOutcome},
    logging,
    player::{format_position, ConsolePlayer, MoveSource, PlayerAction, RandomPlayer},
    render::{player_symbol, render_board, render_result},
    Result,
};

type Console = Rc<RefCell<ConsolePlayer<StdinLock<'static>, Stdout>>>;

/// 標準入力を共有する人間プレイヤーの席
/// 黒白とも人間の場合に同じ入力ストリームを読む
struct HumanSeat {
    name: String,
    console: Console,
}

impl MoveSource for HumanSeat {
    fn choose_move(&mut self, player: Player, board: &Board) -> Result<PlayerAction> {
        self.console.borrow_mut().choose_move(player, board)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn create_player(
    kind: PlayerKind,
    player: Player,
    seed: Option<u64>,
    console: &Console,
) -> Box<dyn MoveSource> {
    let name = format!("{:?}", player);
    match kind {
        PlayerKind::Human => Box::new(HumanSeat {
            name,
            console: Rc::clone(console),
        }),
        PlayerKind::Random => match seed {
            // 両者が同じ乱数列にならないよう手番ごとにシードをずらす
            Some(seed) => Box::new(RandomPlayer::with_seed(name, seed.wrapping_add(player as u64))),
            None => Box::new(RandomPlayer::new(name)),
        },
    }
}

/// メイン関数 - 対局の初期化と進行を担当
fn main() {
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("設定エラー: {}", e);
        std::process::exit(1);
    });
    if let Err(e) = config.validate() {
        eprintln!("設定エラー: {}", e);
        std::process::exit(1);
    }

    logging::init(&config.logging.level);

    let state = GameState::new(config.game.board_size).unwrap_or_else(|e| {
        eprintln!("対局作成失敗: {}", e);
        std::process::exit(1);
    });

    let console: Console = Rc::new(RefCell::new(ConsolePlayer::new(
        "console",
        io::stdin().lock(),
        io::stdout(),
    )));
    let dark = create_player(config.game.dark, Player::Dark, config.game.seed, &console);
    let light = create_player(config.game.light, Player::Light, config.game.seed, &console);
    let mut round = Round::new(state, dark, light, config.limits.clone());

    print!("{}", render_board(&round.state().board));
    loop {
        match round.step() {
            Ok(TurnOutcome::Moved { player, position, .. }) => {
                println!("Player '{}' played {}", player_symbol(player), format_position(position));
                print!("{}", render_board(&round.state().board));
            }
            Ok(TurnOutcome::Rejected { .. }) => {
                println!("Invalid move. Please try again.");
            }
            Ok(TurnOutcome::Undone(_)) => {
                print!("{}", render_board(&round.state().board));
            }
            Ok(TurnOutcome::UndoIgnored) => {
                println!("Warning: No history record found.");
            }
            Ok(TurnOutcome::Finished(result)) => {
                println!("No further moves available");
                println!("{}", render_result(&result));
                break;
            }
            Err(e) => {
                eprintln!("対局中断: {}", e);
                std::process::exit(1);
            }
        }
    }
}
