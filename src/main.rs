use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tetrikan::{
    init_logging, Board, BoardFile, BoardSession, Cell, InputEvent, SettingsManager, TaskDraft,
    TaskId, BUILD_DATE, VERSION,
};

/// Packs kanban tasks as blocks into status bands and prints the board.
#[derive(Parser, Debug)]
#[command(name = "tetrikan", version, about)]
struct Args {
    /// Board file to load instead of the demo board
    board: Option<PathBuf>,
    /// Settings file (JSON or TOML) instead of the platform config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write the resulting board to this file
    #[arg(long)]
    save: Option<PathBuf>,
}

fn print_board(title: &str, board: &Board) {
    println!("== {} (generation {}) ==", title, board.generation());
    print!("{}", board.grid());
    for task in board.tasks() {
        let anchor = task
            .anchor
            .map(|c| c.to_string())
            .unwrap_or_else(|| "unplaced".to_string());
        println!(
            "  {:<4} {:<12} {} {:<24} {}",
            task.id.short(),
            task.status,
            task.shape,
            task.name,
            anchor
        );
    }
    println!();
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("Tetrikan {} (built {})", VERSION, BUILD_DATE);

    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => SettingsManager::load_from(path),
        None => SettingsManager::load(),
    }
    .context("Failed to load settings")?;
    let config = settings.config();
    let spec = config.board_spec().context("Invalid board configuration")?;

    let (board, sync) = match &args.board {
        Some(path) => BoardFile::load_from_file(path)?.to_board(spec),
        None => Board::demo(spec),
    };
    if !sync.is_complete() {
        tracing::warn!("{} task(s) could not be placed", sync.unplaced.len());
    }

    let mut session = BoardSession::new(board);
    session.set_clear_rows_after_transaction(config.tasks.clear_rows_after_transaction);
    print_board("Loaded", session.board());

    if args.board.is_none() {
        let demo = [
            InputEvent::Drop {
                task: TaskId::new("1"),
                cell: Cell::new(6, 7),
            },
            InputEvent::Click {
                task: TaskId::new("3"),
                rotate_modifier: true,
            },
            InputEvent::Create(
                TaskDraft::new("Write Docs")
                    .with_skill("Markdown")
                    .with_skill("Diagrams"),
            ),
        ];
        for event in demo {
            let label = format!("{:?}", event);
            match session.handle(event) {
                Ok(outcome) => tracing::info!("{:?}", outcome),
                Err(err) => tracing::warn!("{} rejected: {}", label, err),
            }
        }
        print_board("After demo transactions", session.board());
    }

    if let Some(path) = &args.save {
        BoardFile::from_board("tetrikan", session.board()).save_to_file(path)?;
    }

    Ok(())
}
