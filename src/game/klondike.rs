//! The Klondike game aggregate and its move engine.
//!
//! `Game` owns the board, selection, draw mode, seed source and win flag.
//! Every command is atomic: it validates against the current state first and
//! only then mutates, so an `Err` means nothing changed.

use log::{debug, trace};

use crate::core::card::Card;
use crate::core::command::{Command, Outcome};
use crate::core::config::{DrawMode, KlondikeConfig, COLUMN_COUNT};
use crate::core::error::MoveError;
use crate::core::rng::Seed;
use crate::core::seed::{EntropySeeds, SeedSource};
use crate::rules;
use crate::state::{Board, BoardView, Selection, Span};
use crate::state::view::ViewStatus;

/// A single-player Klondike game.
///
/// ## Example
///
/// ```
/// use klondike_engine::{Command, GameBuilder, Outcome, Seed};
///
/// let mut game = GameBuilder::new().seed(Seed::new(12345).unwrap()).build();
/// assert_eq!(game.board().stock().len(), 24);
///
/// assert_eq!(game.apply(Command::Draw), Ok(Outcome::Drew(1)));
/// assert_eq!(game.board().waste().len(), 1);
/// ```
pub struct Game {
    board: Board,
    selection: Selection,
    config: KlondikeConfig,
    seed: Option<Seed>,
    won: bool,
    moves: u32,
    seeds: Box<dyn SeedSource>,
}

impl Game {
    /// Deal a game from `seed`; later deals draw seeds from `seeds`.
    pub fn new(config: KlondikeConfig, seed: Seed, seeds: Box<dyn SeedSource>) -> Self {
        debug!("dealt game: seed={seed}, mode={}", config.draw_mode);
        Self {
            board: Board::deal(seed),
            selection: Selection::None,
            config,
            seed: Some(seed),
            won: false,
            moves: 0,
            seeds,
        }
    }

    /// Wrap a hand-built board. The game has no seed until the next deal.
    #[must_use]
    pub fn from_board(board: Board, mode: DrawMode) -> Self {
        let won = rules::is_won(board.foundation());
        Self {
            board,
            selection: Selection::None,
            config: KlondikeConfig::new().with_draw_mode(mode),
            seed: None,
            won,
            moves: 0,
            seeds: Box::new(EntropySeeds),
        }
    }

    /// Replace the source consulted by `new_game`.
    pub fn set_seed_source(&mut self, seeds: Box<dyn SeedSource>) {
        self.seeds = seeds;
    }

    // === Read-only state ===

    /// Card placement.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &KlondikeConfig {
        &self.config
    }

    /// Current draw mode.
    #[must_use]
    pub fn draw_mode(&self) -> DrawMode {
        self.config.draw_mode
    }

    /// Seed of the current deal.
    #[must_use]
    pub fn seed(&self) -> Option<Seed> {
        self.seed
    }

    /// True once every foundation pile is complete. Cleared by a new deal.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Accepted card-moving commands since the deal.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::capture(
            &self.board,
            &self.selection,
            ViewStatus {
                won: self.won,
                mode: self.config.draw_mode,
                visible_waste: self.config.visible_waste_count(),
                seed: self.seed,
                moves: self.moves,
            },
        )
    }

    // === Dispatch ===

    /// Apply a command from the presentation layer.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, MoveError> {
        if self.won && !command.allowed_after_win() {
            trace!("{command:?} rejected: game won");
            return Err(MoveError::GameWon);
        }

        let result = match command {
            Command::Draw => self.draw(),
            Command::SelectColumn(column) => self.select_column(column),
            Command::SelectWaste => self.select_waste(),
            Command::MoveToFoundation => self.move_to_foundation(),
            Command::MoveToColumn(column) => self.move_to_column(column),
            Command::Deselect => Ok(self.deselect()),
            Command::NewGame(mode) => Ok(self.new_game(mode)),
            Command::SetMode(mode) => Ok(self.set_mode(mode)),
            Command::TapColumn(column) => self.tap_column(column),
        };

        match &result {
            Ok(outcome) => trace!("{command:?} accepted: {outcome:?}"),
            Err(err) => trace!("{command:?} rejected: {err}"),
        }
        result
    }

    // === Commands ===

    /// Draw from the stock, or recycle the waste when the stock is empty.
    ///
    /// Clears a waste selection; a column selection survives. With both
    /// stock and waste empty there is nothing to do and the draw is rejected.
    pub fn draw(&mut self) -> Result<Outcome, MoveError> {
        self.ensure_playable()?;
        if self.board.stock().is_empty() && self.board.waste().is_empty() {
            return Err(MoveError::EmptySource);
        }

        let outcome = if self.board.stock().is_empty() {
            let recycled = self.board.recycle();
            debug!("recycled {recycled} waste cards into the stock");
            Outcome::Recycled(recycled)
        } else {
            Outcome::Drew(self.board.draw(self.config.draw_mode.count()))
        };

        if self.selection == Selection::Waste {
            self.selection = Selection::None;
        }
        self.moves += 1;
        Ok(outcome)
    }

    /// Select a column's run, or step the selection when this column is
    /// already selected.
    ///
    /// A fresh selection covers the whole movable run. Each repeat drops one
    /// card from the deep end; past a single card the selection clears.
    pub fn select_column(&mut self, column: usize) -> Result<Outcome, MoveError> {
        check_column(column)?;
        self.ensure_playable()?;

        let run = self.run_len(column);

        if let Selection::Column { column: current, span } = self.selection {
            if current == column {
                return Ok(match span.shrink(run) {
                    Some(next) => {
                        self.selection = Selection::Column { column, span: next };
                        Outcome::Selected(next.len(run))
                    }
                    None => {
                        self.selection = Selection::None;
                        Outcome::Deselected
                    }
                });
            }
        }

        if run == 0 {
            return Err(MoveError::NoFaceUpCards { column });
        }
        self.selection = Selection::Column { column, span: Span::All };
        Ok(Outcome::Selected(run))
    }

    /// Select the playable waste card.
    pub fn select_waste(&mut self) -> Result<Outcome, MoveError> {
        self.ensure_playable()?;
        if self.board.waste_top().is_none() {
            return Err(MoveError::EmptySource);
        }
        self.selection = Selection::Waste;
        Ok(Outcome::Selected(1))
    }

    /// Send the selected card to its foundation pile.
    ///
    /// For a column selection the exposed card moves, whatever the span.
    pub fn move_to_foundation(&mut self) -> Result<Outcome, MoveError> {
        self.ensure_playable()?;

        let card = self.selected_card()?;
        let top = self.board.foundation_pile(card.suit).last();
        if !rules::can_place_on_foundation(top, &card) {
            return Err(MoveError::IllegalFoundationMove { card });
        }

        let taken = match self.selection {
            Selection::Waste => self.board.take_waste_top(),
            Selection::Column { column, .. } => self.board.take_column_top(column),
            Selection::None => None,
        };
        debug_assert_eq!(taken.map(Card::key), Some(card.key()));

        self.board.place_on_foundation(card);
        self.selection = Selection::None;
        self.moves += 1;

        let won = self.check_win();
        Ok(Outcome::ToFoundation { won })
    }

    /// Move the selection onto a column.
    ///
    /// Only the head (deepest card) of the run is checked against the
    /// target; the run itself is valid because selections are always cut
    /// from `rules::run_len`.
    pub fn move_to_column(&mut self, target: usize) -> Result<Outcome, MoveError> {
        check_column(target)?;
        self.ensure_playable()?;

        let target_top = self.board.column_top(target).copied();

        match self.selection {
            Selection::None => Err(MoveError::NoSelection),
            Selection::Waste => {
                let card = *self.board.waste_top().ok_or(MoveError::EmptySource)?;
                if !rules::can_place_on_tableau(target_top.as_ref(), &card) {
                    return Err(MoveError::IllegalTableauMove { card, column: target });
                }

                let taken = self.board.take_waste_top();
                self.board.place_on_column(target, taken);
                Ok(self.finish_column_move(1))
            }
            Selection::Column { column, span } => {
                if column == target {
                    return Err(MoveError::SameColumn { column });
                }

                let len = span.len(self.run_len(column));
                let source = self.board.column(column).unwrap_or_default();
                if len == 0 {
                    return Err(MoveError::EmptySource);
                }

                let head = source[source.len() - len];
                if !rules::can_place_on_tableau(target_top.as_ref(), &head) {
                    return Err(MoveError::IllegalTableauMove { card: head, column: target });
                }

                let run = self.board.take_run(column, len);
                self.board.place_on_column(target, run);
                Ok(self.finish_column_move(len))
            }
        }
    }

    /// Clear the selection. Always succeeds.
    pub fn deselect(&mut self) -> Outcome {
        self.selection = Selection::None;
        Outcome::Deselected
    }

    /// Deal a new game with a seed from the seed source.
    ///
    /// Switches draw mode first when `mode` is given. Allowed in any state,
    /// including after a win.
    pub fn new_game(&mut self, mode: Option<DrawMode>) -> Outcome {
        if let Some(mode) = mode {
            self.config.draw_mode = mode;
        }
        let seed = self.seeds.next_seed();
        self.deal(seed)
    }

    /// Deal a new game from a specific seed (replays, shared deals).
    pub fn new_game_with_seed(&mut self, seed: Seed) -> Outcome {
        self.deal(seed)
    }

    /// Change the draw mode.
    ///
    /// Affects later draws and how many waste cards are surfaced; the
    /// waste already on the table is left as it is.
    pub fn set_mode(&mut self, mode: DrawMode) -> Outcome {
        if mode != self.config.draw_mode {
            debug!("draw mode {} -> {}", self.config.draw_mode, mode);
        }
        self.config.draw_mode = mode;
        Outcome::ModeSet(mode)
    }

    /// Single-gesture column input.
    ///
    /// - waste selected: move the waste card to `column`
    /// - nothing selected, or `column` itself selected: select / step
    /// - another column selected: move that run to `column`
    pub fn tap_column(&mut self, column: usize) -> Result<Outcome, MoveError> {
        check_column(column)?;
        match self.selection {
            Selection::Waste => self.move_to_column(column),
            Selection::Column { column: current, .. } if current != column => {
                self.move_to_column(column)
            }
            _ => self.select_column(column),
        }
    }

    // === Internals ===

    fn deal(&mut self, seed: Seed) -> Outcome {
        self.board = Board::deal(seed);
        self.selection = Selection::None;
        self.seed = Some(seed);
        self.won = false;
        self.moves = 0;
        debug!("dealt game: seed={seed}, mode={}", self.config.draw_mode);
        Outcome::Dealt(seed)
    }

    fn ensure_playable(&self) -> Result<(), MoveError> {
        if self.won {
            Err(MoveError::GameWon)
        } else {
            Ok(())
        }
    }

    fn run_len(&self, column: usize) -> usize {
        self.board.column(column).map_or(0, rules::run_len)
    }

    /// The single card a foundation move would take.
    fn selected_card(&self) -> Result<Card, MoveError> {
        match self.selection {
            Selection::None => Err(MoveError::NoSelection),
            Selection::Waste => self.board.waste_top().copied().ok_or(MoveError::EmptySource),
            Selection::Column { column, .. } => self
                .board
                .column_top(column)
                .filter(|card| card.face_up)
                .copied()
                .ok_or(MoveError::EmptySource),
        }
    }

    fn finish_column_move(&mut self, cards: usize) -> Outcome {
        self.selection = Selection::None;
        self.moves += 1;
        Outcome::ToColumn { cards }
    }

    /// Latch the win flag after a foundation change.
    fn check_win(&mut self) -> bool {
        if !self.won && rules::is_won(self.board.foundation()) {
            self.won = true;
            debug!("game won after {} moves", self.moves);
        }
        self.won
    }
}

fn check_column(column: usize) -> Result<(), MoveError> {
    if column < COLUMN_COUNT {
        Ok(())
    } else {
        Err(MoveError::ColumnOutOfRange { column })
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("selection", &self.selection)
            .field("config", &self.config)
            .field("seed", &self.seed)
            .field("won", &self.won)
            .field("moves", &self.moves)
            .finish_non_exhaustive()
    }
}
