use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};

use crate::ai::{Agent, GreedyAgent, MinimaxAgent, RandomAgent};
use crate::config::{AppConfig, Strategy};
use crate::game::{GameOutcome, GameState, MoveError, Player, COLS};

pub struct App {
    config: AppConfig,
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    red_agent: Option<Box<dyn Agent>>,
    yellow_agent: Option<Box<dyn Agent>>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            config,
            game_state: GameState::initial(),
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
            red_agent: None,
            yellow_agent: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.drive_ai_turn();
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press. Lowercase strategy keys assign Yellow's
    /// controller, uppercase assign Red's.
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            KeyCode::Char('a') => self.assign_agent(Player::Yellow, Strategy::Random),
            KeyCode::Char('A') => self.assign_agent(Player::Red, Strategy::Random),
            KeyCode::Char('g') => self.assign_agent(Player::Yellow, Strategy::Greedy),
            KeyCode::Char('G') => self.assign_agent(Player::Red, Strategy::Greedy),
            KeyCode::Char('m') => self.assign_agent(Player::Yellow, Strategy::Minimax),
            KeyCode::Char('M') => self.assign_agent(Player::Red, Strategy::Minimax),
            KeyCode::Char('h') => self.clear_agent(Player::Yellow),
            KeyCode::Char('H') => self.clear_agent(Player::Red),
            _ => {}
        }
    }

    fn build_agent(&self, strategy: Strategy) -> Box<dyn Agent> {
        match strategy {
            Strategy::Minimax => Box::new(MinimaxAgent::new(self.config.ai.search_depth)),
            Strategy::Greedy => Box::new(GreedyAgent),
            Strategy::Random => Box::new(RandomAgent::new()),
        }
    }

    fn assign_agent(&mut self, side: Player, strategy: Strategy) {
        let agent = self.build_agent(strategy);
        self.message = Some(format!("{} is now played by {}", side.name(), agent.name()));
        match side {
            Player::Red => self.red_agent = Some(agent),
            Player::Yellow => self.yellow_agent = Some(agent),
        }
    }

    fn clear_agent(&mut self, side: Player) {
        match side {
            Player::Red => self.red_agent = None,
            Player::Yellow => self.yellow_agent = None,
        }
        self.message = Some(format!("{} is now played by a human", side.name()));
    }

    /// When the side to move is AI-controlled, let its agent pick a column
    /// and apply it through the same path as a human move.
    fn drive_ai_turn(&mut self) {
        if self.game_state.is_terminal() {
            return;
        }
        let agent = match self.game_state.current_player() {
            Player::Red => self.red_agent.as_mut(),
            Player::Yellow => self.yellow_agent.as_mut(),
        };
        let Some(agent) = agent else {
            return;
        };

        // Brief pause so the move is visible rather than instantaneous
        std::thread::sleep(Duration::from_millis(self.config.ai.move_delay_ms));
        let column = agent.select_action(&self.game_state);
        self.apply_column(column);
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let side = self.game_state.current_player();
        let ai_controls = match side {
            Player::Red => self.red_agent.is_some(),
            Player::Yellow => self.yellow_agent.is_some(),
        };
        if ai_controls {
            self.message = Some(format!("{} is controlled by the AI", side.name()));
            return;
        }

        self.apply_column(self.selected_column);
    }

    fn apply_column(&mut self, column: usize) {
        match self.game_state.apply_move_mut(column) {
            Ok(()) => {
                // Check if game just ended
                if let Some(outcome) = self.game_state.outcome() {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) => {
                            format!("{} wins!", player.name())
                        }
                        GameOutcome::Draw => "It's a draw!".to_string(),
                    });
                }
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Start a fresh game. With an AI side in play the starter is assigned
    /// at random, as a human opening move would otherwise always lead.
    fn restart(&mut self) {
        let first = if self.red_agent.is_some() || self.yellow_agent.is_some() {
            if rand::rng().random_bool(0.5) {
                Player::Red
            } else {
                Player::Yellow
            }
        } else {
            Player::Red
        };
        self.game_state = GameState::with_first_player(first);
        self.selected_column = 3;
        self.message = Some(format!("New game started, {} moves first", first.name()));
    }

    fn mode_label(&self) -> String {
        fn label(agent: &Option<Box<dyn Agent>>) -> &str {
            match agent {
                Some(agent) => agent.name(),
                None => "Human",
            }
        }
        format!(
            "Red: {}  Yellow: {}",
            label(&self.red_agent),
            label(&self.yellow_agent)
        )
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            &self.mode_label(),
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
