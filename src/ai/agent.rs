use crate::game::GameState;

/// Universal interface for all AI strategies.
pub trait Agent {
    /// Select an action (column) given the current game state. The state is
    /// guaranteed non-terminal by the caller.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Clone the agent into a boxed trait object.
    fn clone_agent(&self) -> Box<dyn Agent>;
}
